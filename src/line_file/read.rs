//! Read-only line scans.
//!
//! Each function here opens the file, performs one sequential pass and stops as
//! early as it can. Nothing is cached between calls; repeated access re-reads
//! the file.

use crate::error::{LineFileError, Result};
use crate::line_file::{open_existing, read_existing};
use memchr::memchr_iter;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read line `line_number` (1-based) from the file at `path`.
///
/// Scans sequentially from the start and stops at the requested line. The
/// returned text has trailing whitespace (including the terminator) stripped.
///
/// Returns `Ok(None)` when `line_number` is 0 or exceeds the number of lines
/// in the file, and `Err(LineFileError::FileNotFound)` when the file is
/// missing.
pub fn get_line(path: impl AsRef<Path>, line_number: usize) -> Result<Option<String>> {
    let path = path.as_ref();
    if line_number == 0 {
        // Line numbers are 1-based; 0 is below the valid range.
        return Ok(None);
    }

    let reader = BufReader::new(open_existing(path)?);
    for (index, line) in reader.lines().enumerate() {
        let line =
            line.map_err(|err| LineFileError::io(format!("failed to read {}", path.display()), err))?;
        if index + 1 == line_number {
            return Ok(Some(line.trim_end().to_string()));
        }
    }

    log::debug!(
        "line {} past end of {}",
        line_number,
        path.display()
    );
    Ok(None)
}

/// Read the full ordered sequence of lines from the file at `path`.
///
/// Each line retains its terminator; the final line keeps whatever it had
/// (possibly nothing). An empty file yields an empty vector. Round-trips
/// with [`write_all`](crate::line_file::write::write_all).
pub fn read_all(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let bytes = read_existing(path)?;
    let contents = String::from_utf8_lossy(&bytes);
    Ok(contents.split_inclusive('\n').map(str::to_string).collect())
}

/// Count the lines in the file at `path`.
///
/// Counts newline bytes with a single memchr pass; an unterminated trailing
/// fragment counts as one more line.
pub fn count_lines(path: impl AsRef<Path>) -> Result<usize> {
    let bytes = read_existing(path.as_ref())?;
    let mut count = memchr_iter(b'\n', &bytes).count();
    if bytes.last().is_some_and(|last| *last != b'\n') {
        count += 1;
    }
    Ok(count)
}

/// Find the first line containing `substring` in the file at `path`.
///
/// Returns the 1-based index of the first matching line, or `Ok(None)` when
/// no line matches. The match is a plain substring test against the line
/// including its terminator, so a `substring` of "\n" matches any terminated
/// line.
pub fn find_line(path: impl AsRef<Path>, substring: &str) -> Result<Option<usize>> {
    let path = path.as_ref();
    let mut reader = BufReader::new(open_existing(path)?);
    let mut line = String::new();
    let mut line_number = 0usize;

    loop {
        line.clear();
        let read = reader
            .read_line(&mut line)
            .map_err(|err| LineFileError::io(format!("failed to read {}", path.display()), err))?;
        if read == 0 {
            return Ok(None);
        }
        line_number += 1;
        if line.contains(substring) {
            return Ok(Some(line_number));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Create a test file with specific content
    fn create_test_file(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content)
            .expect("Failed to write test content");
        file.flush().expect("Failed to flush test file");
        file
    }

    #[test]
    fn test_get_line_in_range() {
        let file = create_test_file(b"line1\nline2\nline3\n");

        assert_eq!(get_line(file.path(), 1).unwrap(), Some("line1".to_string()));
        assert_eq!(get_line(file.path(), 3).unwrap(), Some("line3".to_string()));
    }

    #[test]
    fn test_get_line_strips_trailing_whitespace() {
        let file = create_test_file(b"padded   \t\nnext\n");

        assert_eq!(get_line(file.path(), 1).unwrap(), Some("padded".to_string()));
    }

    #[test]
    fn test_get_line_past_end_is_absent() {
        let file = create_test_file(b"only line\n");

        assert_eq!(get_line(file.path(), 2).unwrap(), None);
        assert_eq!(get_line(file.path(), 999).unwrap(), None);
    }

    #[test]
    fn test_get_line_zero_is_absent() {
        let file = create_test_file(b"line1\n");

        assert_eq!(get_line(file.path(), 0).unwrap(), None);
    }

    #[test]
    fn test_get_line_missing_file() {
        let err = get_line("/this/file/does/not/exist.txt", 1).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_read_all_keeps_terminators() {
        let file = create_test_file(b"a\nb\nfinal line without newline");

        let lines = read_all(file.path()).unwrap();
        assert_eq!(lines, vec!["a\n", "b\n", "final line without newline"]);
    }

    #[test]
    fn test_read_all_empty_file() {
        let file = create_test_file(b"");

        assert!(read_all(file.path()).unwrap().is_empty());
    }

    #[test]
    fn test_read_all_missing_file() {
        let err = read_all("/this/file/does/not/exist.txt").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_count_lines_terminated() {
        let file = create_test_file(b"line1\nline2\nline3\n");

        assert_eq!(count_lines(file.path()).unwrap(), 3);
    }

    #[test]
    fn test_count_lines_unterminated_tail() {
        let file = create_test_file(b"line1\nline2\ntail");

        assert_eq!(count_lines(file.path()).unwrap(), 3);
    }

    #[test]
    fn test_count_lines_empty_file() {
        let file = create_test_file(b"");

        assert_eq!(count_lines(file.path()).unwrap(), 0);
    }

    #[test]
    fn test_count_lines_matches_read_all() {
        let file = create_test_file(b"short\na longer line\n\nempty above\nno newline at end");

        assert_eq!(
            count_lines(file.path()).unwrap(),
            read_all(file.path()).unwrap().len()
        );
    }

    #[test]
    fn test_find_line_first_match_wins() {
        let file = create_test_file(b"error on line1\nno match here\nerror on line3\n");

        assert_eq!(find_line(file.path(), "error").unwrap(), Some(1));
        assert_eq!(find_line(file.path(), "line3").unwrap(), Some(3));
    }

    #[test]
    fn test_find_line_no_match() {
        let file = create_test_file(b"alpha\nbeta\n");

        assert_eq!(find_line(file.path(), "gamma").unwrap(), None);
    }

    #[test]
    fn test_find_line_missing_file() {
        let err = find_line("/this/file/does/not/exist.txt", "x").unwrap_err();
        assert!(err.is_not_found());
    }
}
