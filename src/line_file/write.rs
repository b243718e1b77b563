//! Whole-file mutation operations.
//!
//! Mutating a line means loading the current contents, applying the one change
//! and rewriting the file from scratch. The read and the write are not atomic
//! as a pair, so concurrent callers on the same path may race.

use crate::error::{LineFileError, Result};
use crate::line_file::read::read_all;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Replace line `line_number` (1-based) of the file at `path` with `text`.
///
/// Loads all lines, swaps in `text` with a `\n` terminator and rewrites the
/// whole file. When `line_number` is outside `1..=count` the file is left
/// untouched and [`LineFileError::LineOutOfRange`] is returned. A missing
/// file is [`LineFileError::FileNotFound`].
pub fn replace_line(path: impl AsRef<Path>, line_number: usize, text: &str) -> Result<()> {
    let path = path.as_ref();
    let mut lines = read_all(path)?;

    if line_number == 0 || line_number > lines.len() {
        log::warn!(
            "line {} out of range for {} ({} lines), no change made",
            line_number,
            path.display(),
            lines.len()
        );
        return Err(LineFileError::LineOutOfRange {
            line: line_number,
            total: lines.len(),
        });
    }

    lines[line_number - 1] = format!("{text}\n");
    write_all(path, &lines)
}

/// Append `text` followed by a line terminator to the file at `path`,
/// creating the file if it does not exist.
pub fn append_line(path: impl AsRef<Path>, text: &str) -> Result<()> {
    let path = path.as_ref();
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|err| {
            LineFileError::io(format!("failed to open {} for append", path.display()), err)
        })?;

    writeln!(file, "{text}")
        .map_err(|err| LineFileError::io(format!("failed to append to {}", path.display()), err))
}

/// Overwrite the file at `path` with the given ordered sequence of lines.
///
/// Lines are written verbatim; callers supply the terminators, so the output
/// of [`read_all`](crate::line_file::read::read_all) round-trips unchanged.
/// The file is created if absent and truncated otherwise.
pub fn write_all<S: AsRef<str>>(path: impl AsRef<Path>, lines: &[S]) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|err| {
        LineFileError::io(format!("failed to open {} for writing", path.display()), err)
    })?;

    let mut writer = BufWriter::new(file);
    for line in lines {
        writer.write_all(line.as_ref().as_bytes()).map_err(|err| {
            LineFileError::io(format!("failed to write to {}", path.display()), err)
        })?;
    }
    writer
        .flush()
        .map_err(|err| LineFileError::io(format!("failed to write to {}", path.display()), err))
}
