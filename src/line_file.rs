//! Line-oriented file operations.
//!
//! This module provides the full operation set of the crate, split by concern:
//! read-only scans ([`read`]), whole-file mutation ([`write`]) and filesystem
//! management ([`fs`]). Every function is stateless: it opens the file, does a
//! single pass of work and releases the handle on every exit path.

use crate::error::{LineFileError, Result};
use std::fs::File;
use std::path::Path;

pub mod fs;
pub mod read;
pub mod write;

pub use fs::{delete_file, file_exists};
pub use read::{count_lines, find_line, get_line, read_all};
pub use write::{append_line, replace_line, write_all};

/// Open an existing file for reading, mapping a missing file to
/// [`LineFileError::FileNotFound`] so the path context is preserved.
pub(crate) fn open_existing(path: &Path) -> Result<File> {
    File::open(path).map_err(|err| match err.kind() {
        std::io::ErrorKind::NotFound => {
            log::warn!("file not found: {}", path.display());
            LineFileError::file_not_found(path)
        }
        _ => LineFileError::io(format!("failed to open {}", path.display()), err),
    })
}

/// Read an existing file fully into memory, with the same missing-file
/// mapping as [`open_existing`].
pub(crate) fn read_existing(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|err| match err.kind() {
        std::io::ErrorKind::NotFound => {
            log::warn!("file not found: {}", path.display());
            LineFileError::file_not_found(path)
        }
        _ => LineFileError::io(format!("failed to read {}", path.display()), err),
    })
}
