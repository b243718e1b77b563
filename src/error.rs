//! Error types and handling infrastructure for linefile.
//!
//! This module provides a centralized error handling system using `thiserror` for
//! custom error types. Every fallible operation in the crate returns the shared
//! [`Result`] alias so callers get one tagged error type instead of printed
//! diagnostics and sentinel values.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for linefile operations.
///
/// Covers the failure conditions of the line-oriented file operations:
/// missing files, out-of-range line numbers, removal failures and
/// underlying I/O errors.
#[derive(Error, Debug)]
pub enum LineFileError {
    /// File not found (common case, reported with the offending path)
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// A 1-based line number outside the file's current range
    #[error("line {line} out of range (file has {total} lines)")]
    LineOutOfRange { line: usize, total: usize },

    /// File removal failed for a reason other than the file being absent
    #[error("failed to remove {path}")]
    RemovalFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Any other I/O failure (read, write, create, metadata)
    #[error("{message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

/// Standard Result type for linefile operations.
pub type Result<T> = std::result::Result<T, LineFileError>;

impl LineFileError {
    /// Create a FileNotFound error for the given path
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create an Io error from an io::Error with additional context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a RemovalFailed error carrying the OS-level cause
    pub fn removal_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::RemovalFailed {
            path: path.into(),
            source,
        }
    }

    /// True when the error means the target file does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::FileNotFound { .. })
    }
}

// Automatic conversion from io::Error to LineFileError.
// NotFound loses its path context here; operations that know the path
// use file_not_found() at the call site instead.
impl From<std::io::Error> for LineFileError {
    fn from(err: std::io::Error) -> Self {
        let message = match err.kind() {
            std::io::ErrorKind::NotFound => "file not found",
            std::io::ErrorKind::PermissionDenied => "permission denied",
            _ => "io operation failed",
        };
        Self::Io {
            message: message.to_string(),
            source: err,
        }
    }
}
