//! Filesystem management: deletion and existence checks.

use crate::error::{LineFileError, Result};
use std::path::Path;

/// Remove the file at `path` from the filesystem.
///
/// A missing file is [`LineFileError::FileNotFound`]; any other OS-level
/// failure (permissions, the path being a directory) is reported as
/// [`LineFileError::RemovalFailed`] with the underlying cause attached.
pub fn delete_file(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    std::fs::remove_file(path).map_err(|err| match err.kind() {
        std::io::ErrorKind::NotFound => LineFileError::file_not_found(path),
        _ => {
            log::warn!("failed to remove {}: {}", path.display(), err);
            LineFileError::removal_failed(path, err)
        }
    })
}

/// Check whether a file exists at `path`.
///
/// Follows symlinks and returns `false` for broken links or inaccessible
/// paths; this never errors.
pub fn file_exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().exists()
}
