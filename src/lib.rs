//! # linefile - Line-Oriented Text File Utilities
//!
//! A small collection of stateless functions for working with UTF-8 text files
//! one line at a time: read a specific line, replace a line, append a line,
//! read or write all lines, count lines, find a substring and delete files.
//!
//! ## Semantics
//!
//! - **1-based lines**: every operation that takes a line number counts from 1.
//! - **Whole-file mutation**: operations that change a file read the entire
//!   current contents, apply one change and rewrite the result. There is no
//!   incremental writing and no locking, so concurrent callers on the same
//!   path may race.
//! - **Absence vs. error**: "line past end of file" and "substring not found"
//!   are `Ok(None)`; missing files, out-of-range replacements and OS-level
//!   failures are [`LineFileError`] values.
//!
//! ## Architecture
//!
//! - [`error`] - Centralized error types and handling
//! - [`line_file`] - The line-oriented file operations
//!
//! ## Example
//!
//! ```no_run
//! use linefile::{append_line, get_line, Result};
//!
//! fn main() -> Result<()> {
//!     append_line("notes.txt", "remember the milk")?;
//!     let first = get_line("notes.txt", 1)?;
//!     println!("{first:?}");
//!     Ok(())
//! }
//! ```

// Core modules
pub mod error;
pub mod line_file;

// Re-export commonly used types for convenience
pub use error::{LineFileError, Result};

// Public API surface for external usage
pub use line_file::{
    append_line, count_lines, delete_file, file_exists, find_line, get_line, read_all,
    replace_line, write_all,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
