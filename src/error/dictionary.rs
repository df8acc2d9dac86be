//! Dictionary error module.
//!
//! Errors raised while reading the word list, the history file or the
//! prefix test fixture. The prefix index itself never fails.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or reading dictionary data.
#[derive(Error, Debug)]
pub enum DictionaryError {
    /// A data file the operation needs does not exist.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// A data file exists but could not be read or written.
    #[error("Failed to access {path}: {source}")]
    Access {
        /// The file being accessed
        path: PathBuf,
        /// The underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// A line could not be parsed into a record.
    #[error("Malformed record on line {line_number}: {reason}")]
    MalformedRecord {
        /// One-based line number, 0 when the line is not from a file
        line_number: usize,
        /// Why the line was rejected
        reason: String,
    },
}

impl DictionaryError {
    /// Maps an IO error on `path` to the matching variant.
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound(path)
        } else {
            Self::Access { path, source }
        }
    }
}
