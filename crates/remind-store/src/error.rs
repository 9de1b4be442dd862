//! Error types for remind-store.

use std::path::PathBuf;
use std::time::Duration;

/// Result type for remind-store operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in remind-store.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error variants
/// in future versions without breaking downstream code.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The persisted document could not be parsed. The file is left
    /// untouched for manual recovery; the operation that hit this aborts.
    #[error("store file {path} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Another process held the store lock for longer than the bounded wait.
    /// Safe to retry later.
    #[error("timed out after {waited:?} waiting for exclusive access to {path}")]
    LockTimeout { path: PathBuf, waited: Duration },

    /// Failed to create the store directory.
    #[error("failed to create store directory {path}: {source}")]
    CreateDirectory {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The atomic replace of the store file failed.
    #[error("failed to replace {path}: {source}")]
    Replace {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to serialize the store document.
    #[error("failed to serialize store document: {0}")]
    Serialize(#[source] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
