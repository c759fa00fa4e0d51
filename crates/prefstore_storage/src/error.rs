//! Error types for storage operations.

use std::io;
use thiserror::Error;

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The write would exceed the backend's capacity.
    #[error("quota exceeded: {required} bytes needed, limit is {limit}")]
    QuotaExceeded {
        /// Bytes the store would hold after the write.
        required: usize,
        /// The configured limit in bytes.
        limit: usize,
    },

    /// The storage contents could not be interpreted.
    #[error("storage corrupted: {0}")]
    Corrupted(String),

    /// The storage exists but refuses access (disabled, blocked, absent).
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Corrupted(err.to_string())
    }
}
