//! Storage error types

use thiserror::Error;

/// Errors that can occur while reading or writing a storage slot
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error on key '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Storage quota exceeded writing key '{key}'")]
    QuotaExceeded { key: String },

    #[error("Failed to lock storage for key '{key}'")]
    LockFailed { key: String },

    #[error("Invalid storage key: '{0}'")]
    InvalidKey(String),
}

impl StorageError {
    pub(crate) fn io(key: &str, source: std::io::Error) -> Self {
        Self::Io {
            key: key.to_string(),
            source,
        }
    }
}

/// Result alias for storage operations
pub type Result<T> = std::result::Result<T, StorageError>;
