//! Error types for the storage boundary.

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur at the storage boundary.
///
/// Engines propagate these unmodified; there is no local retry or fallback.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The underlying store could not be reached or rejected the operation.
    #[error("storage backend error: {message}")]
    Backend {
        /// Description of the failure.
        message: String,
    },

    /// A stored document could not be decoded into a player record.
    #[error("malformed document for player {id}: {message}")]
    MalformedDocument {
        /// Id of the offending record.
        id: String,
        /// Description of the decode failure.
        message: String,
    },
}

impl StoreError {
    /// Creates a backend error.
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }
}
