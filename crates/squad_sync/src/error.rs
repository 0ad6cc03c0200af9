//! Error types for the synchronization engine.

use squad_store::StoreError;
use thiserror::Error;

/// Result type for sync operations.
pub type SyncResult<T> = Result<T, SyncError>;

/// Errors that can occur during a sync run.
///
/// Every variant is fatal to the run: there is no partial merge and no
/// degraded-but-successful result.
#[derive(Debug, Error)]
pub enum SyncError {
    /// The provider could not be reached or rejected the request.
    #[error("provider error: {message}")]
    Provider {
        /// Description of the failure.
        message: String,
    },

    /// A provider response could not be decoded.
    #[error("protocol error: {0}")]
    Protocol(String),

    /// The provider had no defined activity flag for a player.
    ///
    /// A provider that cannot answer the activity question is treated as
    /// unreliable; the run aborts rather than guessing a default.
    #[error("activity status unavailable for player {player_id}")]
    ActivityUnavailable {
        /// Id of the player the provider could not answer for.
        player_id: String,
    },

    /// Storage error during the merge batch, surfaced unchanged.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}

impl SyncError {
    /// Creates a provider error.
    pub fn provider(message: impl Into<String>) -> Self {
        Self::Provider {
            message: message.into(),
        }
    }

    /// Returns true if this error means the provider returned data the
    /// engine refuses to trust, as opposed to failing to return data.
    pub fn is_data_integrity(&self) -> bool {
        matches!(self, SyncError::ActivityUnavailable { .. })
    }
}
