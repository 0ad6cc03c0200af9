//! The synchronization engine.

use crate::error::{SyncError, SyncResult};
use crate::provider::PlayerProvider;
use parking_lot::RwLock;
use serde::Serialize;
use squad_core::UpdateStatus;
use squad_store::{PlayerStore, UpsertOutcome, WriteGuard};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Merge mode for a sync run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MergeMode {
    /// Leave records flagged for manual correction untouched.
    #[default]
    Preserve,
    /// Replace matching records regardless of trust status.
    Overwrite,
}

impl MergeMode {
    /// Maps the caller-facing overwrite flag to a merge mode.
    pub fn from_overwrite(overwrite: bool) -> Self {
        if overwrite {
            MergeMode::Overwrite
        } else {
            MergeMode::Preserve
        }
    }

    /// The write guard this mode selects for the whole batch.
    pub fn write_guard(self) -> WriteGuard {
        match self {
            MergeMode::Preserve => WriteGuard::ExcludeFlagged,
            MergeMode::Overwrite => WriteGuard::None,
        }
    }
}

/// Outcome of one synchronization run.
///
/// The counters are present only when non-zero, and the serialized form
/// omits them entirely in that case: a merge that only inserted reports no
/// `modifiedPlayers` key and vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncReport {
    /// Whether the run completed.
    pub success: bool,
    /// Newly created records, when any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inserted_players: Option<u64>,
    /// Existing records whose fields changed, when any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_players: Option<u64>,
}

impl SyncReport {
    fn from_outcome(outcome: UpsertOutcome) -> Self {
        Self {
            success: true,
            inserted_players: (outcome.inserted > 0).then_some(outcome.inserted),
            modified_players: (outcome.modified > 0).then_some(outcome.modified),
        }
    }
}

/// Statistics about sync runs.
#[derive(Debug, Clone, Default)]
pub struct SyncStats {
    /// Total number of runs completed.
    pub runs_completed: u64,
    /// Total number of players fetched from the provider.
    pub players_fetched: u64,
    /// Total number of players written (inserted or modified).
    pub players_written: u64,
    /// Last error message.
    pub last_error: Option<String>,
}

/// The synchronization engine.
///
/// Orchestrates one club's sync run: provider fetch, per-player activity
/// resolution, stamping, and the conflict-aware bulk merge. Collaborators
/// are injected as shared capability handles; the engine holds no
/// transport or storage details of its own.
pub struct SyncEngine<P, S> {
    provider: Arc<P>,
    store: Arc<S>,
    stats: RwLock<SyncStats>,
}

impl<P: PlayerProvider, S: PlayerStore> SyncEngine<P, S> {
    /// Creates a sync engine over a provider and a shared store handle.
    pub fn new(provider: Arc<P>, store: Arc<S>) -> Self {
        Self {
            provider,
            store,
            stats: RwLock::new(SyncStats::default()),
        }
    }

    /// Returns the current stats.
    pub fn stats(&self) -> SyncStats {
        self.stats.read().clone()
    }

    /// Runs one synchronization for a club.
    ///
    /// Fetches the club's squad, resolves each player's activity status,
    /// stamps `club_id` and the trusted status, and submits the whole set
    /// as one bulk-upsert batch guarded according to `mode`.
    ///
    /// Any provider failure, including a single undefined activity flag,
    /// aborts the run before anything is written. Storage errors propagate
    /// unmodified.
    pub fn sync(&self, club_id: &str, mode: MergeMode) -> SyncResult<SyncReport> {
        info!(club_id, ?mode, "starting player sync");

        let fetched = self
            .provider
            .players_by_club(club_id)
            .map_err(|e| self.fail(e))?;
        debug!(club_id, count = fetched.len(), "fetched club squad");

        let mut resolved = Vec::with_capacity(fetched.len());
        for player in fetched {
            let is_active = self
                .provider
                .active_status(&player.id)
                .map_err(|e| self.fail(e))?;
            resolved.push(
                player
                    .with_club_id(club_id)
                    .with_active(is_active)
                    .with_update_status(UpdateStatus::Updated),
            );
        }

        let outcome = self
            .store
            .bulk_upsert(&resolved, mode.write_guard())
            .map_err(|e| self.fail(SyncError::from(e)))?;

        {
            let mut stats = self.stats.write();
            stats.runs_completed += 1;
            stats.players_fetched += resolved.len() as u64;
            stats.players_written += outcome.inserted + outcome.modified;
            stats.last_error = None;
        }

        info!(
            club_id,
            inserted = outcome.inserted,
            modified = outcome.modified,
            "player sync complete"
        );
        Ok(SyncReport::from_outcome(outcome))
    }

    /// Records the failure and hands the error back unchanged.
    fn fail(&self, error: SyncError) -> SyncError {
        warn!(error = %error, "player sync aborted");
        self.stats.write().last_error = Some(error.to_string());
        error
    }
}
