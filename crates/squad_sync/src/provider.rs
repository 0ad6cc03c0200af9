//! Provider capability boundary.

use crate::error::{SyncError, SyncResult};
use squad_core::Player;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// A provider client fetches authoritative player data.
///
/// This trait abstracts the external data provider, allowing different
/// implementations (HTTP, mock for testing, etc.). The synchronization
/// engine never sees transport details.
pub trait PlayerProvider: Send + Sync {
    /// Lists all players currently in the given club's squad.
    ///
    /// The listing does not carry the club id; the caller stamps the id it
    /// asked for.
    fn players_by_club(&self, club_id: &str) -> SyncResult<Vec<Player>>;

    /// Resolves whether the player is still active.
    ///
    /// Fails with [`SyncError::ActivityUnavailable`] when the provider has
    /// no defined answer; activity is never guessed.
    fn active_status(&self, player_id: &str) -> SyncResult<bool>;
}

/// A mock provider for testing.
///
/// Squads and activity flags are preloaded per club / per player. A player
/// with no preloaded flag produces the data-unavailable error, mirroring a
/// provider that cannot answer the activity question.
#[derive(Debug, Default)]
pub struct MockProvider {
    squads: Mutex<HashMap<String, Vec<Player>>>,
    statuses: Mutex<HashMap<String, bool>>,
    fail_listings: AtomicBool,
}

impl MockProvider {
    /// Creates a new mock provider with no data.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the squad returned for a club.
    pub fn set_squad(&self, club_id: impl Into<String>, players: Vec<Player>) {
        self.squads.lock().unwrap().insert(club_id.into(), players);
    }

    /// Sets the activity flag returned for a player.
    pub fn set_active_status(&self, player_id: impl Into<String>, is_active: bool) {
        self.statuses
            .lock()
            .unwrap()
            .insert(player_id.into(), is_active);
    }

    /// Makes every listing call fail with a provider error.
    pub fn fail_listings(&self, fail: bool) {
        self.fail_listings.store(fail, Ordering::SeqCst);
    }
}

impl PlayerProvider for MockProvider {
    fn players_by_club(&self, club_id: &str) -> SyncResult<Vec<Player>> {
        if self.fail_listings.load(Ordering::SeqCst) {
            return Err(SyncError::provider("mock listing failure"));
        }
        Ok(self
            .squads
            .lock()
            .unwrap()
            .get(club_id)
            .cloned()
            .unwrap_or_default())
    }

    fn active_status(&self, player_id: &str) -> SyncResult<bool> {
        self.statuses
            .lock()
            .unwrap()
            .get(player_id)
            .copied()
            .ok_or_else(|| SyncError::ActivityUnavailable {
                player_id: player_id.to_string(),
            })
    }
}
