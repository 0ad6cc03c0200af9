//! In-memory player store.

use crate::error::StoreResult;
use crate::store::{CountedPage, PlayerStore, UpsertOutcome, WriteGuard};
use parking_lot::RwLock;
use squad_core::{Player, Predicate, UpdateStatus};

/// An in-memory player store.
///
/// Records are kept in insertion order, which is the order `count_and_page`
/// pages through. Suitable for:
/// - Unit and integration tests
/// - Ephemeral catalogs that don't need persistence
///
/// # Thread Safety
///
/// All state sits behind a single `RwLock`, so the combined count+page read
/// observes one consistent snapshot and a bulk upsert applies atomically
/// with respect to readers.
#[derive(Debug, Default)]
pub struct MemoryPlayerStore {
    players: RwLock<Vec<Player>>,
}

impl MemoryPlayerStore {
    /// Creates a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with records, preserving their order.
    ///
    /// Useful for test scenarios.
    #[must_use]
    pub fn with_players(players: Vec<Player>) -> Self {
        Self {
            players: RwLock::new(players),
        }
    }

    /// Returns a snapshot of all records in insertion order.
    ///
    /// Useful for testing and debugging.
    #[must_use]
    pub fn players(&self) -> Vec<Player> {
        self.players.read().clone()
    }

    /// Returns the number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.read().len()
    }

    /// Returns true when the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.read().is_empty()
    }
}

impl PlayerStore for MemoryPlayerStore {
    fn count_and_page(
        &self,
        predicate: &Predicate,
        skip: u64,
        limit: Option<u64>,
    ) -> StoreResult<CountedPage> {
        let players = self.players.read();
        let matching: Vec<&Player> = players
            .iter()
            .filter(|player| predicate.matches(player))
            .collect();

        let total_count = matching.len() as u64;
        let skip = usize::try_from(skip).unwrap_or(usize::MAX);
        let window = matching.into_iter().skip(skip);

        let players = match limit {
            Some(limit) => {
                let limit = usize::try_from(limit).unwrap_or(usize::MAX);
                window.take(limit).cloned().collect()
            }
            None => window.cloned().collect(),
        };

        Ok(CountedPage {
            total_count,
            players,
        })
    }

    fn bulk_upsert(&self, records: &[Player], guard: WriteGuard) -> StoreResult<UpsertOutcome> {
        let mut players = self.players.write();
        let mut outcome = UpsertOutcome::default();

        for record in records {
            match players.iter_mut().find(|player| player.id == record.id) {
                Some(existing) => {
                    if guard == WriteGuard::ExcludeFlagged
                        && existing.update_status == UpdateStatus::ToUpdate
                    {
                        continue;
                    }
                    if *existing != *record {
                        *existing = record.clone();
                        outcome.modified += 1;
                    }
                }
                None => {
                    players.push(record.clone());
                    outcome.inserted += 1;
                }
            }
        }

        Ok(outcome)
    }
}
