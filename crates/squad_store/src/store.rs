//! The storage capability trait.

use crate::error::StoreResult;
use squad_core::{Player, Predicate};

/// Extra write filter applied to every update in a bulk merge batch.
///
/// The guard is selected once per batch run, not per record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteGuard {
    /// Match existing records by key alone.
    None,
    /// Additionally require that the existing record is not flagged for
    /// manual correction; a flagged record is left untouched.
    ExcludeFlagged,
}

/// Result of a combined count-and-page read.
#[derive(Debug, Clone, PartialEq)]
pub struct CountedPage {
    /// Number of records matching the predicate, regardless of the window.
    pub total_count: u64,
    /// The requested slice of the matching set, in insertion order.
    pub players: Vec<Player>,
}

/// Aggregated result of a bulk upsert batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpsertOutcome {
    /// Newly created records.
    pub inserted: u64,
    /// Existing records whose fields changed.
    pub modified: u64,
}

/// A document store holding player records.
///
/// The handle is a long-lived shared resource; implementations must be safe
/// to share across threads. All consistency guarantees are delegated to the
/// store: atomic per-document writes and a consistent view for the combined
/// count+page read.
pub trait PlayerStore: Send + Sync {
    /// Counts all records matching `predicate` and returns the slice
    /// `[skip, skip + limit)` of the same matching set, in the store's
    /// insertion order.
    ///
    /// The count and the page come from one consistent view, so they can
    /// never disagree about the matching set. `limit: None` applies no
    /// upper bound.
    fn count_and_page(
        &self,
        predicate: &Predicate,
        skip: u64,
        limit: Option<u64>,
    ) -> StoreResult<CountedPage>;

    /// Upserts every record, keyed by its provider id, as one batch.
    ///
    /// New records always insert. For existing records the guard decides:
    /// [`WriteGuard::ExcludeFlagged`] skips records whose current trust
    /// status is `ToUpdate`; [`WriteGuard::None`] overwrites
    /// unconditionally. A rewrite that changes nothing is not counted as a
    /// modification.
    fn bulk_upsert(&self, players: &[Player], guard: WriteGuard) -> StoreResult<UpsertOutcome>;
}
