//! Failure-injecting store.

use squad_core::{Player, Predicate};
use squad_store::{CountedPage, PlayerStore, StoreError, StoreResult, UpsertOutcome, WriteGuard};

/// A store whose every operation fails with a backend error.
///
/// Useful for asserting that engines propagate storage errors unmodified
/// instead of retrying or degrading.
#[derive(Debug)]
pub struct FailingStore {
    message: String,
}

impl FailingStore {
    /// Creates a store that fails with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    fn error(&self) -> StoreError {
        StoreError::backend(self.message.clone())
    }
}

impl PlayerStore for FailingStore {
    fn count_and_page(
        &self,
        _predicate: &Predicate,
        _skip: u64,
        _limit: Option<u64>,
    ) -> StoreResult<CountedPage> {
        Err(self.error())
    }

    fn bulk_upsert(&self, _players: &[Player], _guard: WriteGuard) -> StoreResult<UpsertOutcome> {
        Err(self.error())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use squad_core::Filter;

    #[test]
    fn every_operation_fails() {
        let store = FailingStore::new("boom");

        let read = store.count_and_page(&Filter::new().predicate(), 0, None);
        assert_eq!(read.unwrap_err(), StoreError::backend("boom"));

        let write = store.bulk_upsert(&[], WriteGuard::None);
        assert_eq!(write.unwrap_err(), StoreError::backend("boom"));
    }
}
