//! The query engine.

use serde::Serialize;
use squad_core::{Filter, PageSize, Pagination, Player, DEFAULT_PAGE_SIZE};
use squad_store::{PlayerStore, StoreResult};
use std::sync::Arc;
use tracing::debug;

/// One page of catalog results.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerPage {
    /// The records in the requested window, in the store's insertion order.
    pub players: Vec<Player>,
    /// The normalized page number that was served.
    pub page: u64,
    /// The normalized page size; unbounded serializes as `null`.
    pub page_size: PageSize,
    /// Number of records matching the filter across all pages.
    pub total_count: u64,
}

/// The query engine.
///
/// Holds a shared store handle and translates filter + pagination requests
/// into one combined count-and-page read. The engine never mutates records.
pub struct QueryEngine<S> {
    store: Arc<S>,
}

impl<S: PlayerStore> QueryEngine<S> {
    /// Creates a query engine over a shared store handle.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Returns one page of records plus the total matching count.
    ///
    /// A missing filter matches every trusted record; missing pagination
    /// serves the first page of [`DEFAULT_PAGE_SIZE`] records. With an
    /// unbounded page size no limit is applied and the window starts at
    /// offset 0, since there is no page stride without a bound.
    ///
    /// Storage errors propagate unmodified.
    pub fn query(
        &self,
        filter: Option<&Filter>,
        pagination: Option<&Pagination>,
    ) -> StoreResult<PlayerPage> {
        let predicate = filter.cloned().unwrap_or_default().predicate();
        let pagination = pagination.copied().unwrap_or_default();

        let page = pagination.page();
        let page_size = pagination.page_size(DEFAULT_PAGE_SIZE);
        let (skip, limit) = match page_size {
            PageSize::Records(n) => ((page - 1).saturating_mul(n as u64), Some(n as u64)),
            PageSize::Unbounded => (0, None),
        };

        debug!(page, ?page_size, skip, "querying player catalog");
        let counted = self.store.count_and_page(&predicate, skip, limit)?;

        Ok(PlayerPage {
            players: counted.players,
            page,
            page_size,
            total_count: counted.total_count,
        })
    }
}
