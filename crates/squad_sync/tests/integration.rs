//! End-to-end flow: sync a club from a provider, then read it back through
//! the query engine over the same shared store handle.

use squad_core::{Filter, PageSize, Pagination, UpdateStatus};
use squad_query::QueryEngine;
use squad_store::MemoryPlayerStore;
use squad_sync::{MergeMode, MockProvider, SyncEngine};
use squad_testkit::{provider_player, trusted_player};
use std::sync::Arc;

fn provider_with_squad(club_id: &str, ids: &[&str]) -> Arc<MockProvider> {
    let provider = Arc::new(MockProvider::new());
    let squad: Vec<_> = ids.iter().map(|id| provider_player(id)).collect();
    for player in &squad {
        provider.set_active_status(&player.id, true);
    }
    provider.set_squad(club_id, squad);
    provider
}

#[test]
fn sync_then_read_back() {
    let provider = provider_with_squad("5", &["1", "2", "3", "4", "5"]);
    let store = Arc::new(MemoryPlayerStore::new());
    let engine = SyncEngine::new(provider, Arc::clone(&store));

    let report = engine.sync("5", MergeMode::Preserve).unwrap();
    assert!(report.success);
    assert_eq!(report.inserted_players, Some(5));
    assert_eq!(report.modified_players, None);

    // Everything the sync wrote is trusted and visible to a default read
    // through the query engine sharing the same store handle.
    let queries = QueryEngine::new(Arc::clone(&store));
    let result = queries.query(None, None).unwrap();
    assert_eq!(result.total_count, 5);
    assert!(result
        .players
        .iter()
        .all(|p| p.club_id == "5" && p.update_status == UpdateStatus::Updated));
}

#[test]
fn resync_is_idempotent() {
    let provider = provider_with_squad("5", &["1", "2", "3"]);
    let store = Arc::new(MemoryPlayerStore::new());
    let engine = SyncEngine::new(provider, Arc::clone(&store));

    engine.sync("5", MergeMode::Preserve).unwrap();
    let second = engine.sync("5", MergeMode::Preserve).unwrap();

    // Identical data changes nothing, so both counters are absent.
    assert!(second.success);
    assert_eq!(second.inserted_players, None);
    assert_eq!(second.modified_players, None);
    assert_eq!(store.len(), 3);
}

#[test]
fn flagged_record_survives_until_overwritten() {
    let provider = provider_with_squad("5", &["1", "2"]);
    let flagged = trusted_player("2", "5")
        .with_update_status(UpdateStatus::ToUpdate)
        .with_active(false);
    let store = Arc::new(MemoryPlayerStore::with_players(vec![flagged.clone()]));
    let engine = SyncEngine::new(provider, Arc::clone(&store));

    // Preserve mode: the flagged record resists the merge.
    engine.sync("5", MergeMode::Preserve).unwrap();
    let kept = store
        .players()
        .into_iter()
        .find(|p| p.id == "2")
        .unwrap();
    assert_eq!(kept, flagged);

    // Overwrite mode: the merge wins and the record becomes trusted.
    engine.sync("5", MergeMode::Overwrite).unwrap();
    let replaced = store
        .players()
        .into_iter()
        .find(|p| p.id == "2")
        .unwrap();
    assert_eq!(replaced.update_status, UpdateStatus::Updated);
    assert!(replaced.is_active);
}

#[test]
fn paged_reads_agree_with_sync_writes() {
    let ids: Vec<String> = (0..23).map(|i| format!("{i}")).collect();
    let id_refs: Vec<&str> = ids.iter().map(String::as_str).collect();
    let provider = provider_with_squad("7", &id_refs);
    let store = Arc::new(MemoryPlayerStore::new());
    let engine = SyncEngine::new(provider, Arc::clone(&store));

    engine.sync("7", MergeMode::Preserve).unwrap();

    let queries = QueryEngine::new(Arc::clone(&store));
    let filter = Filter::new().with_club_id("7");
    let pagination = Pagination::new(3, PageSize::Records(10));
    let result = queries.query(Some(&filter), Some(&pagination)).unwrap();

    assert_eq!(result.total_count, 23);
    assert_eq!(result.page, 3);
    assert_eq!(result.players.len(), 3);
}
