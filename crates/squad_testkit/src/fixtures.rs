//! Test fixtures.
//!
//! Deterministic player records for seeding stores and mock providers.
//! Calling the same constructor with the same arguments always yields the
//! same record, so tests can build matching seed and provider sets.

use squad_core::{Player, UpdateStatus};

fn base_player(id: &str) -> Player {
    // Spread birth dates across years so range filters have variety.
    let seed = id.bytes().fold(0u32, |acc, b| acc.wrapping_add(b as u32));
    let year = 1985 + (seed % 15);
    let month = 1 + (seed % 12);
    let day = 1 + (seed % 28);

    Player {
        id: id.to_string(),
        name: format!("Player {id}"),
        position: "Midfielder".to_string(),
        date_of_birth: format!("{year:04}-{month:02}-{day:02}"),
        age: 2024u32.saturating_sub(year),
        nationality: vec!["Italy".to_string()],
        height: 180,
        foot: "right".to_string(),
        joined_on: "2021-07-01".to_string(),
        signed_from: "Elsewhere FC".to_string(),
        contract: "2026-06-30".to_string(),
        market_value: 1_000_000 + u64::from(seed) * 10_000,
        status: None,
        club_id: String::new(),
        is_active: true,
        update_status: UpdateStatus::Updated,
    }
}

/// A player payload as the provider's club listing returns it: no club id,
/// no resolved activity, default trust status.
#[must_use]
pub fn provider_player(id: &str) -> Player {
    let mut player = base_player(id);
    player.is_active = false;
    player
}

/// A trusted catalog record for the given club.
#[must_use]
pub fn trusted_player(id: &str, club_id: &str) -> Player {
    base_player(id).with_club_id(club_id)
}

/// A deterministic squad of `count` trusted records for one club.
///
/// Ids are `"100000"`, `"100001"`, ... so repeated calls produce matching
/// sets.
#[must_use]
pub fn sample_squad(club_id: &str, count: usize) -> Vec<Player> {
    (0..count)
        .map(|i| trusted_player(&format!("{}", 100_000 + i), club_id))
        .collect()
}
