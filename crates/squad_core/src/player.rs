//! The player record and its trust-status lifecycle.

use serde::{Deserialize, Serialize};

/// Trust status of a stored player record.
///
/// The synchronization path only ever produces [`UpdateStatus::Updated`].
/// A record flagged [`UpdateStatus::ToUpdate`] is pending manual correction
/// and must not be overwritten by an automated merge unless the merge runs
/// in overwrite mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UpdateStatus {
    /// The record reflects the last successful automated write.
    #[default]
    Updated,
    /// The record has been flagged for manual correction.
    ToUpdate,
}

/// A player record, keyed by the external provider's stable id.
///
/// Provider listing payloads omit `clubId`, `isActive` and `updateStatus`;
/// deserialization defaults them and the synchronization engine stamps the
/// real values before the record reaches the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    /// Provider id, stable across syncs.
    pub id: String,
    /// Full name.
    pub name: String,
    /// Playing position, e.g. `"Goalkeeper"`.
    pub position: String,
    /// Date of birth as an ISO date string (`YYYY-MM-DD`).
    pub date_of_birth: String,
    /// Age in years at the time of the last sync.
    pub age: u32,
    /// Country names, in the provider's order.
    pub nationality: Vec<String>,
    /// Height in centimeters.
    pub height: u32,
    /// Preferred foot.
    pub foot: String,
    /// Date the player joined the club, ISO date string.
    pub joined_on: String,
    /// Club the player was signed from.
    pub signed_from: String,
    /// Contract end date, ISO date string.
    pub contract: String,
    /// Market value in the provider's base currency unit.
    pub market_value: u64,
    /// Free-text role label, e.g. `"Team captain"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Id of the club the player belongs to.
    #[serde(default)]
    pub club_id: String,
    /// Whether the player is still active.
    #[serde(default)]
    pub is_active: bool,
    /// Trust status of this record.
    #[serde(default)]
    pub update_status: UpdateStatus,
}

impl Player {
    /// Returns the record with `club_id` stamped.
    ///
    /// The provider's club-scoped listing does not itself include the club
    /// id, so the caller stamps the id it asked for.
    #[must_use]
    pub fn with_club_id(mut self, club_id: impl Into<String>) -> Self {
        self.club_id = club_id.into();
        self
    }

    /// Returns the record with the resolved active flag.
    #[must_use]
    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Returns the record with the given trust status.
    #[must_use]
    pub fn with_update_status(mut self, update_status: UpdateStatus) -> Self {
        self.update_status = update_status;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Player {
        Player {
            id: "182906".into(),
            name: "Mike Maignan".into(),
            position: "Goalkeeper".into(),
            date_of_birth: "1995-07-03".into(),
            age: 29,
            nationality: vec!["France".into(), "French Guiana".into()],
            height: 191,
            foot: "right".into(),
            joined_on: "2021-07-01".into(),
            signed_from: "LOSC Lille".into(),
            contract: "2026-06-30".into(),
            market_value: 35_000_000,
            status: Some("Team captain".into()),
            club_id: "5".into(),
            is_active: true,
            update_status: UpdateStatus::Updated,
        }
    }

    #[test]
    fn update_status_wire_format() {
        assert_eq!(
            serde_json::to_string(&UpdateStatus::Updated).unwrap(),
            "\"UPDATED\""
        );
        assert_eq!(
            serde_json::to_string(&UpdateStatus::ToUpdate).unwrap(),
            "\"TO_UPDATE\""
        );
    }

    #[test]
    fn update_status_defaults_to_updated() {
        assert_eq!(UpdateStatus::default(), UpdateStatus::Updated);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["dateOfBirth"], "1995-07-03");
        assert_eq!(json["marketValue"], 35_000_000u64);
        assert_eq!(json["updateStatus"], "UPDATED");
        assert_eq!(json["clubId"], "5");
    }

    #[test]
    fn provider_payload_defaults_unlisted_fields() {
        // A club listing entry carries neither clubId nor isActive nor
        // updateStatus; all three must default.
        let json = r#"{
            "id": "199976",
            "name": "Marco Sportiello",
            "position": "Goalkeeper",
            "dateOfBirth": "1992-05-10",
            "age": 32,
            "nationality": ["Italy"],
            "height": 192,
            "foot": "right",
            "joinedOn": "2023-07-01",
            "signedFrom": "Atalanta BC",
            "contract": "2027-06-30",
            "marketValue": 1500000
        }"#;

        let player: Player = serde_json::from_str(json).unwrap();
        assert_eq!(player.club_id, "");
        assert!(!player.is_active);
        assert_eq!(player.update_status, UpdateStatus::Updated);
        assert_eq!(player.status, None);
    }

    #[test]
    fn stamping_helpers() {
        let player = sample()
            .with_club_id("7")
            .with_active(false)
            .with_update_status(UpdateStatus::ToUpdate);

        assert_eq!(player.club_id, "7");
        assert!(!player.is_active);
        assert_eq!(player.update_status, UpdateStatus::ToUpdate);
    }
}
