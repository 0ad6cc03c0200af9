//! HTTP-backed provider implementation.
//!
//! The actual HTTP client is abstracted via a trait to allow different
//! implementations (reqwest, ureq, a loopback client for tests, etc.).
//! Provider payloads are JSON.

use crate::error::{SyncError, SyncResult};
use crate::provider::PlayerProvider;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use squad_core::Player;
use std::sync::RwLock;

/// HTTP client abstraction.
///
/// Implement this trait to provide the actual HTTP transport. Only GET is
/// needed; the provider API is read-only.
pub trait HttpClient: Send + Sync {
    /// Sends a GET request and returns the response body.
    fn get(&self, url: &str) -> Result<Vec<u8>, String>;

    /// Checks if the client is connected/healthy.
    fn is_healthy(&self) -> bool;
}

#[derive(Debug, Deserialize)]
struct ClubPlayersBody {
    #[serde(default)]
    players: Vec<Player>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlayerProfileBody {
    is_retired: Option<bool>,
}

/// A provider backed by the external HTTP API.
///
/// Endpoints:
/// - `GET {base_url}/clubs/{club_id}/players`: the club's squad; a body
///   without a `players` array is an empty squad
/// - `GET {base_url}/players/{player_id}/profile`: carries `isRetired`;
///   the active status is its negation, and an absent flag is a
///   data-unavailable error
pub struct HttpProvider<C: HttpClient> {
    /// Base URL of the provider (e.g. `"https://transfermarkt-api.fly.dev"`).
    base_url: String,
    /// HTTP client implementation.
    client: C,
    /// Last error message.
    last_error: RwLock<Option<String>>,
}

impl<C: HttpClient> HttpProvider<C> {
    /// Creates a new HTTP provider.
    pub fn new(base_url: impl Into<String>, client: C) -> Self {
        Self {
            base_url: base_url.into(),
            client,
            last_error: RwLock::new(None),
        }
    }

    /// Returns the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the last error message.
    pub fn last_error(&self) -> Option<String> {
        self.last_error.read().unwrap().clone()
    }

    fn set_error(&self, err: &str) {
        *self.last_error.write().unwrap() = Some(err.to_string());
    }

    fn clear_error(&self) {
        *self.last_error.write().unwrap() = None;
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> SyncResult<T> {
        if !self.client.is_healthy() {
            return Err(SyncError::provider("http client is not healthy"));
        }

        let url = format!("{}{}", self.base_url, path);
        let body = self.client.get(&url).map_err(|e| {
            self.set_error(&e);
            SyncError::provider(e)
        })?;

        self.clear_error();

        serde_json::from_slice(&body)
            .map_err(|e| SyncError::Protocol(format!("failed to decode response: {e}")))
    }
}

impl<C: HttpClient> PlayerProvider for HttpProvider<C> {
    fn players_by_club(&self, club_id: &str) -> SyncResult<Vec<Player>> {
        let body: ClubPlayersBody = self.get_json(&format!("/clubs/{club_id}/players"))?;
        Ok(body.players)
    }

    fn active_status(&self, player_id: &str) -> SyncResult<bool> {
        let body: PlayerProfileBody = self.get_json(&format!("/players/{player_id}/profile"))?;

        match body.is_retired {
            Some(is_retired) => Ok(!is_retired),
            None => Err(SyncError::ActivityUnavailable {
                player_id: player_id.to_string(),
            }),
        }
    }
}
