//! # Squad Sync
//!
//! Synchronization engine for the player catalog.
//!
//! This crate provides:
//! - The [`PlayerProvider`] capability trait and a mock for tests
//! - An HTTP-backed provider over an abstract [`HttpClient`]
//! - The [`SyncEngine`]: provider fetch → activity resolution →
//!   conflict-aware bulk merge → outcome report
//!
//! ## Architecture
//!
//! A sync run pulls the full squad for one club from the provider, resolves
//! each player's activity status, stamps club and trust status, and submits
//! the whole set as one bulk-upsert batch to the store.
//!
//! ## Key Invariants
//!
//! - A record flagged for manual correction survives a default-mode merge
//! - The sync path only ever writes trusted (`UPDATED`) records
//! - A provider that cannot answer the activity question fails the whole
//!   run before anything is written; activity is never guessed
//! - Storage errors propagate unmodified; there is no partial-batch retry

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod engine;
mod error;
mod http;
mod provider;

pub use engine::{MergeMode, SyncEngine, SyncReport, SyncStats};
pub use error::{SyncError, SyncResult};
pub use http::{HttpClient, HttpProvider};
pub use provider::{MockProvider, PlayerProvider};
