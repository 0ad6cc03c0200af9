//! # Squad Store
//!
//! Storage capability boundary for the player catalog.
//!
//! This crate provides:
//! - The [`PlayerStore`] trait consumed by the query and synchronization
//!   engines
//! - [`WriteGuard`], the per-batch merge guard protecting flagged records
//! - [`MemoryPlayerStore`], a thread-safe insertion-ordered store
//!
//! ## Key Invariants
//!
//! - `count_and_page` derives its count and its page from one consistent
//!   view of the matching set
//! - A bulk upsert under [`WriteGuard::ExcludeFlagged`] leaves records
//!   flagged for manual correction untouched
//! - `modified` counts only documents whose fields actually changed

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod memory;
mod store;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryPlayerStore;
pub use store::{CountedPage, PlayerStore, UpsertOutcome, WriteGuard};
