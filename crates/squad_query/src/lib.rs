//! # Squad Query
//!
//! Query engine for the player catalog.
//!
//! Compiles a [`squad_core::Filter`] and [`squad_core::Pagination`] into a
//! single combined count-and-page storage operation, so the returned page
//! and total count can never disagree about the matching set.
//!
//! ## Key Invariants
//!
//! - `total_count` is independent of the requested window
//! - An out-of-range page yields an empty record list with the count intact
//! - Storage errors propagate unmodified; reads are never retried here

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod engine;

pub use engine::{PlayerPage, QueryEngine};
