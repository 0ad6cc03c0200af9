//! # Squad Core
//!
//! Domain model for the player catalog.
//!
//! This crate provides:
//! - The [`Player`] record and its trust-status lifecycle
//! - The [`Filter`] value object and its compiled [`Predicate`]
//! - [`Pagination`] with the catalog's normalization rules
//!
//! ## Key Invariants
//!
//! - A record with [`UpdateStatus::ToUpdate`] is pending manual correction
//!   and must resist automated overwrite
//! - Normal reads only ever see trusted records: an empty filter still
//!   compiles to the implicit trust clause
//! - Predicates are an explicit ordered clause list combined with AND, so a
//!   filter compiles the same way regardless of which fields are set

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod filter;
mod pagination;
mod player;
mod predicate;

pub use error::{CoreError, CoreResult};
pub use filter::{BirthYearRange, Filter, DEFAULT_UPDATE_STATUS};
pub use pagination::{PageSize, Pagination, DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
pub use player::{Player, UpdateStatus};
pub use predicate::{Clause, Predicate};
