//! Filter value object and birth-year ranges.

use crate::error::CoreError;
use crate::player::UpdateStatus;
use crate::predicate::{Clause, Predicate};
use std::str::FromStr;

/// Trust status applied when a filter does not name one.
///
/// Normal reads only ever see trusted records; flagged records must be
/// requested explicitly.
pub const DEFAULT_UPDATE_STATUS: UpdateStatus = UpdateStatus::Updated;

/// An inclusive birth-year window. Either bound may be absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BirthYearRange {
    /// First year of the window, inclusive.
    pub start: Option<i32>,
    /// Last year of the window, inclusive.
    pub end: Option<i32>,
}

impl BirthYearRange {
    /// Creates a range from optional year bounds.
    pub fn new(start: impl Into<Option<i32>>, end: impl Into<Option<i32>>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Returns true when neither bound is set.
    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Lower ISO date bound: the first day of the start year.
    pub fn lower_bound(&self) -> Option<String> {
        self.start.map(|year| format!("{year:04}-01-01"))
    }

    /// Upper ISO date bound: the last day of the end year.
    pub fn upper_bound(&self) -> Option<String> {
        self.end.map(|year| format!("{year:04}-12-31"))
    }
}

impl FromStr for BirthYearRange {
    type Err = CoreError;

    /// Parses the caller-facing `YYYY-YYYY` form, e.g. `"1992-2000"`.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let invalid = || CoreError::InvalidBirthYearRange {
            input: input.to_string(),
        };

        let (start, end) = input.split_once('-').ok_or_else(invalid)?;
        if start.len() != 4 || end.len() != 4 {
            return Err(invalid());
        }

        let start: i32 = start.parse().map_err(|_| invalid())?;
        let end: i32 = end.parse().map_err(|_| invalid())?;

        Ok(Self::new(start, end))
    }
}

/// An immutable predicate description over the catalog.
///
/// Every field is optional; [`Filter::predicate`] compiles the set fields
/// into an ordered clause list. A filter with no fields set still matches
/// only trusted records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    position: Option<String>,
    is_active: Option<bool>,
    club_id: Option<String>,
    birth_year_range: Option<BirthYearRange>,
    update_status: Option<UpdateStatus>,
}

impl Filter {
    /// Creates an empty filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the filter to an exact position.
    #[must_use]
    pub fn with_position(mut self, position: impl Into<String>) -> Self {
        self.position = Some(position.into());
        self
    }

    /// Restricts the filter to active (or retired) players.
    #[must_use]
    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }

    /// Restricts the filter to one club.
    #[must_use]
    pub fn with_club_id(mut self, club_id: impl Into<String>) -> Self {
        self.club_id = Some(club_id.into());
        self
    }

    /// Restricts the filter to a birth-year window.
    #[must_use]
    pub fn with_birth_year_range(mut self, range: BirthYearRange) -> Self {
        self.birth_year_range = Some(range);
        self
    }

    /// Overrides the implicit trust-status clause.
    #[must_use]
    pub fn with_update_status(mut self, update_status: UpdateStatus) -> Self {
        self.update_status = Some(update_status);
        self
    }

    /// Compiles the filter into an ordered clause list combined with AND.
    ///
    /// A birth-year range with both bounds absent contributes no clause at
    /// all. The trust clause is always last and always present, using
    /// [`DEFAULT_UPDATE_STATUS`] when the caller did not override it.
    pub fn predicate(&self) -> Predicate {
        let mut clauses = Vec::new();

        if let Some(position) = &self.position {
            clauses.push(Clause::Position(position.clone()));
        }
        if let Some(is_active) = self.is_active {
            clauses.push(Clause::Active(is_active));
        }
        if let Some(club_id) = &self.club_id {
            clauses.push(Clause::Club(club_id.clone()));
        }
        if let Some(range) = &self.birth_year_range {
            if !range.is_empty() {
                clauses.push(Clause::BornWithin {
                    lower: range.lower_bound(),
                    upper: range.upper_bound(),
                });
            }
        }
        clauses.push(Clause::Trust(
            self.update_status.unwrap_or(DEFAULT_UPDATE_STATUS),
        ));

        Predicate::new(clauses)
    }
}
