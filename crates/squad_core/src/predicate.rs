//! Compiled predicates.
//!
//! A predicate is an explicit ordered list of clauses combined with logical
//! AND. Clauses evaluate directly against a [`Player`], so any store can
//! execute them with host-language filtering.

use crate::player::{Player, UpdateStatus};

/// A single predicate clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Clause {
    /// Exact match on the playing position.
    Position(String),
    /// Exact match on the active flag.
    Active(bool),
    /// Exact match on the club id.
    Club(String),
    /// Inclusive ISO-date window on the date of birth. At least one bound
    /// is set; a window with no bounds is never compiled.
    BornWithin {
        /// Earliest admissible date of birth.
        lower: Option<String>,
        /// Latest admissible date of birth.
        upper: Option<String>,
    },
    /// Exact match on the trust status.
    Trust(UpdateStatus),
}

impl Clause {
    /// Evaluates the clause against a record.
    ///
    /// Date comparison is lexicographic, which is ordering-correct for ISO
    /// `YYYY-MM-DD` strings.
    pub fn matches(&self, player: &Player) -> bool {
        match self {
            Clause::Position(position) => player.position == *position,
            Clause::Active(is_active) => player.is_active == *is_active,
            Clause::Club(club_id) => player.club_id == *club_id,
            Clause::BornWithin { lower, upper } => {
                let after_lower = lower
                    .as_deref()
                    .is_none_or(|bound| player.date_of_birth.as_str() >= bound);
                let before_upper = upper
                    .as_deref()
                    .is_none_or(|bound| player.date_of_birth.as_str() <= bound);
                after_lower && before_upper
            }
            Clause::Trust(update_status) => player.update_status == *update_status,
        }
    }
}

/// An ordered conjunction of clauses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Predicate {
    clauses: Vec<Clause>,
}

impl Predicate {
    /// Creates a predicate from an ordered clause list.
    pub fn new(clauses: Vec<Clause>) -> Self {
        Self { clauses }
    }

    /// Returns the clauses in compilation order.
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// Evaluates the conjunction against a record.
    pub fn matches(&self, player: &Player) -> bool {
        self.clauses.iter().all(|clause| clause.matches(player))
    }
}
