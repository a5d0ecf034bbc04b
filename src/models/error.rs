//! Error types for scoring, roster composition and the league store.

use crate::models::player::{PlayerId, Role};
use thiserror::Error;

/// The first roster rule a candidate member set breaks.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum CompositionViolation {
    /// More members than a roster can hold.
    #[error("a team cannot have more than {limit} players (would have {count})")]
    TooManyMembers { count: usize, limit: usize },
    /// More players of one role than its quota allows.
    #[error("cannot add a {} {role} (limit {limit})", ordinal(.count))]
    RoleQuota { role: Role, count: usize, limit: usize },
}

/// Errors that can occur during league operations.
#[derive(Debug, Error)]
pub enum LeagueError {
    /// Ingestion rejected a raw value (negative counter, unknown role, bad overs, ...).
    #[error("invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },
    #[error("team composition rule broken: {0}")]
    Composition(#[from] CompositionViolation),
    #[error("team is already full ({limit} players maximum)")]
    CapacityExceeded { limit: usize },
    #[error("player {0} is already in the team")]
    DuplicateMember(PlayerId),
    #[error("player {0} is not in the team")]
    MemberNotFound(PlayerId),
    #[error("player {0} not found")]
    PlayerNotFound(PlayerId),
    #[error("not enough budget: player costs {value}, {remaining} remaining")]
    BudgetExceeded { value: u64, remaining: i64 },
    #[error("failed to read player seed: {0}")]
    Seed(#[from] csv::Error),
    #[error("league state lock poisoned")]
    LockPoisoned,
}

impl LeagueError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        LeagueError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// True for the variants that mean "the thing you asked for does not exist".
    pub fn is_not_found(&self) -> bool {
        matches!(self, LeagueError::PlayerNotFound(_) | LeagueError::MemberNotFound(_))
    }
}

fn ordinal(n: &usize) -> String {
    let n = *n;
    let suffix = match (n % 10, n % 100) {
        (1, r) if r != 11 => "st",
        (2, r) if r != 12 => "nd",
        (3, r) if r != 13 => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}
