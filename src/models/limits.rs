//! Fixed league constants shared by the validator, the aggregator and the API preview.

use crate::models::player::Role;
use serde::Serialize;

/// Money every user starts with.
pub const TOTAL_BUDGET: u64 = 9_000_000;

/// Players in a complete roster.
pub const ROSTER_SIZE: usize = 11;

/// Player values are rounded to a multiple of this.
pub const VALUE_STEP: u64 = 50_000;

pub const MAX_BATSMEN: usize = 5;
pub const MAX_BOWLERS: usize = 4;
pub const MAX_ALL_ROUNDERS: usize = 2;
pub const MAX_WICKET_KEEPERS: usize = 1;

impl Role {
    /// Maximum number of players of this role in one roster.
    pub fn quota(self) -> usize {
        match self {
            Role::Batsman => MAX_BATSMEN,
            Role::Bowler => MAX_BOWLERS,
            Role::AllRounder => MAX_ALL_ROUNDERS,
            Role::WicketKeeper => MAX_WICKET_KEEPERS,
        }
    }
}

/// Read-only snapshot of the constants (for `GET /api/limits`).
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Limits {
    pub total_budget: u64,
    pub roster_size: usize,
    pub value_step: u64,
    pub max_batsmen: usize,
    pub max_bowlers: usize,
    pub max_all_rounders: usize,
    pub max_wicket_keepers: usize,
}

impl Limits {
    pub fn current() -> Self {
        Self {
            total_budget: TOTAL_BUDGET,
            roster_size: ROSTER_SIZE,
            value_step: VALUE_STEP,
            max_batsmen: MAX_BATSMEN,
            max_bowlers: MAX_BOWLERS,
            max_all_rounders: MAX_ALL_ROUNDERS,
            max_wicket_keepers: MAX_WICKET_KEEPERS,
        }
    }
}
