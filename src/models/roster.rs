//! Roster (one user's team), its derived view and leaderboard entries.

use crate::models::limits::ROSTER_SIZE;
use crate::models::player::{PlayerId, Role};
use crate::models::stats::Rate;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Owning user; one roster per user, so this is also the roster id.
pub type UserId = Uuid;

/// Where a roster is on its way to 11 players.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RosterState {
    #[default]
    Empty,
    /// 1 to 10 members.
    Building,
    /// Exactly 11 members. Still editable.
    Complete,
}

impl RosterState {
    pub fn for_size(size: usize) -> Self {
        match size {
            0 => RosterState::Empty,
            n if n >= ROSTER_SIZE => RosterState::Complete,
            _ => RosterState::Building,
        }
    }
}

/// Membership list only. Points and value are never stored here; they are read from the
/// current player records whenever a view is built.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Roster {
    pub user_id: UserId,
    pub(crate) members: Vec<PlayerId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Roster {
    pub fn new(user_id: UserId) -> Self {
        let now = Utc::now();
        Self {
            user_id,
            members: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Member ids in the order they were added.
    pub fn members(&self) -> &[PlayerId] {
        &self.members
    }

    pub fn contains(&self, player_id: PlayerId) -> bool {
        self.members.contains(&player_id)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn state(&self) -> RosterState {
        RosterState::for_size(self.members.len())
    }
}

/// A member joined with its player's current derived fields.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterMember {
    pub player_id: PlayerId,
    pub name: String,
    pub university: String,
    pub role: Role,
    pub points: f64,
    pub value: u64,
    pub batting_average: Rate,
    pub batting_strike_rate: f64,
    pub bowling_average: Rate,
    pub bowling_strike_rate: Rate,
    pub economy_rate: f64,
    pub matches_played: u32,
    pub runs_scored: u32,
    pub wickets_taken: u32,
}

/// Per-role member counts.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Composition {
    pub total: usize,
    pub batsmen: usize,
    pub bowlers: usize,
    pub all_rounders: usize,
    pub wicket_keepers: usize,
}

impl Composition {
    pub fn count(&self, role: Role) -> usize {
        match role {
            Role::Batsman => self.batsmen,
            Role::Bowler => self.bowlers,
            Role::AllRounder => self.all_rounders,
            Role::WicketKeeper => self.wicket_keepers,
        }
    }

    pub fn add(&mut self, role: Role) {
        self.total += 1;
        match role {
            Role::Batsman => self.batsmen += 1,
            Role::Bowler => self.bowlers += 1,
            Role::AllRounder => self.all_rounders += 1,
            Role::WicketKeeper => self.wicket_keepers += 1,
        }
    }

    /// Slots still open for `role` before its quota is reached.
    pub fn remaining(&self, role: Role) -> usize {
        role.quota().saturating_sub(self.count(role))
    }
}

/// Roster membership plus aggregates recomputed from current player records.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterView {
    pub user_id: UserId,
    pub players: Vec<RosterMember>,
    pub composition: Composition,
    pub total_points: f64,
    pub total_value: u64,
    /// Negative only when budget is advisory and the user overspent.
    pub remaining_budget: i64,
    pub is_complete: bool,
    pub state: RosterState,
    pub updated_at: DateTime<Utc>,
}

/// One row of the leaderboard.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub user_id: UserId,
    pub total_points: f64,
    pub total_value: u64,
}
