//! PlayerRecord, Role and the ingestion input for new players.

use crate::logic::compute_derived_stats;
use crate::models::error::LeagueError;
use crate::models::stats::{DerivedStats, PlayerStats, StatsPatch};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for a player (used in rosters and lookups).
pub type PlayerId = Uuid;

/// Playing role. Serialized in its canonical spelling.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Role {
    Batsman,
    Bowler,
    AllRounder,
    WicketKeeper,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Batsman, Role::Bowler, Role::AllRounder, Role::WicketKeeper];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Batsman => "Batsman",
            Role::Bowler => "Bowler",
            Role::AllRounder => "AllRounder",
            Role::WicketKeeper => "WicketKeeper",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalizes free-text role spellings ("All-Rounder", "wicket keeper", "Batsmen", ...).
impl FromStr for Role {
    type Err = LeagueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "batsman" | "batsmen" | "batter" | "batting" => Ok(Role::Batsman),
            "bowler" | "bowlers" | "bowling" => Ok(Role::Bowler),
            "allrounder" | "allrounders" => Ok(Role::AllRounder),
            "wicketkeeper" | "wicketkeepers" | "keeper" | "wk" => Ok(Role::WicketKeeper),
            _ => Err(LeagueError::invalid("role", format!("unrecognized role {:?}", s.trim()))),
        }
    }
}

/// Manual entry of a new player. Role is free text and gets normalized; counters default to zero.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPlayer {
    pub name: String,
    pub university: String,
    pub role: String,
    #[serde(flatten)]
    pub stats: StatsPatch,
}

/// One cricketer: identity, raw counters and the fields derived from them.
///
/// Counters and derived fields are private: the only way to change the counters is
/// [`PlayerRecord::update_stats`], which rescores the record before returning.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecord {
    pub id: PlayerId,
    pub name: String,
    pub university: String,
    pub role: Role,
    #[serde(flatten)]
    stats: PlayerStats,
    #[serde(flatten)]
    derived: DerivedStats,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PlayerRecord {
    /// Create a scored player from already validated counters.
    pub fn new(name: impl Into<String>, university: impl Into<String>, role: Role, stats: PlayerStats) -> Self {
        let now = Utc::now();
        let derived = compute_derived_stats(&stats);
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            university: university.into(),
            role,
            stats,
            derived,
            created_at: now,
            updated_at: now,
        }
    }

    /// Validate manual input and create the player. Names must be non-empty.
    pub fn from_input(input: &NewPlayer) -> Result<Self, LeagueError> {
        let name = input.name.trim();
        if name.is_empty() {
            return Err(LeagueError::invalid("name", "player name is required"));
        }
        let university = input.university.trim();
        if university.is_empty() {
            return Err(LeagueError::invalid("university", "university name is required"));
        }
        let role: Role = input.role.parse()?;
        let stats = input.stats.apply(&PlayerStats::default())?;
        Ok(Self::new(name, university, role, stats))
    }

    pub fn stats(&self) -> &PlayerStats {
        &self.stats
    }

    pub fn derived(&self) -> &DerivedStats {
        &self.derived
    }

    pub fn points(&self) -> f64 {
        self.derived.points
    }

    pub fn value(&self) -> u64 {
        self.derived.value
    }

    /// Apply a statistics patch. On error nothing changes; on success counters and every
    /// derived field are replaced together.
    pub fn update_stats(&mut self, patch: &StatsPatch) -> Result<(), LeagueError> {
        let stats = patch.apply(&self.stats)?;
        let derived = compute_derived_stats(&stats);
        self.stats = stats;
        self.derived = derived;
        self.updated_at = Utc::now();
        Ok(())
    }
}
