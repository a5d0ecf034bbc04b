//! Data structures for the fantasy league: players, statistics, rosters, limits and errors.

mod error;
pub mod limits;
mod player;
mod roster;
mod stats;

pub use error::{CompositionViolation, LeagueError};
pub use limits::{Limits, ROSTER_SIZE, TOTAL_BUDGET, VALUE_STEP};
pub use player::{NewPlayer, PlayerId, PlayerRecord, Role};
pub use roster::{Composition, LeaderboardEntry, Roster, RosterMember, RosterState, RosterView, UserId};
pub use stats::{balls_from_overs, overs_from_balls, BowlingFigures, DerivedStats, PlayerStats, Rate, StatsPatch};
