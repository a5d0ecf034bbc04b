//! Fantasy cricket web app: library with models, scoring/roster logic and the league store.

pub mod api;
pub mod config;
pub mod league;
pub mod logic;
pub mod models;

pub use config::AppConfig;
pub use league::League;
pub use logic::{
    add_member, check_budget, compute_derived_stats, load_players_csv, rank_rosters, remove_member,
    roster_view, tournament_summary, validate_composition, BudgetPolicy, PlayerTable, TournamentSummary,
};
pub use models::{
    Composition, CompositionViolation, DerivedStats, LeaderboardEntry, LeagueError, Limits, NewPlayer,
    PlayerId, PlayerRecord, PlayerStats, Rate, Role, Roster, RosterState, RosterView, StatsPatch, UserId,
};
