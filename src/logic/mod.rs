//! League business logic: scoring, composition rules, roster aggregation, budget, summary, seeding.

mod budget;
mod composition;
mod roster;
mod scoring;
mod seed;
mod summary;

pub use budget::{check_budget, BudgetPolicy};
pub use composition::{can_add_role, check_composition, composition_of, validate_composition};
pub use roster::{
    add_member, rank_rosters, remaining_budget, remove_member, roster_view, validate_roster,
    PlayerTable,
};
pub use scoring::{
    batting_average, batting_points, batting_strike_rate, bowling_average, bowling_points,
    bowling_strike_rate, compute_derived_stats, economy_rate, player_value,
};
pub use seed::load_players_csv;
pub use summary::{tournament_summary, TopScorer, TopWicketTaker, TournamentSummary};
