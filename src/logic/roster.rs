//! Roster aggregation: add/remove members and recompute totals from current player records.

use crate::logic::composition::{composition_of, validate_composition};
use crate::models::{
    LeaderboardEntry, LeagueError, PlayerId, PlayerRecord, Roster, RosterMember, RosterState, RosterView,
    ROSTER_SIZE, TOTAL_BUDGET,
};
use chrono::Utc;
use std::collections::HashMap;

/// Player table the aggregator reads current points and value from.
pub type PlayerTable = HashMap<PlayerId, PlayerRecord>;

/// Add a player to the roster.
///
/// Checks, in order: already a member, roster full, player exists, composition of the
/// roster with the player included. The roster is only touched once every check passed.
pub fn add_member(
    roster: &mut Roster,
    players: &PlayerTable,
    player_id: PlayerId,
) -> Result<RosterView, LeagueError> {
    if roster.contains(player_id) {
        return Err(LeagueError::DuplicateMember(player_id));
    }
    if roster.len() >= ROSTER_SIZE {
        return Err(LeagueError::CapacityExceeded { limit: ROSTER_SIZE });
    }
    let player = players
        .get(&player_id)
        .ok_or(LeagueError::PlayerNotFound(player_id))?;

    let candidate = member_records(roster, players).chain(std::iter::once(player));
    validate_composition(candidate)?;

    roster.members.push(player_id);
    roster.updated_at = Utc::now();
    Ok(roster_view(roster, players))
}

/// Remove a player from the roster. Order of the remaining members is kept.
pub fn remove_member(
    roster: &mut Roster,
    players: &PlayerTable,
    player_id: PlayerId,
) -> Result<RosterView, LeagueError> {
    let idx = roster
        .members
        .iter()
        .position(|&id| id == player_id)
        .ok_or(LeagueError::MemberNotFound(player_id))?;
    roster.members.remove(idx);
    roster.updated_at = Utc::now();
    Ok(roster_view(roster, players))
}

/// Re-check a whole roster against the composition rules (used before a roster is stored).
pub fn validate_roster(roster: &Roster, players: &PlayerTable) -> Result<(), LeagueError> {
    validate_composition(member_records(roster, players))?;
    Ok(())
}

/// Members joined with their current records, plus totals.
/// Ids without a player record are skipped.
pub fn roster_view(roster: &Roster, players: &PlayerTable) -> RosterView {
    let records: Vec<&PlayerRecord> = member_records(roster, players).collect();
    let total_points = total_points(&records);
    let total_value: u64 = records.iter().map(|p| p.value()).sum();
    let composition = composition_of(records.iter().copied());

    RosterView {
        user_id: roster.user_id,
        players: records.iter().map(|p| roster_member(p)).collect(),
        composition,
        total_points,
        total_value,
        remaining_budget: remaining_budget(total_value),
        is_complete: composition.total == ROSTER_SIZE,
        state: RosterState::for_size(composition.total),
        updated_at: roster.updated_at,
    }
}

/// Budget left after spending `total_value`. Negative when overspent.
pub fn remaining_budget(total_value: u64) -> i64 {
    let budget = i64::try_from(TOTAL_BUDGET).unwrap_or(i64::MAX);
    let spent = i64::try_from(total_value).unwrap_or(i64::MAX);
    budget.saturating_sub(spent)
}

/// Leaderboard over complete rosters only, highest total points first.
/// Equal points are ordered by user id so the ranking is stable.
pub fn rank_rosters(views: impl IntoIterator<Item = RosterView>) -> Vec<LeaderboardEntry> {
    let mut complete: Vec<RosterView> = views.into_iter().filter(|v| v.is_complete).collect();
    complete.sort_by(|a, b| {
        b.total_points
            .total_cmp(&a.total_points)
            .then_with(|| a.user_id.cmp(&b.user_id))
    });
    complete
        .into_iter()
        .enumerate()
        .map(|(i, v)| LeaderboardEntry {
            rank: i + 1,
            user_id: v.user_id,
            total_points: v.total_points,
            total_value: v.total_value,
        })
        .collect()
}

/// Sum of member points taken in player-id order, so the same member set always gives
/// the same bits whatever order the members were added in.
fn total_points(records: &[&PlayerRecord]) -> f64 {
    let mut by_id: Vec<(PlayerId, f64)> = records.iter().map(|p| (p.id, p.points())).collect();
    by_id.sort_unstable_by_key(|&(id, _)| id);
    by_id.into_iter().map(|(_, points)| points).sum()
}

fn member_records<'a>(
    roster: &'a Roster,
    players: &'a PlayerTable,
) -> impl Iterator<Item = &'a PlayerRecord> + 'a {
    roster.members.iter().filter_map(|id| players.get(id))
}

fn roster_member(player: &PlayerRecord) -> RosterMember {
    let derived = player.derived();
    let stats = player.stats();
    RosterMember {
        player_id: player.id,
        name: player.name.clone(),
        university: player.university.clone(),
        role: player.role,
        points: derived.points,
        value: derived.value,
        batting_average: derived.batting_average,
        batting_strike_rate: derived.batting_strike_rate,
        bowling_average: derived.bowling_average,
        bowling_strike_rate: derived.bowling_strike_rate,
        economy_rate: derived.economy_rate,
        matches_played: stats.matches_played,
        runs_scored: stats.runs_scored,
        wickets_taken: stats.wickets_taken,
    }
}
