//! In-memory league state shared by the web handlers: the player table and one roster per user.
//!
//! Lock order: a roster's mutex may be held while reading the player table; the player table
//! lock is never held while waiting on a roster mutex. Each add/remove runs entirely under its
//! roster's mutex, so concurrent requests for one user cannot both pass against the same count.

use crate::logic::{
    self, check_budget, rank_rosters, roster_view, tournament_summary, validate_roster, BudgetPolicy,
    PlayerTable, TournamentSummary,
};
use crate::models::{
    LeaderboardEntry, LeagueError, NewPlayer, PlayerId, PlayerRecord, Roster, RosterView, StatsPatch, UserId,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock, RwLockReadGuard, RwLockWriteGuard};

type SharedRoster = Arc<Mutex<Roster>>;

pub struct League {
    players: RwLock<PlayerTable>,
    rosters: RwLock<HashMap<UserId, SharedRoster>>,
    budget_policy: BudgetPolicy,
}

impl Default for League {
    fn default() -> Self {
        Self::new(BudgetPolicy::default())
    }
}

impl League {
    pub fn new(budget_policy: BudgetPolicy) -> Self {
        Self {
            players: RwLock::new(HashMap::new()),
            rosters: RwLock::new(HashMap::new()),
            budget_policy,
        }
    }

    /// League pre-filled with players (e.g. from the CSV seed).
    pub fn with_players(players: Vec<PlayerRecord>, budget_policy: BudgetPolicy) -> Self {
        Self {
            players: RwLock::new(players.into_iter().map(|p| (p.id, p)).collect()),
            ..Self::new(budget_policy)
        }
    }

    pub fn budget_policy(&self) -> BudgetPolicy {
        self.budget_policy
    }

    fn players_read(&self) -> Result<RwLockReadGuard<'_, PlayerTable>, LeagueError> {
        self.players.read().map_err(|_| LeagueError::LockPoisoned)
    }

    fn players_write(&self) -> Result<RwLockWriteGuard<'_, PlayerTable>, LeagueError> {
        self.players.write().map_err(|_| LeagueError::LockPoisoned)
    }

    /// Validate and store a manually entered player.
    pub fn add_player(&self, input: &NewPlayer) -> Result<PlayerRecord, LeagueError> {
        let player = PlayerRecord::from_input(input)?;
        self.players_write()?.insert(player.id, player.clone());
        log::info!(
            "Added player {} ({}, {}): points {:.2}, value {}",
            player.name,
            player.role,
            player.university,
            player.points(),
            player.value()
        );
        Ok(player)
    }

    pub fn player(&self, id: PlayerId) -> Result<PlayerRecord, LeagueError> {
        self.players_read()?
            .get(&id)
            .cloned()
            .ok_or(LeagueError::PlayerNotFound(id))
    }

    /// All players, sorted by name.
    pub fn players(&self) -> Result<Vec<PlayerRecord>, LeagueError> {
        let mut players: Vec<PlayerRecord> = self.players_read()?.values().cloned().collect();
        players.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        Ok(players)
    }

    /// Apply a statistics patch; the player is rescored before the lock is released.
    /// Rosters pick up the new points and value on their next view.
    pub fn update_player_stats(&self, id: PlayerId, patch: &StatsPatch) -> Result<PlayerRecord, LeagueError> {
        let mut players = self.players_write()?;
        let player = players.get_mut(&id).ok_or(LeagueError::PlayerNotFound(id))?;
        player.update_stats(patch)?;
        log::info!(
            "Updated stats for {}: points {:.2}, value {}",
            player.name,
            player.points(),
            player.value()
        );
        Ok(player.clone())
    }

    /// Remove a player and drop its id from every roster.
    pub fn delete_player(&self, id: PlayerId) -> Result<PlayerRecord, LeagueError> {
        let removed = self
            .players_write()?
            .remove(&id)
            .ok_or(LeagueError::PlayerNotFound(id))?;

        for entry in self.all_rosters()? {
            let mut roster = entry.lock().map_err(|_| LeagueError::LockPoisoned)?;
            if roster.contains(id) {
                roster.members.retain(|&m| m != id);
                roster.updated_at = chrono::Utc::now();
                log::info!("Removed deleted player {} from roster of user {}", removed.name, roster.user_id);
            }
        }
        Ok(removed)
    }

    /// Roster for `user_id`, created empty on first access.
    fn roster_entry(&self, user_id: UserId) -> Result<SharedRoster, LeagueError> {
        if let Some(entry) = self
            .rosters
            .read()
            .map_err(|_| LeagueError::LockPoisoned)?
            .get(&user_id)
        {
            return Ok(Arc::clone(entry));
        }
        let mut rosters = self.rosters.write().map_err(|_| LeagueError::LockPoisoned)?;
        let entry = rosters.entry(user_id).or_insert_with(|| {
            log::debug!("Created empty roster for user {}", user_id);
            Arc::new(Mutex::new(Roster::new(user_id)))
        });
        Ok(Arc::clone(entry))
    }

    fn all_rosters(&self) -> Result<Vec<SharedRoster>, LeagueError> {
        Ok(self
            .rosters
            .read()
            .map_err(|_| LeagueError::LockPoisoned)?
            .values()
            .cloned()
            .collect())
    }

    /// Add a player to the user's roster: composition rules first, then the budget policy,
    /// then a full re-check of the resulting roster before it replaces the stored one.
    pub fn add_member(&self, user_id: UserId, player_id: PlayerId) -> Result<RosterView, LeagueError> {
        let entry = self.roster_entry(user_id)?;
        let mut roster = entry.lock().map_err(|_| LeagueError::LockPoisoned)?;
        let players = self.players_read()?;

        let before = roster_view(&roster, &players);
        let mut candidate = roster.clone();
        let view = logic::add_member(&mut candidate, &players, player_id)?;
        if let Some(player) = players.get(&player_id) {
            check_budget(self.budget_policy, &before, player)?;
        }
        validate_roster(&candidate, &players)?;

        *roster = candidate;
        log::info!(
            "User {} added player {}: {} players, {:.2} points, {} remaining",
            user_id,
            player_id,
            view.composition.total,
            view.total_points,
            view.remaining_budget
        );
        Ok(view)
    }

    pub fn remove_member(&self, user_id: UserId, player_id: PlayerId) -> Result<RosterView, LeagueError> {
        let entry = self.roster_entry(user_id)?;
        let mut roster = entry.lock().map_err(|_| LeagueError::LockPoisoned)?;
        let players = self.players_read()?;

        let mut candidate = roster.clone();
        let view = logic::remove_member(&mut candidate, &players, player_id)?;
        validate_roster(&candidate, &players)?;

        *roster = candidate;
        log::info!(
            "User {} removed player {}: {} players left",
            user_id,
            player_id,
            view.composition.total
        );
        Ok(view)
    }

    /// Current view of the user's roster (created empty on first access).
    pub fn roster_view(&self, user_id: UserId) -> Result<RosterView, LeagueError> {
        let roster = self
            .roster_entry(user_id)?
            .lock()
            .map_err(|_| LeagueError::LockPoisoned)?
            .clone();
        let players = self.players_read()?;
        Ok(roster_view(&roster, &players))
    }

    /// Complete rosters ranked by total points.
    pub fn leaderboard(&self) -> Result<Vec<LeaderboardEntry>, LeagueError> {
        let mut rosters = Vec::new();
        for entry in self.all_rosters()? {
            rosters.push(entry.lock().map_err(|_| LeagueError::LockPoisoned)?.clone());
        }
        let players = self.players_read()?;
        Ok(rank_rosters(rosters.iter().map(|r| roster_view(r, &players))))
    }

    pub fn summary(&self) -> Result<TournamentSummary, LeagueError> {
        Ok(tournament_summary(self.players_read()?.values()))
    }
}
