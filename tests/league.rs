//! Integration tests for the shared league store: budget policy, cascades and concurrent edits.

use fantasy_cricket_web::{
    tournament_summary, BudgetPolicy, League, LeagueError, NewPlayer, PlayerId, PlayerRecord, PlayerStats, Role,
    StatsPatch,
};
use std::sync::Arc;
use std::thread;
use uuid::Uuid;

fn cheap(role: Role) -> PlayerRecord {
    PlayerRecord::new(format!("Cheap {role}"), "Test University", role, PlayerStats::default())
}

/// 120 points, valued at 1,200,000.
fn star(role: Role) -> PlayerRecord {
    let stats = PlayerStats {
        innings_played: 10,
        runs_scored: 1000,
        balls_faced: 500,
        ..PlayerStats::default()
    };
    PlayerRecord::new(format!("Star {role}"), "Test University", role, stats)
}

fn league_with(players: &[PlayerRecord], policy: BudgetPolicy) -> League {
    League::with_players(players.to_vec(), policy)
}

fn ids(players: &[PlayerRecord]) -> Vec<PlayerId> {
    players.iter().map(|p| p.id).collect()
}

fn stars() -> Vec<PlayerRecord> {
    let mut players: Vec<PlayerRecord> = (0..5).map(|_| star(Role::Batsman)).collect();
    players.extend((0..3).map(|_| star(Role::Bowler)));
    players
}

#[test]
fn star_value_is_as_expected() {
    assert_eq!(star(Role::Batsman).value(), 1_200_000);
}

#[test]
fn enforced_budget_rejects_overspend() {
    let players = stars();
    let league = league_with(&players, BudgetPolicy::Enforced);
    let user = Uuid::new_v4();
    for &id in &ids(&players)[..7] {
        league.add_member(user, id).unwrap();
    }
    let before = league.roster_view(user).unwrap();
    assert_eq!(before.remaining_budget, 600_000);

    let err = league.add_member(user, players[7].id).unwrap_err();
    assert!(matches!(
        err,
        LeagueError::BudgetExceeded { value: 1_200_000, remaining: 600_000 }
    ));
    assert_eq!(league.roster_view(user).unwrap().players.len(), 7);
}

#[test]
fn advisory_budget_allows_overspend() {
    let players = stars();
    let league = league_with(&players, BudgetPolicy::Advisory);
    let user = Uuid::new_v4();
    for id in ids(&players) {
        league.add_member(user, id).unwrap();
    }
    let view = league.roster_view(user).unwrap();
    assert_eq!(view.total_value, 9_600_000);
    assert_eq!(view.remaining_budget, -600_000);
}

#[test]
fn composition_is_checked_before_budget() {
    let mut players = stars();
    players.push(star(Role::Batsman));
    let league = league_with(&players, BudgetPolicy::Enforced);
    let user = Uuid::new_v4();
    for &id in &ids(&players)[..5] {
        league.add_member(user, id).unwrap();
    }
    let err = league.add_member(user, players[8].id).unwrap_err();
    assert!(matches!(err, LeagueError::Composition(_)), "{err}");
    assert!(err.to_string().contains("6th Batsman"));
}

#[test]
fn stat_updates_flow_into_roster_totals() {
    let player = cheap(Role::Bowler);
    let league = league_with(&[player.clone()], BudgetPolicy::Enforced);
    let user = Uuid::new_v4();
    let before = league.add_member(user, player.id).unwrap();

    let updated = league
        .update_player_stats(
            player.id,
            &StatsPatch {
                wickets_taken: Some(10),
                balls_bowled: Some(120),
                runs_conceded: Some(200),
                ..StatsPatch::default()
            },
        )
        .unwrap();
    let after = league.roster_view(user).unwrap();
    assert!(after.total_points > before.total_points);
    assert_eq!(after.total_points, updated.points());
    assert_eq!(after.total_value, updated.value());
}

#[test]
fn deleting_a_player_removes_it_from_rosters() {
    let players = vec![cheap(Role::Batsman), cheap(Role::Bowler)];
    let league = league_with(&players, BudgetPolicy::Enforced);
    let user = Uuid::new_v4();
    league.add_member(user, players[0].id).unwrap();
    league.add_member(user, players[1].id).unwrap();

    league.delete_player(players[0].id).unwrap();
    let view = league.roster_view(user).unwrap();
    assert_eq!(view.players.len(), 1);
    assert_eq!(view.players[0].player_id, players[1].id);
    assert!(matches!(league.player(players[0].id), Err(LeagueError::PlayerNotFound(_))));
    assert!(matches!(
        league.remove_member(user, players[0].id),
        Err(LeagueError::MemberNotFound(_))
    ));
}

#[test]
fn rosters_are_created_on_first_view() {
    let league = League::default();
    let user = Uuid::new_v4();
    assert!(matches!(
        league.remove_member(user, Uuid::new_v4()),
        Err(LeagueError::MemberNotFound(_))
    ));
    let view = league.roster_view(user).unwrap();
    assert!(view.players.is_empty());
    assert_eq!(view.remaining_budget, 9_000_000);
    assert!(matches!(
        league.remove_member(user, Uuid::new_v4()),
        Err(LeagueError::MemberNotFound(_))
    ));
}

#[test]
fn manual_entry_is_validated_and_stored() {
    let league = League::default();
    let created = league
        .add_player(&NewPlayer {
            name: "  R. Jayasuriya ".into(),
            university: "University of Peradeniya".into(),
            role: "All-Rounder".into(),
            stats: StatsPatch {
                innings_played: Some(10),
                runs_scored: Some(500),
                ..StatsPatch::default()
            },
        })
        .unwrap();
    assert_eq!(created.name, "R. Jayasuriya");
    assert_eq!(created.role, Role::AllRounder);
    assert_eq!(league.player(created.id).unwrap(), created);

    let bad = league.add_player(&NewPlayer {
        name: "X".into(),
        university: "Y".into(),
        role: "Umpire".into(),
        stats: StatsPatch::default(),
    });
    assert!(matches!(bad, Err(LeagueError::InvalidInput { field: "role", .. })));
    assert_eq!(league.players().unwrap().len(), 1);
}

#[test]
fn leaderboard_lists_complete_rosters() {
    let mut players: Vec<PlayerRecord> = (0..5).map(|_| cheap(Role::Batsman)).collect();
    players.extend((0..4).map(|_| cheap(Role::Bowler)));
    players.extend((0..2).map(|_| cheap(Role::AllRounder)));
    let league = league_with(&players, BudgetPolicy::Enforced);

    let complete = Uuid::new_v4();
    let partial = Uuid::new_v4();
    for id in ids(&players) {
        league.add_member(complete, id).unwrap();
    }
    league.add_member(partial, players[0].id).unwrap();

    let board = league.leaderboard().unwrap();
    assert_eq!(board.len(), 1);
    assert_eq!(board[0].user_id, complete);
    assert_eq!(board[0].total_value, 11 * 100_000);
}

#[test]
fn concurrent_adds_never_break_quotas() {
    let batsmen: Vec<PlayerRecord> = (0..12).map(|_| cheap(Role::Batsman)).collect();
    let league = Arc::new(league_with(&batsmen, BudgetPolicy::Enforced));
    let user = Uuid::new_v4();

    let results: Vec<bool> = thread::scope(|s| {
        let handles: Vec<_> = batsmen
            .iter()
            .map(|p| {
                let league = Arc::clone(&league);
                let id = p.id;
                s.spawn(move || league.add_member(user, id).is_ok())
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(results.iter().filter(|&&ok| ok).count(), 5);
    let view = league.roster_view(user).unwrap();
    assert_eq!(view.composition.batsmen, 5);
    assert_eq!(view.players.len(), 5);
}

#[test]
fn concurrent_mixed_edits_keep_size_and_totals_consistent() {
    let mut players: Vec<PlayerRecord> = Vec::new();
    for role in Role::ALL {
        players.extend((0..6).map(|_| cheap(role)));
    }
    let league = Arc::new(league_with(&players, BudgetPolicy::Enforced));
    let user = Uuid::new_v4();

    thread::scope(|s| {
        for (i, p) in players.iter().enumerate() {
            let league = Arc::clone(&league);
            let id = p.id;
            s.spawn(move || {
                let _ = league.add_member(user, id);
                if i % 3 == 0 {
                    let _ = league.remove_member(user, id);
                }
            });
        }
    });

    let view = league.roster_view(user).unwrap();
    assert!(view.players.len() <= 11);
    for role in Role::ALL {
        assert!(view.composition.count(role) <= role.quota());
    }
    let mut members: Vec<(PlayerId, f64)> = view.players.iter().map(|m| (m.player_id, m.points)).collect();
    members.sort_unstable_by_key(|&(id, _)| id);
    let fresh: f64 = members.into_iter().map(|(_, points)| points).sum();
    assert_eq!(view.total_points.to_bits(), fresh.to_bits());
}

#[test]
fn summary_reports_leaders() {
    let mut batter = cheap(Role::Batsman);
    batter
        .update_stats(&StatsPatch {
            runs_scored: Some(420),
            ..StatsPatch::default()
        })
        .unwrap();
    let mut bowler = cheap(Role::Bowler);
    bowler
        .update_stats(&StatsPatch {
            wickets_taken: Some(17),
            runs_scored: Some(30),
            ..StatsPatch::default()
        })
        .unwrap();
    let league = league_with(&[batter.clone(), bowler.clone()], BudgetPolicy::Enforced);

    let summary = league.summary().unwrap();
    assert_eq!(summary.total_runs, 450);
    assert_eq!(summary.total_wickets, 17);
    assert_eq!(summary.highest_scorer.unwrap().name, batter.name);
    assert_eq!(summary.highest_wicket_taker.unwrap().wickets, 17);
}

#[test]
fn summary_ties_go_to_the_first_name() {
    let scorer = |name: &str| {
        let stats = PlayerStats {
            innings_played: 4,
            runs_scored: 100,
            wickets_taken: 3,
            ..PlayerStats::default()
        };
        PlayerRecord::new(name, "Test University", Role::AllRounder, stats)
    };
    let players = [scorer("Beta"), scorer("Alpha"), scorer("Gamma")];

    // Fresh maps hash in different orders; the leader must not follow them.
    for _ in 0..20 {
        let summary = league_with(&players, BudgetPolicy::Enforced).summary().unwrap();
        assert_eq!(summary.total_runs, 300);
        assert_eq!(summary.highest_scorer.unwrap().name, "Alpha");
        assert_eq!(summary.highest_wicket_taker.unwrap().name, "Alpha");
    }
    let reversed = tournament_summary(players.iter().rev());
    assert_eq!(reversed, tournament_summary(players.iter()));
}
