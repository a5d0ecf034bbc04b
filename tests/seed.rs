//! Integration tests for CSV seed import.

use fantasy_cricket_web::{load_players_csv, LeagueError, Role};

const SHEET: &str = "\
Name,University,Category,Total Runs,Balls Faced,Innings Played,Wickets,Overs Bowled,Runs Conceded
Chamika Chandimal,University of the Visual & Performing Arts,Batsman,530,588,10,0,3,21
Dimuth Dhananjaya,University of Moratuwa,All-Rounder,250,208,10,8,40,240
Danushka Jayawickrama,University of Sri Jayewardenepura,Bowler,40,52,10,25,53.4,380
Kasun Pathirana,University of Colombo,Wicket-Keeper,361,404,10,0,0,0
";

#[test]
fn rows_become_scored_players() {
    let players = load_players_csv(SHEET.as_bytes()).unwrap();
    assert_eq!(players.len(), 4);

    let roles: Vec<Role> = players.iter().map(|p| p.role).collect();
    assert_eq!(roles, vec![Role::Batsman, Role::AllRounder, Role::Bowler, Role::WicketKeeper]);

    let bowler = &players[2];
    assert_eq!(bowler.stats().balls_bowled, 53 * 6 + 4);
    assert_eq!(bowler.stats().matches_played, 10);
    assert_eq!(bowler.stats().wickets_taken, 25);

    for p in &players {
        assert_eq!(p.value() % 50_000, 0);
        assert!(p.points().is_finite());
    }
}

#[test]
fn unknown_category_fails_the_import() {
    let sheet = "\
Name,University,Category,Total Runs,Balls Faced,Innings Played,Wickets,Overs Bowled,Runs Conceded
Someone,Somewhere,Coach,1,1,1,0,0,0
";
    assert!(matches!(
        load_players_csv(sheet.as_bytes()),
        Err(LeagueError::InvalidInput { field: "role", .. })
    ));
}

#[test]
fn malformed_numbers_fail_the_import() {
    let sheet = "\
Name,University,Category,Total Runs,Balls Faced,Innings Played,Wickets,Overs Bowled,Runs Conceded
Someone,Somewhere,Batsman,lots,1,1,0,0,0
";
    assert!(matches!(load_players_csv(sheet.as_bytes()), Err(LeagueError::Seed(_))));
}
