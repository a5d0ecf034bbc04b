//! CSV import of the initial player list.

use crate::models::{LeagueError, NewPlayer, PlayerRecord, StatsPatch};
use serde::Deserialize;
use std::io::Read;

/// One row of the seed sheet. Header names match the sheet the league was set up from.
#[derive(Debug, Deserialize)]
struct SeedRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "University")]
    university: String,
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "Total Runs", default)]
    total_runs: i64,
    #[serde(rename = "Balls Faced", default)]
    balls_faced: i64,
    #[serde(rename = "Innings Played", default)]
    innings_played: i64,
    #[serde(rename = "Wickets", default)]
    wickets: i64,
    #[serde(rename = "Overs Bowled", default)]
    overs_bowled: f64,
    #[serde(rename = "Runs Conceded", default)]
    runs_conceded: i64,
}

impl SeedRow {
    fn into_input(self) -> NewPlayer {
        NewPlayer {
            name: self.name,
            university: self.university,
            role: self.category,
            stats: StatsPatch {
                // The sheet has no separate matches column.
                matches_played: Some(self.innings_played),
                innings_played: Some(self.innings_played),
                runs_scored: Some(self.total_runs),
                balls_faced: Some(self.balls_faced),
                wickets_taken: Some(self.wickets),
                overs_bowled: Some(self.overs_bowled),
                runs_conceded: Some(self.runs_conceded),
                ..StatsPatch::default()
            },
        }
    }
}

/// Parse and score every row. The first bad row fails the whole import.
pub fn load_players_csv<R: Read>(reader: R) -> Result<Vec<PlayerRecord>, LeagueError> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut players = Vec::new();
    for row in rdr.deserialize::<SeedRow>() {
        let input = row?.into_input();
        players.push(PlayerRecord::from_input(&input)?);
    }
    Ok(players)
}
