//! Tournament-wide totals and leaders over all players.

use crate::models::PlayerRecord;
use serde::Serialize;

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopScorer {
    pub name: String,
    pub runs: u32,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopWicketTaker {
    pub name: String,
    pub wickets: u32,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentSummary {
    pub total_runs: u64,
    pub total_wickets: u64,
    /// None when nobody has scored a run.
    pub highest_scorer: Option<TopScorer>,
    /// None when nobody has taken a wicket.
    pub highest_wicket_taker: Option<TopWicketTaker>,
}

/// Totals and leaders. Ties go to the player first by name, then by id, so the result
/// does not depend on the order `players` yields them.
pub fn tournament_summary<'a>(players: impl IntoIterator<Item = &'a PlayerRecord>) -> TournamentSummary {
    let mut totals = (0u64, 0u64);
    let mut top_scorer: Option<&PlayerRecord> = None;
    let mut top_wicket_taker: Option<&PlayerRecord> = None;
    for player in players {
        let stats = player.stats();
        totals.0 += u64::from(stats.runs_scored);
        totals.1 += u64::from(stats.wickets_taken);

        if stats.runs_scored > 0 && leads(player, top_scorer, |p| p.stats().runs_scored) {
            top_scorer = Some(player);
        }
        if stats.wickets_taken > 0 && leads(player, top_wicket_taker, |p| p.stats().wickets_taken) {
            top_wicket_taker = Some(player);
        }
    }

    TournamentSummary {
        total_runs: totals.0,
        total_wickets: totals.1,
        highest_scorer: top_scorer.map(|p| TopScorer {
            name: p.name.clone(),
            runs: p.stats().runs_scored,
        }),
        highest_wicket_taker: top_wicket_taker.map(|p| TopWicketTaker {
            name: p.name.clone(),
            wickets: p.stats().wickets_taken,
        }),
    }
}

fn leads(player: &PlayerRecord, current: Option<&PlayerRecord>, key: impl Fn(&PlayerRecord) -> u32) -> bool {
    let Some(current) = current else {
        return true;
    };
    key(player)
        .cmp(&key(current))
        .then_with(|| current.name.cmp(&player.name))
        .then_with(|| current.id.cmp(&player.id))
        .is_gt()
}
