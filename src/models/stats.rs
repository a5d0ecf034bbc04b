//! Raw statistic counters, derived fields and the ingestion patch that validates updates.

use crate::models::error::LeagueError;
use serde::{Deserialize, Serialize};

/// A rate computed from a denominator that may be zero.
///
/// `NotApplicable` is distinct from `Available(0.0)`: a bowler with no wickets has no average.
/// Serialized as a number, or `null` when not applicable.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "Option<f64>", into = "Option<f64>")]
pub enum Rate {
    Available(f64),
    NotApplicable,
}

impl Rate {
    /// `numerator / denominator`, or `NotApplicable` when the denominator is zero.
    pub fn ratio(numerator: f64, denominator: f64) -> Self {
        if denominator > 0.0 {
            Rate::Available(numerator / denominator)
        } else {
            Rate::NotApplicable
        }
    }

    pub fn value(self) -> Option<f64> {
        match self {
            Rate::Available(v) => Some(v),
            Rate::NotApplicable => None,
        }
    }

    /// The value, with zero substituted for `NotApplicable`.
    pub fn or_zero(self) -> f64 {
        self.value().unwrap_or(0.0)
    }
}

impl From<Option<f64>> for Rate {
    fn from(v: Option<f64>) -> Self {
        v.map_or(Rate::NotApplicable, Rate::Available)
    }
}

impl From<Rate> for Option<f64> {
    fn from(r: Rate) -> Self {
        r.value()
    }
}

/// Best innings bowling figures, e.g. 4/21.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct BowlingFigures {
    pub wickets: u32,
    pub runs: u32,
}

/// Career counters for one player. Balls bowled is the primitive; overs are derived.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStats {
    pub matches_played: u32,
    pub innings_played: u32,
    pub not_outs: u32,
    pub runs_scored: u32,
    pub balls_faced: u32,
    pub highest_score: u32,
    pub fifties: u32,
    pub hundreds: u32,
    pub ducks: u32,
    pub wickets_taken: u32,
    pub balls_bowled: u32,
    pub runs_conceded: u32,
    pub best_bowling: BowlingFigures,
}

impl PlayerStats {
    /// Overs in cricket notation (`13.4` = 13 overs and 4 balls).
    pub fn overs_bowled(&self) -> f64 {
        overs_from_balls(self.balls_bowled)
    }

    /// Innings in which the player was dismissed.
    pub fn dismissals(&self) -> u32 {
        self.innings_played.saturating_sub(self.not_outs)
    }
}

/// Balls from cricket overs notation: the fractional digit counts balls 0-5, not tenths.
pub fn balls_from_overs(overs: f64) -> Result<u32, LeagueError> {
    if !overs.is_finite() || overs < 0.0 {
        return Err(LeagueError::invalid("oversBowled", "overs bowled cannot be negative"));
    }
    let whole = overs.floor();
    let extra = ((overs - whole) * 10.0).round();
    if extra > 5.0 {
        return Err(LeagueError::invalid(
            "oversBowled",
            format!("{overs} is not a valid over count (at most 5 balls after the point)"),
        ));
    }
    let balls = whole * 6.0 + extra;
    if balls > f64::from(u32::MAX) {
        return Err(LeagueError::invalid("oversBowled", "overs bowled is too large"));
    }
    Ok(balls as u32)
}

pub fn overs_from_balls(balls: u32) -> f64 {
    f64::from(balls / 6) + f64::from(balls % 6) / 10.0
}

/// Fields computed from [`PlayerStats`]; see `logic::scoring`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedStats {
    pub overs_bowled: f64,
    pub batting_average: Rate,
    pub batting_strike_rate: f64,
    pub bowling_average: Rate,
    pub bowling_strike_rate: Rate,
    pub economy_rate: f64,
    pub batting_points: f64,
    pub bowling_points: f64,
    pub points: f64,
    pub value: u64,
}

/// Statistic update as received from a caller: only present fields change.
///
/// Values are signed so negative input can be rejected with a message instead of a parse error.
/// Balls may be given as `ballsBowled` or `oversBowled`; if both are present they must agree.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsPatch {
    pub matches_played: Option<i64>,
    pub innings_played: Option<i64>,
    pub not_outs: Option<i64>,
    pub runs_scored: Option<i64>,
    pub balls_faced: Option<i64>,
    pub highest_score: Option<i64>,
    pub fifties: Option<i64>,
    pub hundreds: Option<i64>,
    pub ducks: Option<i64>,
    pub wickets_taken: Option<i64>,
    pub balls_bowled: Option<i64>,
    pub overs_bowled: Option<f64>,
    pub runs_conceded: Option<i64>,
    pub best_bowling_wickets: Option<i64>,
    pub best_bowling_runs: Option<i64>,
}

impl StatsPatch {
    /// Counters from `base` with this patch applied. `base` itself is never touched.
    pub fn apply(&self, base: &PlayerStats) -> Result<PlayerStats, LeagueError> {
        let balls_bowled = match (self.balls_bowled, self.overs_bowled) {
            (Some(balls), Some(overs)) => {
                let balls = counter("ballsBowled", Some(balls), 0)?;
                if balls_from_overs(overs)? != balls {
                    return Err(LeagueError::invalid(
                        "oversBowled",
                        format!("{overs} overs does not match {balls} balls bowled"),
                    ));
                }
                balls
            }
            (None, Some(overs)) => balls_from_overs(overs)?,
            (balls, None) => counter("ballsBowled", balls, base.balls_bowled)?,
        };

        let stats = PlayerStats {
            matches_played: counter("matchesPlayed", self.matches_played, base.matches_played)?,
            innings_played: counter("inningsPlayed", self.innings_played, base.innings_played)?,
            not_outs: counter("notOuts", self.not_outs, base.not_outs)?,
            runs_scored: counter("runsScored", self.runs_scored, base.runs_scored)?,
            balls_faced: counter("ballsFaced", self.balls_faced, base.balls_faced)?,
            highest_score: counter("highestScore", self.highest_score, base.highest_score)?,
            fifties: counter("fifties", self.fifties, base.fifties)?,
            hundreds: counter("hundreds", self.hundreds, base.hundreds)?,
            ducks: counter("ducks", self.ducks, base.ducks)?,
            wickets_taken: counter("wicketsTaken", self.wickets_taken, base.wickets_taken)?,
            balls_bowled,
            runs_conceded: counter("runsConceded", self.runs_conceded, base.runs_conceded)?,
            best_bowling: BowlingFigures {
                wickets: counter("bestBowlingWickets", self.best_bowling_wickets, base.best_bowling.wickets)?,
                runs: counter("bestBowlingRuns", self.best_bowling_runs, base.best_bowling.runs)?,
            },
        };

        if stats.not_outs > stats.innings_played {
            return Err(LeagueError::invalid(
                "notOuts",
                format!(
                    "not outs ({}) cannot exceed innings played ({})",
                    stats.not_outs, stats.innings_played
                ),
            ));
        }
        Ok(stats)
    }
}

fn counter(field: &'static str, value: Option<i64>, current: u32) -> Result<u32, LeagueError> {
    match value {
        None => Ok(current),
        Some(v) if v < 0 => Err(LeagueError::invalid(field, format!("cannot be negative (got {v})"))),
        Some(v) => u32::try_from(v).map_err(|_| LeagueError::invalid(field, format!("{v} is too large"))),
    }
}
