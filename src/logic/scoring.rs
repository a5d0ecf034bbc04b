//! Scoring: raw counters to batting/bowling rates, points and value.

use crate::models::{DerivedStats, PlayerStats, Rate, VALUE_STEP};

/// Compute every derived field from the raw counters. Pure: same counters, same bits out.
///
/// Points use `Rate::or_zero` for the batting average, so a player who was never dismissed
/// scores batting points from strike rate alone instead of getting a non-finite total.
pub fn compute_derived_stats(stats: &PlayerStats) -> DerivedStats {
    let batting_average = batting_average(stats);
    let batting_strike_rate = batting_strike_rate(stats);
    let bowling_strike_rate = bowling_strike_rate(stats);
    let economy_rate = economy_rate(stats);

    let batting_points = batting_points(batting_strike_rate, batting_average);
    let bowling_points = bowling_points(stats, bowling_strike_rate, economy_rate);
    let points = batting_points + bowling_points;

    DerivedStats {
        overs_bowled: stats.overs_bowled(),
        batting_average,
        batting_strike_rate,
        bowling_average: bowling_average(stats),
        bowling_strike_rate,
        economy_rate,
        batting_points,
        bowling_points,
        points,
        value: player_value(points),
    }
}

/// Runs per dismissal.
pub fn batting_average(stats: &PlayerStats) -> Rate {
    Rate::ratio(f64::from(stats.runs_scored), f64::from(stats.dismissals()))
}

/// Runs per 100 balls faced; 0 if no balls faced.
pub fn batting_strike_rate(stats: &PlayerStats) -> f64 {
    if stats.balls_faced == 0 {
        return 0.0;
    }
    f64::from(stats.runs_scored) / f64::from(stats.balls_faced) * 100.0
}

/// Runs conceded per wicket.
pub fn bowling_average(stats: &PlayerStats) -> Rate {
    Rate::ratio(f64::from(stats.runs_conceded), f64::from(stats.wickets_taken))
}

/// Balls bowled per wicket.
pub fn bowling_strike_rate(stats: &PlayerStats) -> Rate {
    Rate::ratio(f64::from(stats.balls_bowled), f64::from(stats.wickets_taken))
}

/// Runs conceded per six balls; 0 if nothing bowled.
pub fn economy_rate(stats: &PlayerStats) -> f64 {
    if stats.balls_bowled == 0 {
        return 0.0;
    }
    f64::from(stats.runs_conceded) / (f64::from(stats.balls_bowled) / 6.0)
}

pub fn batting_points(strike_rate: f64, average: Rate) -> f64 {
    strike_rate / 5.0 + average.or_zero() * 0.8
}

/// 500 / strike rate + 140 / economy with wickets; economy term only without; 0 if never bowled.
/// A zero denominator contributes nothing (a bowler who conceded no runs has economy 0).
pub fn bowling_points(stats: &PlayerStats, strike_rate: Rate, economy_rate: f64) -> f64 {
    if stats.balls_bowled == 0 {
        return 0.0;
    }
    let economy_term = inverse_term(140.0, economy_rate);
    match strike_rate {
        Rate::Available(sr) if stats.wickets_taken > 0 => inverse_term(500.0, sr) + economy_term,
        _ => economy_term,
    }
}

/// Monetary value: `(9 * points + 100) * 1000` rounded to the nearest [`VALUE_STEP`].
pub fn player_value(points: f64) -> u64 {
    let step = VALUE_STEP as f64;
    let raw = (9.0 * points + 100.0) * 1000.0;
    let steps = (raw / step).round();
    if steps.is_finite() && steps > 0.0 {
        steps as u64 * VALUE_STEP
    } else {
        0
    }
}

fn inverse_term(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}
