//! Budget policy layered over roster aggregation.

use crate::models::{LeagueError, PlayerRecord, RosterView};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Whether an add that costs more than the remaining budget is rejected.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetPolicy {
    /// Reject with `BudgetExceeded`.
    #[default]
    Enforced,
    /// Allow; the roster view then shows a negative remaining budget.
    Advisory,
}

impl FromStr for BudgetPolicy {
    type Err = LeagueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "enforced" | "hard" => Ok(BudgetPolicy::Enforced),
            "advisory" | "soft" => Ok(BudgetPolicy::Advisory),
            other => Err(LeagueError::invalid("budgetPolicy", format!("unknown policy {other:?}"))),
        }
    }
}

/// Check whether `player` fits in what `roster` has left to spend.
pub fn check_budget(policy: BudgetPolicy, roster: &RosterView, player: &PlayerRecord) -> Result<(), LeagueError> {
    let value = player.value();
    let affordable = i64::try_from(value).map_or(false, |v| v <= roster.remaining_budget);
    if affordable {
        return Ok(());
    }
    match policy {
        BudgetPolicy::Enforced => Err(LeagueError::BudgetExceeded {
            value,
            remaining: roster.remaining_budget,
        }),
        BudgetPolicy::Advisory => {
            log::warn!(
                "user {} is over budget adding {} ({} with {} remaining)",
                roster.user_id,
                player.name,
                value,
                roster.remaining_budget
            );
            Ok(())
        }
    }
}
