//! Server configuration from the environment: HOST, PORT, PLAYERS_CSV, BUDGET_POLICY.

use crate::logic::BudgetPolicy;
use std::path::PathBuf;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Seed file loaded at startup, if set.
    pub players_csv: Option<PathBuf>,
    pub budget_policy: BudgetPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            players_csv: None,
            budget_policy: BudgetPolicy::default(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unparseable values fall back to the default with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let host = lookup("HOST")
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(default_host);
        let port = match lookup("PORT") {
            Some(p) => p.trim().parse().unwrap_or_else(|_| {
                log::warn!("Ignoring invalid PORT {:?}", p);
                default_port()
            }),
            None => default_port(),
        };
        let players_csv = lookup("PLAYERS_CSV")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);
        let budget_policy = match lookup("BUDGET_POLICY") {
            Some(p) => p.parse().unwrap_or_else(|e| {
                log::warn!("Ignoring BUDGET_POLICY: {}", e);
                BudgetPolicy::default()
            }),
            None => BudgetPolicy::default(),
        };
        Self {
            host,
            port,
            players_csv,
            budget_policy,
        }
    }
}
