use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Tunable thresholds and cascade rates for an [`Ecosystem`](crate::Ecosystem).
///
/// Rates are integer percentages so that `floor(count * rate)` is exact:
/// `count * percent / 100` in integer arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EcoConfig {
    /// Population lost by each predator of a dead species, per 100 deaths.
    pub predator_penalty_percent: u64,
    /// Population gained by each prey of a dead species, per 100 deaths.
    pub prey_bonus_percent: u64,
    /// Species created with a risk level at or below this are queued for relocation.
    pub relocation_risk_cutoff: u8,
    /// A birth that leaves a queued species at or above this population clears it.
    pub recovery_threshold: u64,
    /// Fauna below this population are flagged critical.
    pub critical_population: u64,
}

impl Default for EcoConfig {
    fn default() -> Self {
        Self {
            predator_penalty_percent: 20,
            prey_bonus_percent: 10,
            relocation_risk_cutoff: 2,
            recovery_threshold: 50,
            critical_population: 50,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed config file: {0}")]
    Json(#[from] serde_json::Error),
}

impl EcoConfig {
    /// Load a config from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Population removed from each predator when `deaths` of its prey die.
    pub fn predator_penalty(&self, deaths: u64) -> u64 {
        percent_of(deaths, self.predator_penalty_percent)
    }

    /// Population added to each prey when `deaths` of its predator die.
    pub fn prey_bonus(&self, deaths: u64) -> u64 {
        percent_of(deaths, self.prey_bonus_percent)
    }
}

/// `floor(count * percent / 100)`, widened so the product never overflows.
fn percent_of(count: u64, percent: u64) -> u64 {
    let scaled = u128::from(count) * u128::from(percent) / 100;
    u64::try_from(scaled).unwrap_or(u64::MAX)
}
