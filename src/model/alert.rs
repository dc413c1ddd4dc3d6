use serde::{Deserialize, Serialize};

use super::species::{RiskLevel, Species};
use crate::config::EcoConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Alert {
    Extinct,
    Critical,
    HighlyEndangered,
}

string_enum!(Alert {
    Extinct => "EXTINCT",
    Critical => "CRITICAL",
    HighlyEndangered => "HIGHLY_ENDANGERED",
});

impl Alert {
    /// Classify a species by its current state.
    ///
    /// Extinction dominates criticality, which dominates the risk-level-1 flag.
    /// Flora always have population 0 and therefore classify as extinct.
    pub fn classify(species: &Species, config: &EcoConfig) -> Option<Alert> {
        if species.population == 0 {
            Some(Alert::Extinct)
        } else if species.is_fauna && species.population < config.critical_population {
            Some(Alert::Critical)
        } else if species.risk_level == RiskLevel::HIGHEST {
            Some(Alert::HighlyEndangered)
        } else {
            None
        }
    }
}
