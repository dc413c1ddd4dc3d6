//! Read-only views derived from the registry on every call.

use serde::Serialize;

use crate::config::EcoConfig;
use crate::model::{Alert, Measure, RiskLevel, Species, SpeciesRegistry};

/// Species ordered by risk level, highest risk first.
///
/// The sort is stable: species with equal risk keep their registry order.
pub fn sorted_by_risk(registry: &SpeciesRegistry) -> Vec<&Species> {
    let mut species: Vec<&Species> = registry.all().iter().collect();
    species.sort_by_key(|s| s.risk_level);
    species
}

/// One line of the risk report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskReportRow {
    pub name: String,
    pub risk_level: RiskLevel,
    pub measure: Measure,
    /// Population gained or lost since the species was added.
    pub change_since_start: i64,
    pub alert: Option<Alert>,
}

impl RiskReportRow {
    fn from_species(species: &Species, config: &EcoConfig) -> Self {
        Self {
            name: species.name.clone(),
            risk_level: species.risk_level,
            measure: species.measure(),
            change_since_start: species.net_change(),
            alert: Alert::classify(species, config),
        }
    }
}

impl std::fmt::Display for RiskReportRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} | risk {} | ", self.name, self.risk_level)?;
        match self.measure {
            Measure::Population(count) => write!(f, "population {count}")?,
            Measure::Biomass(tons) => write!(f, "biomass {tons} t")?,
        }
        write!(f, " | change {:+}", self.change_since_start)?;
        if let Some(alert) = self.alert {
            write!(f, " | {alert}")?;
        }
        Ok(())
    }
}

/// The risk-ordered view with measures, net change, and alerts.
pub fn risk_report(registry: &SpeciesRegistry, config: &EcoConfig) -> Vec<RiskReportRow> {
    sorted_by_risk(registry)
        .into_iter()
        .map(|s| RiskReportRow::from_species(s, config))
        .collect()
}
