use serde::{Deserialize, Serialize};

use crate::error::IntentError;

pub type SpeciesId = u64;

/// Extinction risk rating: 1 is the highest risk, 5 the lowest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct RiskLevel(u8);

impl RiskLevel {
    pub const HIGHEST: RiskLevel = RiskLevel(1);
    pub const LOWEST: RiskLevel = RiskLevel(5);

    pub fn new(value: u8) -> Result<Self, IntentError> {
        if (Self::HIGHEST.0..=Self::LOWEST.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(IntentError::RiskLevelOutOfRange { value })
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for RiskLevel {
    type Error = IntentError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RiskLevel> for u8 {
    fn from(level: RiskLevel) -> Self {
        level.0
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What a species is measured by. Fauna are counted, flora are weighed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "measure", content = "value", rename_all = "snake_case")]
pub enum Measure {
    Population(u64),
    /// Tons.
    Biomass(f64),
}

impl Measure {
    /// Build a measure from a fauna flag and a raw value, the shape form input arrives in.
    ///
    /// Fauna values are truncated to a whole head count.
    pub fn from_parts(is_fauna: bool, value: f64) -> Result<Self, IntentError> {
        if !value.is_finite() || value < 0.0 {
            return Err(IntentError::InvalidMeasure { value });
        }
        Ok(if is_fauna {
            Measure::Population(value as u64)
        } else {
            Measure::Biomass(value)
        })
    }

    pub fn is_fauna(&self) -> bool {
        matches!(self, Measure::Population(_))
    }

    pub(crate) fn validate(self) -> Result<Self, IntentError> {
        match self {
            Measure::Biomass(tons) if !tons.is_finite() || tons < 0.0 => {
                Err(IntentError::InvalidMeasure { value: tons })
            }
            other => Ok(other),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Species {
    pub id: SpeciesId,
    pub name: String,
    pub risk_level: RiskLevel,
    pub is_fauna: bool,
    pub population: u64,
    /// Fixed at creation. Always 0 for fauna.
    pub biomass: f64,
    pub initial_population: u64,
    pub births: u64,
    pub deaths: u64,
}

impl Species {
    pub(crate) fn new(id: SpeciesId, name: String, risk_level: RiskLevel, measure: Measure) -> Self {
        let (population, biomass) = match measure {
            Measure::Population(count) => (count, 0.0),
            Measure::Biomass(tons) => (0, tons),
        };
        Self {
            id,
            name,
            risk_level,
            is_fauna: measure.is_fauna(),
            population,
            biomass,
            initial_population: population,
            births: 0,
            deaths: 0,
        }
    }

    /// The measure shown for this species: head count for fauna, tons for flora.
    pub fn measure(&self) -> Measure {
        if self.is_fauna {
            Measure::Population(self.population)
        } else {
            Measure::Biomass(self.biomass)
        }
    }

    /// Population gained (positive) or lost (negative) since creation.
    /// Saturates at the `i64` bounds.
    pub fn net_change(&self) -> i64 {
        let change = i128::from(self.population) - i128::from(self.initial_population);
        i64::try_from(change).unwrap_or(if change < 0 { i64::MIN } else { i64::MAX })
    }

    /// Apply a death event. Population floors at zero; the counter records the full count.
    pub(crate) fn apply_deaths(&mut self, count: u64) {
        self.population = self.population.saturating_sub(count);
        self.deaths = self.deaths.saturating_add(count);
    }

    pub(crate) fn apply_births(&mut self, count: u64) {
        self.population = self.population.saturating_add(count);
        self.births = self.births.saturating_add(count);
    }
}
