use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum ImpactReason {
    PredatorLosesFood,
    PreyReleased,
}

string_enum!(ImpactReason {
    PredatorLosesFood => "predator loses food source",
    PreyReleased => "prey population increases due to reduced predation",
});

/// One projected population change from a what-if run. Never applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub species: String,
    /// Signed population change: negative for predators, positive for prey.
    pub impact: i64,
    pub reason: ImpactReason,
}

/// A species reachable from an origin through the food chain, with how strongly
/// it depends on the origin's population.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DependencyReach {
    pub species: String,
    /// `population(origin) / population(species)`, or 0 when the species has none.
    pub dependency_factor: f64,
}
