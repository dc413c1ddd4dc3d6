use serde::{Deserialize, Serialize};

use super::species::{RiskLevel, SpeciesId};

/// A single state change, linked to the event that caused it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventEffect {
    pub event_id: u64,
    /// The species that changed, when the change belongs to one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub species_id: Option<SpeciesId>,
    pub effect: StateChange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum ChangeReason {
    Death,
    Birth,
    /// Cascade: the species' prey died.
    LostFoodSource,
    /// Cascade: the species' predator died.
    ReducedPredation,
}

string_enum!(ChangeReason {
    Death => "death",
    Birth => "birth",
    LostFoodSource => "lost_food_source",
    ReducedPredation => "reduced_predation",
});

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StateChange {
    SpeciesCreated {
        name: String,
        risk_level: RiskLevel,
    },
    RelationAdded {
        predator: String,
        prey: String,
    },
    PopulationChanged {
        old: u64,
        new: u64,
        reason: ChangeReason,
    },
    RelocationQueued {
        name: String,
    },
    RelocationCleared {
        name: String,
    },
}
