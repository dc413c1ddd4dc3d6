#[macro_use]
mod macros;

pub mod alert;
pub mod effect;
pub mod event;
pub mod food_chain;
pub mod ledger;
pub mod registry;
pub mod relation;
pub mod relocation;
pub mod simulation;
pub mod species;
pub mod state;

pub use alert::Alert;
pub use effect::{ChangeReason, EventEffect, StateChange};
pub use event::{Event, EventKind};
pub use food_chain::FoodChainGraph;
pub use ledger::Ledger;
pub use registry::SpeciesRegistry;
pub use relation::{Adjacency, FoodChainRelation};
pub use relocation::RelocationQueue;
pub use simulation::{DependencyReach, ImpactReason, SimulationResult};
pub use species::{Measure, RiskLevel, Species, SpeciesId};
pub use state::EcoState;
