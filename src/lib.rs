pub mod config;
pub mod ecosystem;
pub mod error;
pub mod id;
pub mod model;
pub mod scenario;
pub mod script;
pub mod sim;
pub mod views;

pub use config::EcoConfig;
pub use ecosystem::{Ecosystem, EcosystemSnapshot, ReplaySummary};
pub use error::IntentError;
pub use id::IdGenerator;
pub use model::{
    Adjacency, Alert, FoodChainRelation, Measure, RiskLevel, SimulationResult, Species, SpeciesId,
};
pub use script::Intent;
