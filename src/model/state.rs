use super::food_chain::FoodChainGraph;
use super::ledger::Ledger;
use super::registry::SpeciesRegistry;
use super::relocation::RelocationQueue;

/// Everything an intent may mutate, owned in one place so a single writer
/// holds it and systems receive it whole.
#[derive(Debug, Clone, Default)]
pub struct EcoState {
    pub registry: SpeciesRegistry,
    pub food_chain: FoodChainGraph,
    pub relocation: RelocationQueue,
    pub ledger: Ledger,
}

impl EcoState {
    pub fn new() -> Self {
        Self::default()
    }
}
