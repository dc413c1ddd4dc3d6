use serde::{Deserialize, Serialize};

/// A directed predator → prey edge between two species names.
///
/// Names are not checked against the registry; an edge to an undeclared
/// species is kept and simply has nothing to propagate to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FoodChainRelation {
    pub predator: String,
    pub prey: String,
}

impl FoodChainRelation {
    pub fn new(predator: impl Into<String>, prey: impl Into<String>) -> Self {
        Self {
            predator: predator.into(),
            prey: prey.into(),
        }
    }
}

/// Both directions of the food chain around one species.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adjacency {
    /// Species that eat this one, one entry per relation.
    pub predators: Vec<String>,
    /// Species this one eats, one entry per relation.
    pub prey: Vec<String>,
}

impl Adjacency {
    pub fn is_empty(&self) -> bool {
        self.predators.is_empty() && self.prey.is_empty()
    }
}
