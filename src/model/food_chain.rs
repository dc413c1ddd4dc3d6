use std::collections::BTreeMap;

use super::registry::SpeciesRegistry;
use super::relation::{Adjacency, FoodChainRelation};

/// Flat list of predator → prey relations, in the order they were added.
///
/// Adjacency is derived from the list on every query, so it can never be
/// stale with respect to the registry or the relations.
#[derive(Debug, Clone, Default)]
pub struct FoodChainGraph {
    relations: Vec<FoodChainRelation>,
}

impl FoodChainGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a relation. Duplicates and undeclared names are kept as given.
    pub(crate) fn push(&mut self, relation: FoodChainRelation) {
        self.relations.push(relation);
    }

    pub fn relations(&self) -> &[FoodChainRelation] {
        &self.relations
    }

    /// Predator names from every relation whose prey is `name`.
    pub fn predators_of(&self, name: &str) -> Vec<String> {
        self.relations
            .iter()
            .filter(|r| r.prey == name)
            .map(|r| r.predator.clone())
            .collect()
    }

    /// Prey names from every relation whose predator is `name`.
    pub fn prey_of(&self, name: &str) -> Vec<String> {
        self.relations
            .iter()
            .filter(|r| r.predator == name)
            .map(|r| r.prey.clone())
            .collect()
    }

    pub fn has_edges(&self, name: &str) -> bool {
        self.relations
            .iter()
            .any(|r| r.predator == name || r.prey == name)
    }

    /// Every name reachable from `name` through one relation, in either direction.
    pub fn neighbours(&self, name: &str) -> impl Iterator<Item = &str> {
        self.relations.iter().filter_map(move |r| {
            if r.predator == name {
                Some(r.prey.as_str())
            } else if r.prey == name {
                Some(r.predator.as_str())
            } else {
                None
            }
        })
    }

    pub fn adjacency_of(&self, name: &str) -> Adjacency {
        Adjacency {
            predators: self.predators_of(name),
            prey: self.prey_of(name),
        }
    }

    /// One entry per species name in the registry, including species with no relations.
    pub fn adjacency(&self, registry: &SpeciesRegistry) -> BTreeMap<String, Adjacency> {
        registry
            .all()
            .iter()
            .map(|s| (s.name.clone(), self.adjacency_of(&s.name)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::species::{Measure, RiskLevel};

    fn graph(edges: &[(&str, &str)]) -> FoodChainGraph {
        let mut g = FoodChainGraph::new();
        for (predator, prey) in edges {
            g.push(FoodChainRelation::new(*predator, *prey));
        }
        g
    }

    #[test]
    fn predators_and_prey() {
        let g = graph(&[("Fox", "Rabbit"), ("Owl", "Rabbit"), ("Rabbit", "Clover")]);
        assert_eq!(g.predators_of("Rabbit"), ["Fox", "Owl"]);
        assert_eq!(g.prey_of("Rabbit"), ["Clover"]);
        assert!(g.predators_of("Fox").is_empty());
        assert!(g.prey_of("Clover").is_empty());
    }

    #[test]
    fn duplicates_are_preserved() {
        let g = graph(&[("Fox", "Rabbit"), ("Fox", "Rabbit")]);
        assert_eq!(g.relations().len(), 2);
        assert_eq!(g.predators_of("Rabbit"), ["Fox", "Fox"]);
        assert_eq!(g.prey_of("Fox"), ["Rabbit", "Rabbit"]);
    }

    #[test]
    fn neighbours_follow_both_directions() {
        let g = graph(&[("Fox", "Rabbit"), ("Rabbit", "Clover"), ("Owl", "Mouse")]);
        let n: Vec<_> = g.neighbours("Rabbit").collect();
        assert_eq!(n, ["Fox", "Clover"]);
        assert!(g.has_edges("Mouse"));
        assert!(!g.has_edges("Bear"));
    }

    #[test]
    fn adjacency_covers_every_registered_species() {
        let mut reg = SpeciesRegistry::new();
        let risk = RiskLevel::new(3).unwrap();
        reg.insert(1, "Fox".to_string(), risk, Measure::Population(10));
        reg.insert(2, "Rabbit".to_string(), risk, Measure::Population(100));
        reg.insert(3, "Bear".to_string(), risk, Measure::Population(4));
        let g = graph(&[("Fox", "Rabbit"), ("Wolf", "Rabbit")]);

        let adj = g.adjacency(&reg);
        assert_eq!(adj.len(), 3);
        assert!(adj["Bear"].is_empty());
        assert_eq!(adj["Fox"].prey, ["Rabbit"]);
        assert_eq!(adj["Rabbit"].predators, ["Fox", "Wolf"]);
        assert!(!adj.contains_key("Wolf"));
    }
}
