use std::collections::{BTreeSet, VecDeque};

use crate::config::EcoConfig;
use crate::model::{
    DependencyReach, FoodChainGraph, ImpactReason, SimulationResult, SpeciesRegistry,
};

/// Project the one-hop cascade of `deaths` deaths of `name` without applying it.
///
/// Emits one result per predator relation, then one per prey relation, so a
/// duplicated relation is reported twice. A blank or unconnected name projects
/// nothing.
pub fn simulate(
    graph: &FoodChainGraph,
    config: &EcoConfig,
    name: &str,
    deaths: u64,
) -> Vec<SimulationResult> {
    if name.trim().is_empty() {
        return Vec::new();
    }

    let penalty = signed(config.predator_penalty(deaths));
    let bonus = signed(config.prey_bonus(deaths));

    let predators = graph
        .predators_of(name)
        .into_iter()
        .map(|species| SimulationResult {
            species,
            impact: -penalty,
            reason: ImpactReason::PredatorLosesFood,
        });
    let prey = graph.prey_of(name).into_iter().map(|species| SimulationResult {
        species,
        impact: bonus,
        reason: ImpactReason::PreyReleased,
    });
    predators.chain(prey).collect()
}

fn signed(impact: u64) -> i64 {
    i64::try_from(impact).unwrap_or(i64::MAX)
}

/// Every species reachable from `name` through any chain of relations, in
/// either direction, with its dependency factor on `name`.
///
/// The origin itself is never listed. Results are ordered by name. A name
/// with no relations reaches nothing.
pub fn impact_reach(
    graph: &FoodChainGraph,
    registry: &SpeciesRegistry,
    name: &str,
) -> Vec<DependencyReach> {
    if !graph.has_edges(name) {
        return Vec::new();
    }

    let mut reached = BTreeSet::new();
    let mut frontier = VecDeque::from([name]);
    while let Some(current) = frontier.pop_front() {
        for next in graph.neighbours(current) {
            if next != name && reached.insert(next) {
                frontier.push_back(next);
            }
        }
    }

    let origin_population = population_of(registry, name);
    reached
        .into_iter()
        .map(|species| {
            let dependent = population_of(registry, species);
            let dependency_factor = if dependent == 0 {
                0.0
            } else {
                origin_population as f64 / dependent as f64
            };
            DependencyReach {
                species: species.to_string(),
                dependency_factor,
            }
        })
        .collect()
}

fn population_of(registry: &SpeciesRegistry, name: &str) -> u64 {
    registry.by_name(name).map_or(0, |s| s.population)
}
