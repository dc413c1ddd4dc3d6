#![allow(dead_code)]

use ecotrack::scenario::Scenario;
use ecotrack::{Ecosystem, Species};

/// Rabbit (risk 3, 100), Fox (risk 2, 20, queued), Fox eats Rabbit.
pub fn fox_and_rabbit() -> Ecosystem {
    Scenario::new()
        .fauna("Rabbit", 3, 100)
        .fauna("Fox", 2, 20)
        .eats("Fox", "Rabbit")
        .try_build()
        .unwrap()
}

/// Eagle → Snake → Frog → Fly, plus an unrelated Bear.
pub fn chain() -> Ecosystem {
    Scenario::new()
        .fauna("Eagle", 2, 30)
        .fauna("Snake", 3, 200)
        .fauna("Frog", 4, 400)
        .fauna("Fly", 5, 5000)
        .fauna("Bear", 3, 60)
        .eats("Eagle", "Snake")
        .eats("Snake", "Frog")
        .eats("Frog", "Fly")
        .try_build()
        .unwrap()
}

pub fn population(eco: &Ecosystem, name: &str) -> u64 {
    species(eco, name).population
}

pub fn species<'a>(eco: &'a Ecosystem, name: &str) -> &'a Species {
    eco.species_by_name(name)
        .unwrap_or_else(|| panic!("species {name} not registered"))
}

pub fn populations(eco: &Ecosystem) -> Vec<(String, u64)> {
    eco.species()
        .iter()
        .map(|s| (s.name.clone(), s.population))
        .collect()
}
