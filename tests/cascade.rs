mod common;

use common::{chain, fox_and_rabbit, population, populations, species};
use ecotrack::scenario::Scenario;

#[test]
fn fox_and_rabbit_walkthrough() {
    let mut eco = fox_and_rabbit();
    assert_eq!(eco.relocation_queue(), ["Fox"]);

    eco.record_death("Rabbit", 10).unwrap();
    assert_eq!(population(&eco, "Rabbit"), 90);
    assert_eq!(population(&eco, "Fox"), 18);
    assert!(eco.relocation_queue().contains(&"Fox".to_string()));

    eco.record_birth("Fox", 35).unwrap();
    assert_eq!(population(&eco, "Fox"), 53);
    assert!(eco.relocation_queue().is_empty());
}

#[test]
fn five_deaths_cost_one_predator() {
    let mut eco = Scenario::new()
        .fauna("X", 3, 100)
        .fauna("P", 3, 40)
        .eats("P", "X")
        .try_build()
        .unwrap();
    eco.record_death("X", 5).unwrap();
    assert_eq!(population(&eco, "P"), 39);
}

#[test]
fn ten_deaths_hit_predator_and_prey() {
    let mut eco = Scenario::new()
        .fauna("X", 3, 100)
        .fauna("P", 3, 40)
        .fauna("Y", 3, 40)
        .eats("P", "X")
        .eats("X", "Y")
        .try_build()
        .unwrap();
    eco.record_death("X", 10).unwrap();
    assert_eq!(population(&eco, "P"), 38);
    assert_eq!(population(&eco, "Y"), 41);
}

#[test]
fn cascade_stops_after_one_hop() {
    let mut eco = chain();
    let before = populations(&eco);

    // Snake deaths reach Eagle (predator) and Frog (prey) only.
    eco.record_death("Snake", 100).unwrap();

    assert_eq!(population(&eco, "Snake"), 100);
    assert_eq!(population(&eco, "Eagle"), 10);
    assert_eq!(population(&eco, "Frog"), 410);
    // Frog gained population, but Fly is two hops away and untouched.
    assert_eq!(population(&eco, "Fly"), 5000);
    assert_eq!(population(&eco, "Bear"), 60);
    assert_eq!(before.len(), populations(&eco).len());
}

#[test]
fn death_arithmetic_ignores_cascade() {
    let mut eco = Scenario::new()
        .fauna("A", 3, 10)
        .fauna("B", 3, 10)
        .eats("A", "B")
        .eats("B", "A")
        .try_build()
        .unwrap();

    eco.record_death("A", 25).unwrap();

    // A's own record follows max(0, before - count) and counts every death.
    let a = species(&eco, "A");
    assert_eq!(a.population, 0);
    assert_eq!(a.deaths, 25);
    // B is both predator (-5) and prey (+2) of A: 10 - 5 + 2.
    assert_eq!(population(&eco, "B"), 7);
    assert_eq!(species(&eco, "B").deaths, 0);
}

#[test]
fn zero_deaths_change_nothing() {
    let mut eco = fox_and_rabbit();
    let before = populations(&eco);
    eco.record_death("Rabbit", 0).unwrap();
    assert_eq!(populations(&eco), before);
    assert_eq!(species(&eco, "Rabbit").deaths, 0);
}

#[test]
fn duplicate_names_share_deaths() {
    let mut eco = Scenario::new()
        .fauna("Fox", 3, 20)
        .fauna("Fox", 3, 5)
        .try_build()
        .unwrap();
    eco.record_death("Fox", 8).unwrap();
    let foxes: Vec<_> = eco.species().iter().map(|s| (s.population, s.deaths)).collect();
    assert_eq!(foxes, [(12, 8), (0, 8)]);
}

#[test]
fn flora_take_deaths_and_cascade_like_fauna() {
    let mut eco = Scenario::new()
        .flora("Kelp", 4, 120.0)
        .fauna("Urchin", 3, 300)
        .eats("Urchin", "Kelp")
        .try_build()
        .unwrap();
    eco.record_death("Kelp", 50).unwrap();

    let kelp = species(&eco, "Kelp");
    assert_eq!(kelp.population, 0);
    assert_eq!(kelp.deaths, 50);
    assert_eq!(kelp.biomass, 120.0);
    assert_eq!(population(&eco, "Urchin"), 290);
}
