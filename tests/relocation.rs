mod common;

use common::{fox_and_rabbit, population};
use ecotrack::EcoConfig;
use ecotrack::model::{EventKind, StateChange};
use ecotrack::scenario::Scenario;

#[test]
fn queue_keeps_insertion_order() {
    let eco = Scenario::new()
        .fauna("Vole", 2, 10)
        .fauna("Hare", 3, 10)
        .fauna("Lynx", 1, 10)
        .flora("Orchid", 1, 0.5)
        .build();
    assert_eq!(eco.relocation_queue(), ["Vole", "Lynx", "Orchid"]);
}

#[test]
fn deaths_never_clear_the_queue() {
    let mut eco = Scenario::new().fauna("Lynx", 1, 500).build();
    eco.record_death("Lynx", 10).unwrap();
    assert_eq!(population(&eco, "Lynx"), 490);
    assert_eq!(eco.relocation_queue(), ["Lynx"]);
}

#[test]
fn cascade_gains_do_not_clear_the_queue() {
    let mut eco = Scenario::new()
        .fauna("Vole", 2, 45)
        .fauna("Owl", 3, 10)
        .eats("Owl", "Vole")
        .build();
    eco.record_death("Owl", 100).unwrap();
    assert_eq!(population(&eco, "Vole"), 55);
    assert_eq!(eco.relocation_queue(), ["Vole"]);

    // The next birth, even of zero, sees the recovered population.
    eco.record_birth("Vole", 0).unwrap();
    assert!(eco.relocation_queue().is_empty());
}

#[test]
fn no_reentry_after_recovery() {
    let mut eco = fox_and_rabbit();
    eco.record_birth("Fox", 30).unwrap();
    assert!(eco.relocation_queue().is_empty());

    eco.record_death("Fox", 50).unwrap();
    eco.record_birth("Fox", 1).unwrap();
    assert_eq!(population(&eco, "Fox"), 1);
    assert!(eco.relocation_queue().is_empty());
}

#[test]
fn low_risk_species_never_queued() {
    let mut eco = Scenario::new().fauna("Deer", 4, 2).build();
    eco.record_death("Deer", 2).unwrap();
    eco.record_birth("Deer", 100).unwrap();
    assert!(eco.relocation_queue().is_empty());
}

#[test]
fn cutoff_and_threshold_follow_config() {
    let config = EcoConfig {
        relocation_risk_cutoff: 3,
        recovery_threshold: 100,
        ..EcoConfig::default()
    };
    let mut eco = Scenario::with_config(config)
        .fauna("Hare", 3, 10)
        .build();
    assert_eq!(eco.relocation_queue(), ["Hare"]);
    eco.record_birth("Hare", 60).unwrap();
    assert_eq!(eco.relocation_queue(), ["Hare"]);
    eco.record_birth("Hare", 30).unwrap();
    assert!(eco.relocation_queue().is_empty());
}

#[test]
fn queue_transitions_are_in_the_ledger() {
    let mut eco = fox_and_rabbit();
    eco.record_birth("Fox", 35).unwrap();

    let ledger = eco.ledger();
    let queued: Vec<_> = ledger
        .effects
        .iter()
        .filter(|e| matches!(e.effect, StateChange::RelocationQueued { .. }))
        .collect();
    assert_eq!(queued.len(), 1);
    assert_eq!(ledger.events[&queued[0].event_id].kind, EventKind::SpeciesAdded);

    let birth = ledger.last_event().unwrap();
    assert_eq!(birth.kind, EventKind::Birth);
    assert!(ledger.effects_of(birth.id).any(|e| e.effect
        == StateChange::RelocationCleared {
            name: "Fox".to_string()
        }));
}
