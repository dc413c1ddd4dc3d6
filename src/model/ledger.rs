use std::collections::BTreeMap;

use super::effect::{EventEffect, StateChange};
use super::event::{Event, EventKind};
use super::species::SpeciesId;
use crate::id::IdGenerator;

/// Append-only record of accepted intents and the state changes each caused.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    pub events: BTreeMap<u64, Event>,
    pub effects: Vec<EventEffect>,
    pub id_gen: IdGenerator,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an event, assigning it a unique ID. Returns the assigned ID.
    pub fn add_event(
        &mut self,
        kind: EventKind,
        subject: &str,
        count: Option<u64>,
        description: String,
    ) -> u64 {
        let id = self.id_gen.next_id();
        self.events.insert(
            id,
            Event {
                id,
                kind,
                subject: subject.to_string(),
                count,
                description,
            },
        );
        id
    }

    pub fn record_effect(
        &mut self,
        event_id: u64,
        species_id: Option<SpeciesId>,
        effect: StateChange,
    ) {
        debug_assert!(
            self.events.contains_key(&event_id),
            "record_effect: event {event_id} not found"
        );
        self.effects.push(EventEffect {
            event_id,
            species_id,
            effect,
        });
    }

    /// Effects caused by one event, in the order they were applied.
    pub fn effects_of(&self, event_id: u64) -> impl Iterator<Item = &EventEffect> {
        self.effects.iter().filter(move |e| e.event_id == event_id)
    }

    pub fn last_event(&self) -> Option<&Event> {
        self.events.values().next_back()
    }
}
