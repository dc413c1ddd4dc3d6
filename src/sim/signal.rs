use crate::model::{ChangeReason, RiskLevel, SpeciesId};

/// A change notification produced by an intent and consumed by systems.
/// Carries the ledger event that caused it so follow-up effects link back.
#[derive(Debug, Clone, PartialEq)]
pub struct Signal {
    /// The event that triggered this signal.
    pub event_id: u64,
    /// What happened.
    pub kind: SignalKind,
}

/// `PopulationAdjusted` and `RelocationCleared` are only ever follow-ups.
/// Dispatch returns them without delivering them, so they report what a
/// system did to whoever called `dispatch_signals`.
#[derive(Debug, Clone, PartialEq)]
pub enum SignalKind {
    /// A species record was created.
    SpeciesAdded {
        species_id: SpeciesId,
        name: String,
        risk_level: RiskLevel,
    },

    /// Deaths were recorded against every species named `name`.
    Died { name: String, count: u64 },

    /// Births were recorded against every species named `name`.
    Born { name: String, count: u64 },

    /// A system adjusted a population in reaction to another signal.
    /// Emitted during reaction, so it is never delivered.
    PopulationAdjusted {
        species_id: SpeciesId,
        old: u64,
        new: u64,
        reason: ChangeReason,
    },

    /// A species name left the relocation queue.
    RelocationCleared { name: String },
}
