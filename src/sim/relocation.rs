use tracing::info;

use super::context::SignalContext;
use super::signal::{Signal, SignalKind};
use super::system::SimSystem;
use crate::model::StateChange;

/// Maintains the relocation queue from creation and birth signals.
///
/// A species enters when it is created at or below the configured risk
/// cutoff. It leaves when a birth leaves any species of that name at or above
/// the recovery threshold. Deaths are ignored and nothing re-enters.
pub struct RelocationSystem;

impl SimSystem for RelocationSystem {
    fn name(&self) -> &str {
        "relocation"
    }

    fn handle_signals(&mut self, ctx: &mut SignalContext) {
        for signal in ctx.inbox {
            match &signal.kind {
                SignalKind::SpeciesAdded {
                    species_id,
                    name,
                    risk_level,
                } => {
                    if risk_level.get() > ctx.config.relocation_risk_cutoff {
                        continue;
                    }
                    ctx.state.relocation.enqueue(name.clone());
                    ctx.state.ledger.record_effect(
                        signal.event_id,
                        Some(*species_id),
                        StateChange::RelocationQueued { name: name.clone() },
                    );
                    info!(species = %name, %risk_level, "queued for relocation");
                }
                SignalKind::Born { name, .. } => {
                    if !ctx.state.relocation.contains(name) {
                        continue;
                    }
                    let threshold = ctx.config.recovery_threshold;
                    let recovered = ctx
                        .state
                        .registry
                        .all()
                        .iter()
                        .find(|s| s.name == *name && s.population >= threshold)
                        .map(|s| s.id);
                    let Some(species_id) = recovered else {
                        continue;
                    };
                    ctx.state.relocation.remove(name);
                    ctx.state.ledger.record_effect(
                        signal.event_id,
                        Some(species_id),
                        StateChange::RelocationCleared { name: name.clone() },
                    );
                    info!(species = %name, threshold, "recovered, removed from relocation queue");
                    ctx.signals.push(Signal {
                        event_id: signal.event_id,
                        kind: SignalKind::RelocationCleared { name: name.clone() },
                    });
                }
                _ => {}
            }
        }
    }
}
