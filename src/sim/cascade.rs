use tracing::debug;

use super::context::SignalContext;
use super::signal::{Signal, SignalKind};
use super::system::SimSystem;
use crate::model::{ChangeReason, EcoState, StateChange};

/// Propagates a death one hop along the food chain.
///
/// Predators of the dead species lose `predator_penalty(count)` (floored at
/// zero); then its prey gain `prey_bonus(count)`. A species that is both a
/// predator and a prey of the dead species takes the penalty first, then the
/// bonus. Registry species are matched by name, once each, however many
/// relations name them.
pub struct CascadeSystem;

impl SimSystem for CascadeSystem {
    fn name(&self) -> &str {
        "cascade"
    }

    fn handle_signals(&mut self, ctx: &mut SignalContext) {
        for signal in ctx.inbox {
            let SignalKind::Died { name, count } = &signal.kind else {
                continue;
            };

            let predators = ctx.state.food_chain.predators_of(name);
            let prey = ctx.state.food_chain.prey_of(name);
            let penalty = ctx.config.predator_penalty(*count);
            let bonus = ctx.config.prey_bonus(*count);

            adjust_matching(
                ctx.state,
                ctx.signals,
                signal.event_id,
                &predators,
                ChangeReason::LostFoodSource,
                |population| population.saturating_sub(penalty),
            );
            adjust_matching(
                ctx.state,
                ctx.signals,
                signal.event_id,
                &prey,
                ChangeReason::ReducedPredation,
                |population| population.saturating_add(bonus),
            );
        }
    }
}

fn adjust_matching(
    state: &mut EcoState,
    signals: &mut Vec<Signal>,
    event_id: u64,
    names: &[String],
    reason: ChangeReason,
    adjust: impl Fn(u64) -> u64,
) {
    if names.is_empty() {
        return;
    }
    for species in state.registry.iter_mut() {
        if !names.contains(&species.name) {
            continue;
        }
        let old = species.population;
        let new = adjust(old);
        if new == old {
            continue;
        }
        species.population = new;
        debug!(species = %species.name, old, new, %reason, "cascade adjusted population");
        state.ledger.record_effect(
            event_id,
            Some(species.id),
            StateChange::PopulationChanged { old, new, reason },
        );
        signals.push(Signal {
            event_id,
            kind: SignalKind::PopulationAdjusted {
                species_id: species.id,
                old,
                new,
                reason,
            },
        });
    }
}
