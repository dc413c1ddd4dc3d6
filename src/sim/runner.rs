use tracing::trace;

use super::context::SignalContext;
use super::signal::Signal;
use super::system::SimSystem;
use crate::config::EcoConfig;
use crate::model::EcoState;

/// Deliver an intent's signals to every system, in registration order.
///
/// Delivery is **single-pass, non-cascading**: each system sees the full
/// `inbox` once and may mutate state and push follow-up signals, but those
/// follow-ups are never delivered. They are returned to the caller instead.
/// A population change made by a reaction therefore never triggers another
/// reaction within the same intent, which bounds every cascade to one hop.
pub fn dispatch_signals(
    state: &mut EcoState,
    systems: &mut [Box<dyn SimSystem>],
    config: &EcoConfig,
    inbox: &[Signal],
) -> Vec<Signal> {
    let mut follow_ups = Vec::new();
    if inbox.is_empty() {
        return follow_ups;
    }

    for system in systems.iter_mut() {
        let mut emitted = Vec::new();
        let mut ctx = SignalContext {
            state,
            config,
            signals: &mut emitted,
            inbox,
        };
        system.handle_signals(&mut ctx);
        trace!(
            system = system.name(),
            follow_ups = emitted.len(),
            "signals handled"
        );
        follow_ups.extend(emitted);
    }

    follow_ups
}
