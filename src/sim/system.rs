use super::context::SignalContext;

/// A pluggable reaction to state-change signals.
///
/// Object-safe so systems can be stored as `Box<dyn SimSystem>`.
pub trait SimSystem {
    fn name(&self) -> &str;

    /// React to the signals an intent produced, found in `ctx.inbox`.
    ///
    /// Signals pushed to `ctx.signals` here are **not** re-delivered (single-pass).
    fn handle_signals(&mut self, ctx: &mut SignalContext);
}
