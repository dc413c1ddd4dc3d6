use super::signal::Signal;
use crate::config::EcoConfig;
use crate::model::EcoState;

/// Context passed to each system when signals are delivered.
pub struct SignalContext<'a> {
    pub state: &'a mut EcoState,
    pub config: &'a EcoConfig,
    /// Systems push follow-up signals here. They are collected but not delivered.
    pub signals: &'a mut Vec<Signal>,
    /// Signals produced by the intent being applied (read-only).
    pub inbox: &'a [Signal],
}
