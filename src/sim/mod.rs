mod cascade;
mod context;
mod relocation;
mod runner;
mod signal;
mod system;
pub mod what_if;

pub use cascade::CascadeSystem;
pub use context::SignalContext;
pub use relocation::RelocationSystem;
pub use runner::dispatch_signals;
pub use signal::{Signal, SignalKind};
pub use system::SimSystem;
pub use what_if::{impact_reach, simulate};
