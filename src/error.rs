use thiserror::Error;

/// Why an intent was rejected. A rejected intent never changes state.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IntentError {
    #[error("{field} cannot be blank")]
    BlankName { field: &'static str },
    #[error("unknown species: {name}")]
    UnknownSpecies { name: String },
    #[error("risk level {value} is outside 1..=5")]
    RiskLevelOutOfRange { value: u8 },
    #[error("measure must be a non-negative number, got {value}")]
    InvalidMeasure { value: f64 },
}

/// Returns `Err(BlankName)` when `value` is empty or whitespace.
pub(crate) fn require_name(value: &str, field: &'static str) -> Result<(), IntentError> {
    if value.trim().is_empty() {
        Err(IntentError::BlankName { field })
    } else {
        Ok(())
    }
}
