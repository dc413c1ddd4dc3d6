//! Intent scripts: one JSON intent per line.
//!
//! ```text
//! # comments and blank lines are skipped
//! {"type":"add_species","name":"Fox","risk_level":2,"is_fauna":true,"measure":20}
//! {"type":"add_relation","predator":"Fox","prey":"Rabbit"}
//! {"type":"record_death","name":"Rabbit","count":10}
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A discrete request from the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Intent {
    AddSpecies {
        name: String,
        risk_level: u8,
        is_fauna: bool,
        /// Head count for fauna, tons for flora.
        measure: f64,
    },
    AddRelation {
        predator: String,
        prey: String,
    },
    RecordDeath {
        name: String,
        count: u64,
    },
    RecordBirth {
        name: String,
        count: u64,
    },
    RunWhatIf {
        name: String,
        deaths: u64,
    },
}

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("failed to read script: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: {source}")]
    Malformed {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Parse a script. Blank lines and lines starting with `#` are skipped.
pub fn parse_script(text: &str) -> Result<Vec<Intent>, ScriptError> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(line, text)| {
            serde_json::from_str(text).map_err(|source| ScriptError::Malformed { line, source })
        })
        .collect()
}

pub fn load_script(path: &Path) -> Result<Vec<Intent>, ScriptError> {
    let text = fs::read_to_string(path)?;
    parse_script(&text)
}

/// Render intents back into script form.
pub fn to_script(intents: &[Intent]) -> Result<String, serde_json::Error> {
    let mut out = String::new();
    for intent in intents {
        out.push_str(&serde_json::to_string(intent)?);
        out.push('\n');
    }
    Ok(out)
}
