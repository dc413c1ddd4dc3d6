use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use crate::config::EcoConfig;
use crate::ecosystem::Ecosystem;
use crate::error::IntentError;
use crate::script::Intent;

/// Builder for ecosystems in tests and demos.
///
/// Steps are recorded as intents and applied in order on [`build`](Self::build),
/// so a scenario replays through exactly the same path as live input.
#[derive(Debug, Clone, Default)]
pub struct Scenario {
    config: EcoConfig,
    intents: Vec<Intent>,
}

impl Scenario {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EcoConfig) -> Self {
        Self {
            config,
            intents: Vec::new(),
        }
    }

    pub fn fauna(self, name: &str, risk_level: u8, population: u64) -> Self {
        self.push(Intent::AddSpecies {
            name: name.to_string(),
            risk_level,
            is_fauna: true,
            measure: population as f64,
        })
    }

    pub fn flora(self, name: &str, risk_level: u8, biomass: f64) -> Self {
        self.push(Intent::AddSpecies {
            name: name.to_string(),
            risk_level,
            is_fauna: false,
            measure: biomass,
        })
    }

    /// `predator` eats `prey`.
    pub fn eats(self, predator: &str, prey: &str) -> Self {
        self.push(Intent::AddRelation {
            predator: predator.to_string(),
            prey: prey.to_string(),
        })
    }

    pub fn deaths(self, name: &str, count: u64) -> Self {
        self.push(Intent::RecordDeath {
            name: name.to_string(),
            count,
        })
    }

    pub fn births(self, name: &str, count: u64) -> Self {
        self.push(Intent::RecordBirth {
            name: name.to_string(),
            count,
        })
    }

    /// Escape hatch: append an arbitrary intent.
    pub fn push(mut self, intent: Intent) -> Self {
        self.intents.push(intent);
        self
    }

    pub fn intents(&self) -> &[Intent] {
        &self.intents
    }

    /// Apply every step, stopping at the first rejected one.
    pub fn try_build(self) -> Result<Ecosystem, IntentError> {
        let mut eco = Ecosystem::with_config(self.config);
        for intent in &self.intents {
            eco.apply(intent)?;
        }
        Ok(eco)
    }

    /// Apply every step, skipping rejected ones.
    pub fn build(self) -> Ecosystem {
        let mut eco = Ecosystem::with_config(self.config);
        eco.replay(&self.intents);
        eco
    }
}

const SPECIES_NAMES: [&str; 8] = [
    "Wolf", "Elk", "Hare", "Lynx", "Vole", "Owl", "Sedge", "Willow",
];

/// A deterministic stream of `count` intents drawn from a small name pool.
///
/// The same seed always yields the same stream. Streams deliberately include
/// blank names and intents against species that do not exist yet.
pub fn random_intents(seed: u64, count: usize) -> Vec<Intent> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut intents = Vec::with_capacity(count);
    for _ in 0..count {
        let name = pick_name(&mut rng);
        let intent = match rng.random_range(0..10) {
            0..=1 => Intent::AddSpecies {
                name,
                risk_level: rng.random_range(1..=5),
                is_fauna: rng.random_bool(0.8),
                measure: f64::from(rng.random_range(0..200u32)),
            },
            2..=3 => Intent::AddRelation {
                predator: name,
                prey: pick_name(&mut rng),
            },
            4..=6 => Intent::RecordDeath {
                name,
                count: rng.random_range(0..40),
            },
            7..=8 => Intent::RecordBirth {
                name,
                count: rng.random_range(0..40),
            },
            _ => Intent::RunWhatIf {
                name,
                deaths: rng.random_range(0..40),
            },
        };
        intents.push(intent);
    }
    intents
}

fn pick_name(rng: &mut SmallRng) -> String {
    if rng.random_bool(0.05) {
        return String::new();
    }
    SPECIES_NAMES
        .choose(rng)
        .map_or_else(String::new, |name| name.to_string())
}
