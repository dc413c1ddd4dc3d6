use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::EcoConfig;
use crate::error::{IntentError, require_name};
use crate::model::{
    Adjacency, Alert, ChangeReason, DependencyReach, EcoState, EventKind, FoodChainRelation,
    Ledger, Measure, RiskLevel, SimulationResult, Species, SpeciesId, StateChange,
};
use crate::script::Intent;
use crate::sim::{
    CascadeSystem, RelocationSystem, Signal, SignalKind, SimSystem, dispatch_signals,
    impact_reach, simulate,
};
use crate::views::{self, RiskReportRow};

/// The single writer over species, relations, and the relocation queue.
///
/// Every intent runs to completion, including the cascade and queue updates
/// it triggers, before the call returns. A rejected intent leaves state
/// exactly as it was.
pub struct Ecosystem {
    state: EcoState,
    config: EcoConfig,
    systems: Vec<Box<dyn SimSystem>>,
    last_what_if: Option<Vec<SimulationResult>>,
}

/// Outcome of replaying a batch of intents.
#[derive(Debug, Default, PartialEq)]
pub struct ReplaySummary {
    pub applied: usize,
    /// Zero-based intent index and why it was rejected.
    pub rejected: Vec<(usize, IntentError)>,
}

/// Everything the presentation layer reads back for display.
#[derive(Debug, Clone, Serialize)]
pub struct EcosystemSnapshot {
    pub species: Vec<Species>,
    pub relations: Vec<FoodChainRelation>,
    pub relocation_queue: Vec<String>,
    pub adjacency: BTreeMap<String, Adjacency>,
    /// `None` until a what-if has run.
    pub last_what_if: Option<Vec<SimulationResult>>,
}

impl Default for Ecosystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Ecosystem {
    pub fn new() -> Self {
        Self::with_config(EcoConfig::default())
    }

    pub fn with_config(config: EcoConfig) -> Self {
        Self {
            state: EcoState::new(),
            config,
            systems: vec![Box::new(CascadeSystem), Box::new(RelocationSystem)],
            last_what_if: None,
        }
    }

    // -- Intents --

    /// Create a species. Returns its ID.
    pub fn add_species(
        &mut self,
        name: &str,
        risk_level: u8,
        measure: Measure,
    ) -> Result<SpeciesId, IntentError> {
        let (risk_level, measure) = validate_species(name, risk_level, measure)
            .inspect_err(|err| warn!(species = name, %err, "add_species rejected"))?;

        let event_id = self.state.ledger.add_event(
            EventKind::SpeciesAdded,
            name,
            None,
            format!("{name} added at risk level {risk_level}"),
        );
        let species_id = self.state.ledger.id_gen.next_id();
        let species = self
            .state
            .registry
            .insert(species_id, name.to_string(), risk_level, measure);
        debug!(species = name, id = species_id, ?measure, "species added");
        warn_on_alert(species, &self.config);

        self.state.ledger.record_effect(
            event_id,
            Some(species_id),
            StateChange::SpeciesCreated {
                name: name.to_string(),
                risk_level,
            },
        );
        self.dispatch(Signal {
            event_id,
            kind: SignalKind::SpeciesAdded {
                species_id,
                name: name.to_string(),
                risk_level,
            },
        });
        Ok(species_id)
    }

    /// Record a predator → prey relation. Neither name has to be registered.
    pub fn add_relation(&mut self, predator: &str, prey: &str) -> Result<(), IntentError> {
        require_name(predator, "predator")
            .and_then(|()| require_name(prey, "prey"))
            .inspect_err(|err| warn!(predator, prey, %err, "add_relation rejected"))?;

        let event_id = self.state.ledger.add_event(
            EventKind::RelationAdded,
            predator,
            None,
            format!("{predator} preys on {prey}"),
        );
        self.state
            .food_chain
            .push(FoodChainRelation::new(predator, prey));
        self.state.ledger.record_effect(
            event_id,
            None,
            StateChange::RelationAdded {
                predator: predator.to_string(),
                prey: prey.to_string(),
            },
        );
        debug!(predator, prey, "relation added");
        Ok(())
    }

    /// Record `count` deaths against every species named `name`, then cascade.
    pub fn record_death(&mut self, name: &str, count: u64) -> Result<(), IntentError> {
        self.require_known(name)
            .inspect_err(|err| warn!(species = name, count, %err, "record_death rejected"))?;

        let event_id = self.state.ledger.add_event(
            EventKind::Death,
            name,
            Some(count),
            format!("{count} {name} died"),
        );
        self.apply_to_matching(event_id, name, ChangeReason::Death, |s| {
            s.apply_deaths(count)
        });
        self.dispatch(Signal {
            event_id,
            kind: SignalKind::Died {
                name: name.to_string(),
                count,
            },
        });
        Ok(())
    }

    /// Record `count` births against every species named `name`. Births never cascade.
    pub fn record_birth(&mut self, name: &str, count: u64) -> Result<(), IntentError> {
        self.require_known(name)
            .inspect_err(|err| warn!(species = name, count, %err, "record_birth rejected"))?;

        let event_id = self.state.ledger.add_event(
            EventKind::Birth,
            name,
            Some(count),
            format!("{count} {name} born"),
        );
        self.apply_to_matching(event_id, name, ChangeReason::Birth, |s| {
            s.apply_births(count)
        });
        self.dispatch(Signal {
            event_id,
            kind: SignalKind::Born {
                name: name.to_string(),
                count,
            },
        });
        Ok(())
    }

    /// Project the cascade of a hypothetical death and keep it as the last result.
    ///
    /// Never touches the registry, the relations, or the relocation queue.
    pub fn run_what_if(&mut self, name: &str, deaths: u64) -> &[SimulationResult] {
        let results = simulate(&self.state.food_chain, &self.config, name, deaths);
        debug!(species = name, deaths, affected = results.len(), "what-if projected");
        self.last_what_if.insert(results)
    }

    /// Apply one intent.
    pub fn apply(&mut self, intent: &Intent) -> Result<(), IntentError> {
        match intent {
            Intent::AddSpecies {
                name,
                risk_level,
                is_fauna,
                measure,
            } => {
                let measure = require_name(name, "species name")
                    .and_then(|()| Measure::from_parts(*is_fauna, *measure))
                    .inspect_err(|err| warn!(species = %name, %err, "add_species rejected"))?;
                self.add_species(name, *risk_level, measure).map(|_| ())
            }
            Intent::AddRelation { predator, prey } => self.add_relation(predator, prey),
            Intent::RecordDeath { name, count } => self.record_death(name, *count),
            Intent::RecordBirth { name, count } => self.record_birth(name, *count),
            Intent::RunWhatIf { name, deaths } => {
                self.run_what_if(name, *deaths);
                Ok(())
            }
        }
    }

    /// Apply intents in order. Rejected intents are skipped and collected.
    pub fn replay<'a>(&mut self, intents: impl IntoIterator<Item = &'a Intent>) -> ReplaySummary {
        let mut summary = ReplaySummary::default();
        for (index, intent) in intents.into_iter().enumerate() {
            match self.apply(intent) {
                Ok(()) => summary.applied += 1,
                Err(err) => summary.rejected.push((index, err)),
            }
        }
        info!(
            applied = summary.applied,
            rejected = summary.rejected.len(),
            "replay finished"
        );
        summary
    }

    // -- Queries --

    pub fn species(&self) -> &[Species] {
        self.state.registry.all()
    }

    pub fn species_by_name(&self, name: &str) -> Option<&Species> {
        self.state.registry.by_name(name)
    }

    pub fn relations(&self) -> &[FoodChainRelation] {
        self.state.food_chain.relations()
    }

    pub fn predators_of(&self, name: &str) -> Vec<String> {
        self.state.food_chain.predators_of(name)
    }

    pub fn prey_of(&self, name: &str) -> Vec<String> {
        self.state.food_chain.prey_of(name)
    }

    pub fn adjacency(&self) -> BTreeMap<String, Adjacency> {
        self.state.food_chain.adjacency(&self.state.registry)
    }

    pub fn relocation_queue(&self) -> &[String] {
        self.state.relocation.names()
    }

    /// `None` until [`run_what_if`](Self::run_what_if) has been called.
    pub fn last_what_if(&self) -> Option<&[SimulationResult]> {
        self.last_what_if.as_deref()
    }

    pub fn sorted_by_risk(&self) -> Vec<&Species> {
        views::sorted_by_risk(&self.state.registry)
    }

    pub fn risk_report(&self) -> Vec<RiskReportRow> {
        views::risk_report(&self.state.registry, &self.config)
    }

    pub fn alert_for(&self, species: &Species) -> Option<Alert> {
        Alert::classify(species, &self.config)
    }

    pub fn impact_reach(&self, name: &str) -> Vec<DependencyReach> {
        impact_reach(&self.state.food_chain, &self.state.registry, name)
    }

    pub fn ledger(&self) -> &Ledger {
        &self.state.ledger
    }

    pub fn config(&self) -> &EcoConfig {
        &self.config
    }

    pub fn snapshot(&self) -> EcosystemSnapshot {
        EcosystemSnapshot {
            species: self.species().to_vec(),
            relations: self.relations().to_vec(),
            relocation_queue: self.relocation_queue().to_vec(),
            adjacency: self.adjacency(),
            last_what_if: self.last_what_if.clone(),
        }
    }

    // -- Internals --

    fn require_known(&self, name: &str) -> Result<(), IntentError> {
        require_name(name, "species name")?;
        if self.state.registry.contains(name) {
            Ok(())
        } else {
            Err(IntentError::UnknownSpecies {
                name: name.to_string(),
            })
        }
    }

    fn apply_to_matching(
        &mut self,
        event_id: u64,
        name: &str,
        reason: ChangeReason,
        mut change: impl FnMut(&mut Species),
    ) {
        let state = &mut self.state;
        for species in state.registry.matching_mut(name) {
            let old = species.population;
            change(species);
            let new = species.population;
            debug!(species = name, id = species.id, old, new, %reason, "population recorded");
            if reason == ChangeReason::Death {
                warn_on_alert(species, &self.config);
            }
            state.ledger.record_effect(
                event_id,
                Some(species.id),
                StateChange::PopulationChanged { old, new, reason },
            );
        }
    }

    fn dispatch(&mut self, signal: Signal) {
        let follow_ups = dispatch_signals(
            &mut self.state,
            &mut self.systems,
            &self.config,
            std::slice::from_ref(&signal),
        );
        for follow_up in &follow_ups {
            debug!(event_id = follow_up.event_id, kind = ?follow_up.kind, "follow-up settled");
        }
    }
}

fn validate_species(
    name: &str,
    risk_level: u8,
    measure: Measure,
) -> Result<(RiskLevel, Measure), IntentError> {
    require_name(name, "species name")?;
    Ok((RiskLevel::new(risk_level)?, measure.validate()?))
}

fn warn_on_alert(species: &Species, config: &EcoConfig) {
    match Alert::classify(species, config) {
        Some(Alert::Extinct) => warn!(species = %species.name, "species has gone extinct"),
        Some(Alert::Critical) => warn!(
            species = %species.name,
            population = species.population,
            "population is critically low"
        ),
        Some(Alert::HighlyEndangered) => {
            warn!(species = %species.name, "species is highly endangered")
        }
        None => {}
    }
}
