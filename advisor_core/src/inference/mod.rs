//! Inference loop - forward chaining to quiescence.
//!
//! Each cycle:
//! 1. **Match**: compute every activation of every production (the eligible set)
//! 2. **Refract**: drop activations that already fired on the same facts
//! 3. **Resolve**: pick one by tier, then the configured strategy, then declaration order
//! 4. **Fire**: intake, retractions, assertions, then output
//!
//! The loop halts when the eligible set is empty.

mod agenda;

pub use agenda::*;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, info, trace, warn};

use game_catalog::{Recommendation, Stage};

use crate::error::EngineError;
use crate::intake::AnswerIntake;
use crate::productions::{standard_rules, Effect, Production, Tier};
use crate::report::ResultReporter;
use crate::working_memory::{Fact, FactId, FactKind, FactSource, WorkingMemory};

/// Record of one production firing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Firing {
    /// 1-based cycle number.
    pub cycle: usize,
    pub production: String,
    pub tier: Tier,
    /// Facts the activation matched.
    pub matched: Vec<FactId>,
    pub asserted: Vec<FactId>,
    pub retracted: Vec<FactId>,
}

/// Outcome of a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub strategy: ConflictStrategy,
    pub firings: Vec<Firing>,
    /// `None` when no recommendation rule covered the answers.
    pub recommendation: Option<Recommendation>,
}

impl RunReport {
    /// Check whether a production fired during the run.
    pub fn fired(&self, production: &str) -> bool {
        self.firings.iter().any(|f| f.production == production)
    }

    /// Number of times a production fired.
    pub fn fire_count(&self, production: &str) -> usize {
        self.firings.iter().filter(|f| f.production == production).count()
    }
}

/// The inference engine: a production set plus the working memory it owns.
pub struct Engine {
    productions: Vec<Production>,
    memory: WorkingMemory,
    strategy: ConflictStrategy,
    fired: HashSet<(usize, Vec<Option<FactId>>)>,
    cycle: usize,
}

impl Engine {
    /// Load the standard production set with an empty working memory.
    pub fn load() -> Self {
        Self::with_productions(standard_rules())
    }

    /// Create an engine over a custom production set.
    pub fn with_productions(productions: Vec<Production>) -> Self {
        info!(productions = productions.len(), "production set loaded");
        Self {
            productions,
            memory: WorkingMemory::new(),
            strategy: ConflictStrategy::default(),
            fired: HashSet::new(),
            cycle: 0,
        }
    }

    /// Set the within-tier conflict strategy.
    pub fn with_strategy(mut self, strategy: ConflictStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn strategy(&self) -> ConflictStrategy {
        self.strategy
    }

    pub fn productions(&self) -> &[Production] {
        &self.productions
    }

    pub fn memory(&self) -> &WorkingMemory {
        &self.memory
    }

    /// Clear working memory and assert the initial stage.
    pub fn reset(&mut self) {
        self.memory.clear();
        self.fired.clear();
        self.cycle = 0;
        self.memory
            .assert(Fact::Stage(Stage::AwaitingInput), FactSource::Reset, Vec::new());
        debug!("working memory reset");
    }

    /// The current eligible set, refracted activations excluded.
    pub fn agenda(&self) -> Vec<Activation> {
        self.productions
            .iter()
            .enumerate()
            .flat_map(|(index, production)| activations_for(index, production, &self.memory))
            .filter(|activation| !self.fired.contains(&activation.refraction_key()))
            .collect()
    }

    /// The final result currently in working memory.
    pub fn final_result(&self) -> Option<Recommendation> {
        self.memory
            .facts_of_kind(FactKind::FinalResult)
            .first()
            .and_then(|record| match record.fact {
                Fact::FinalResult(result) => Some(result),
                _ => None,
            })
    }

    /// Run to quiescence.
    pub fn run<I, R>(&mut self, intake: &mut I, reporter: &mut R) -> Result<RunReport, EngineError>
    where
        I: AnswerIntake + ?Sized,
        R: ResultReporter + ?Sized,
    {
        if self.memory.facts_of_kind(FactKind::Stage).is_empty() {
            return Err(EngineError::NotReset);
        }

        info!(strategy = %self.strategy, "inference started");
        let mut firings = Vec::new();
        while let Some(firing) = self.step(intake, reporter)? {
            firings.push(firing);
        }

        let recommendation = self.final_result();
        match recommendation {
            Some(result) => info!(cycles = firings.len(), result = %result, "inference finished"),
            None => warn!(
                cycles = firings.len(),
                "quiescence reached without a final result; no recommendation rule covers these answers"
            ),
        }

        Ok(RunReport {
            strategy: self.strategy,
            firings,
            recommendation,
        })
    }

    /// Fire one production. Returns `None` at quiescence.
    pub fn step<I, R>(
        &mut self,
        intake: &mut I,
        reporter: &mut R,
    ) -> Result<Option<Firing>, EngineError>
    where
        I: AnswerIntake + ?Sized,
        R: ResultReporter + ?Sized,
    {
        let agenda = self.agenda();
        trace!(eligible = agenda.len(), "agenda computed");

        let Some(activation) = select(&agenda, self.strategy).cloned() else {
            return Ok(None);
        };

        let firing = self.fire(&activation, intake, reporter)?;
        self.fired.insert(activation.refraction_key());
        Ok(Some(firing))
    }

    fn fire<I, R>(
        &mut self,
        activation: &Activation,
        intake: &mut I,
        reporter: &mut R,
    ) -> Result<Firing, EngineError>
    where
        I: AnswerIntake + ?Sized,
        R: ResultReporter + ?Sized,
    {
        let production = &self.productions[activation.production];
        let matched = activation.bound_facts();
        let source = FactSource::Production(production.name.clone());

        // Resolve every binding before touching memory so a bad reference changes nothing.
        let mut retractions = Vec::new();
        let mut displays = Vec::new();
        for effect in &production.effects {
            match effect {
                Effect::Retract(index) => retractions.push(bound(activation, production, *index)?),
                Effect::DisplayResult(index) => displays.push(bound(activation, production, *index)?),
                _ => {}
            }
        }

        let answers = if production.effects.contains(&Effect::CollectAnswers) {
            Some(intake.collect()?)
        } else {
            None
        };

        self.cycle += 1;
        debug!(
            cycle = self.cycle,
            production = %production.name,
            salience = production.tier.salience(),
            "firing"
        );

        let mut retracted = Vec::new();
        for id in retractions {
            if self.memory.retract(id).is_some() {
                retracted.push(id);
            }
        }

        let mut asserted = Vec::new();
        if let Some(answers) = answers {
            let assertion = self
                .memory
                .assert(Fact::Answers(answers), FactSource::Intake, matched.clone());
            if assertion.is_added() {
                asserted.push(assertion.id());
            }
        }
        for effect in &production.effects {
            if let Effect::Assert(fact) = effect {
                let assertion = self.memory.assert(*fact, source.clone(), matched.clone());
                if assertion.is_added() {
                    asserted.push(assertion.id());
                }
            }
        }

        let mut displays = displays.into_iter();
        for effect in &production.effects {
            match effect {
                Effect::DisplayResult(_) => {
                    let Some(id) = displays.next() else { continue };
                    match self.memory.lookup(id).map(|record| record.fact) {
                        Some(Fact::FinalResult(result)) => reporter.display(&result),
                        other => warn!(
                            production = %production.name,
                            fact = ?other,
                            "display target is not a final result"
                        ),
                    }
                }
                Effect::Say(message) => reporter.notice(message),
                _ => {}
            }
        }

        Ok(Firing {
            cycle: self.cycle,
            production: production.name.clone(),
            tier: production.tier,
            matched,
            asserted,
            retracted,
        })
    }
}

fn bound(
    activation: &Activation,
    production: &Production,
    index: usize,
) -> Result<FactId, EngineError> {
    activation
        .bindings
        .get(index)
        .copied()
        .flatten()
        .ok_or_else(|| EngineError::MissingBinding {
            production: production.name.clone(),
            index,
        })
}
