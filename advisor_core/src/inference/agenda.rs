//! Agenda - the eligible set and the conflict-resolution policy.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

use crate::error::ConfigError;
use crate::productions::{Condition, Production, Tier};
use crate::working_memory::{FactId, WorkingMemory};

/// Ordering applied within a tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConflictStrategy {
    /// Most recently asserted matched fact first.
    #[default]
    Recency,
    /// Declaration order only.
    Order,
    /// Most conditions first.
    Specificity,
}

impl ConflictStrategy {
    pub fn as_str(self) -> &'static str {
        match self {
            ConflictStrategy::Recency => "recency",
            ConflictStrategy::Order => "order",
            ConflictStrategy::Specificity => "specificity",
        }
    }
}

impl FromStr for ConflictStrategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "recency" => Ok(ConflictStrategy::Recency),
            "order" => Ok(ConflictStrategy::Order),
            "specificity" => Ok(ConflictStrategy::Specificity),
            other => Err(ConfigError::UnknownStrategy(other.to_string())),
        }
    }
}

impl std::fmt::Display for ConflictStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A production whose conditions hold, with the facts it matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activation {
    /// Index of the production in declaration order.
    pub production: usize,

    pub tier: Tier,

    /// One entry per condition; `None` for absence conditions.
    pub bindings: Vec<Option<FactId>>,

    /// Highest sequence number among the bound facts.
    pub recency: u64,

    pub specificity: usize,
}

impl Activation {
    /// Distinct bound facts, in condition order.
    pub fn bound_facts(&self) -> Vec<FactId> {
        let mut facts: Vec<FactId> = Vec::new();
        for id in self.bindings.iter().flatten() {
            if !facts.contains(id) {
                facts.push(*id);
            }
        }
        facts
    }

    /// Key used to refuse a second firing on the same match.
    pub fn refraction_key(&self) -> (usize, Vec<Option<FactId>>) {
        (self.production, self.bindings.clone())
    }

    /// Compare two activations; `Greater` means `self` fires first.
    pub fn precedence(&self, other: &Activation, strategy: ConflictStrategy) -> Ordering {
        let within_tier = match strategy {
            ConflictStrategy::Recency => self.recency.cmp(&other.recency),
            ConflictStrategy::Order => Ordering::Equal,
            ConflictStrategy::Specificity => self.specificity.cmp(&other.specificity),
        };

        self.tier
            .cmp(&other.tier)
            .then(within_tier)
            .then_with(|| other.production.cmp(&self.production))
            .then_with(|| self.recency.cmp(&other.recency))
    }
}

/// Compute every activation of one production against working memory.
pub fn activations_for(
    index: usize,
    production: &Production,
    memory: &WorkingMemory,
) -> Vec<Activation> {
    let mut candidates: Vec<Vec<Option<FactId>>> = Vec::with_capacity(production.conditions.len());

    for condition in &production.conditions {
        match condition {
            Condition::Match(pattern) => {
                let ids: Vec<Option<FactId>> =
                    memory.query(pattern).iter().map(|r| Some(r.id)).collect();
                if ids.is_empty() {
                    return Vec::new();
                }
                candidates.push(ids);
            }
            Condition::AnyOf(patterns) => {
                let mut ids: Vec<Option<FactId>> = Vec::new();
                for pattern in patterns {
                    for record in memory.query(pattern) {
                        if !ids.contains(&Some(record.id)) {
                            ids.push(Some(record.id));
                        }
                    }
                }
                if ids.is_empty() {
                    return Vec::new();
                }
                candidates.push(ids);
            }
            Condition::Absent(pattern) => {
                if memory.exists(pattern) {
                    return Vec::new();
                }
                candidates.push(vec![None]);
            }
        }
    }

    cartesian(&candidates)
        .into_iter()
        .map(|bindings| {
            let recency = bindings
                .iter()
                .flatten()
                .filter_map(|id| memory.get(*id))
                .map(|record| record.sequence)
                .max()
                .unwrap_or(0);
            Activation {
                production: index,
                tier: production.tier,
                bindings,
                recency,
                specificity: production.specificity(),
            }
        })
        .collect()
}

fn cartesian(lists: &[Vec<Option<FactId>>]) -> Vec<Vec<Option<FactId>>> {
    lists.iter().fold(vec![Vec::new()], |acc, list| {
        acc.iter()
            .flat_map(|prefix| {
                list.iter().map(move |id| {
                    let mut row = prefix.clone();
                    row.push(*id);
                    row
                })
            })
            .collect()
    })
}

/// Pick the activation that fires next.
pub fn select(activations: &[Activation], strategy: ConflictStrategy) -> Option<&Activation> {
    activations.iter().fold(None, |best, candidate| match best {
        Some(current) if current.precedence(candidate, strategy) != Ordering::Less => Some(current),
        _ => Some(candidate),
    })
}
