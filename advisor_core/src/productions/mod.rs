//! Productions - condition/action rules evaluated by the inference loop.

mod rule_set;

pub use rule_set::*;

use serde::{Deserialize, Serialize};

use crate::working_memory::{Fact, Pattern};

/// Priority tier of a production. Higher tiers always fire first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Derivations with no declared priority.
    Default,
    Terminate,
    Report,
    Derivation,
    Setup,
}

impl Tier {
    /// Numeric salience of the tier.
    pub fn salience(self) -> i32 {
        match self {
            Tier::Default => 0,
            Tier::Terminate => 1,
            Tier::Report => 5,
            Tier::Derivation => 10,
            Tier::Setup => 100,
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.salience())
    }
}

/// One condition of a production. Conditions are ANDed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    /// A live fact must match.
    Match(Pattern),
    /// A live fact must match at least one of the patterns.
    AnyOf(Vec<Pattern>),
    /// No live fact may match.
    Absent(Pattern),
}

impl Condition {
    /// Whether the condition binds a fact when satisfied.
    pub fn is_positive(&self) -> bool {
        !matches!(self, Condition::Absent(_))
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Condition::Match(pattern) => write!(f, "{}", pattern),
            Condition::AnyOf(patterns) => {
                let parts: Vec<String> = patterns.iter().map(|p| p.to_string()).collect();
                write!(f, "(or {})", parts.join(" "))
            }
            Condition::Absent(pattern) => write!(f, "(not {})", pattern),
        }
    }
}

/// What a production does when it fires.
///
/// A firing applies effects in phases regardless of declaration order:
/// intake first, then retractions, then assertions, then output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Run answer intake and assert the returned answers.
    CollectAnswers,
    /// Retract the fact bound by the condition at this index.
    Retract(usize),
    Assert(Fact),
    /// Hand the final result bound by the condition at this index to the reporter.
    DisplayResult(usize),
    /// Emit a message through the reporter.
    Say(String),
}

/// A named production rule.
#[derive(Debug, Clone)]
pub struct Production {
    pub name: String,
    pub tier: Tier,
    pub conditions: Vec<Condition>,
    pub effects: Vec<Effect>,
}

impl Production {
    /// Create a production with no conditions and no effects.
    pub fn new(name: impl Into<String>, tier: Tier) -> Self {
        Self {
            name: name.into(),
            tier,
            conditions: Vec::new(),
            effects: Vec::new(),
        }
    }

    /// Require a fact matching the pattern.
    pub fn when(mut self, pattern: Pattern) -> Self {
        self.conditions.push(Condition::Match(pattern));
        self
    }

    /// Require a fact matching any of the patterns.
    pub fn when_any(mut self, patterns: impl IntoIterator<Item = Pattern>) -> Self {
        self.conditions.push(Condition::AnyOf(patterns.into_iter().collect()));
        self
    }

    /// Require that no fact matches the pattern.
    pub fn unless(mut self, pattern: Pattern) -> Self {
        self.conditions.push(Condition::Absent(pattern));
        self
    }

    /// Add an effect.
    pub fn then(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    pub fn then_assert(self, fact: Fact) -> Self {
        self.then(Effect::Assert(fact))
    }

    pub fn then_say(self, message: impl Into<String>) -> Self {
        self.then(Effect::Say(message.into()))
    }

    /// Number of conditions, used by specificity ordering.
    pub fn specificity(&self) -> usize {
        self.conditions.len()
    }
}

impl std::fmt::Display for Production {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let conditions: Vec<String> = self.conditions.iter().map(|c| c.to_string()).collect();
        write!(
            f,
            "{} [salience {}] {}",
            self.name,
            self.tier,
            conditions.join(" ")
        )
    }
}
