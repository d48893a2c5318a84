//! Fact definitions - records held in working memory.

use game_catalog::{Combination, Genre, Platform, Recommendation, Stage, UserAnswers};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a fact instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FactId(pub Uuid);

impl FactId {
    /// Create a new random fact ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for FactId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for FactId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Content of a fact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Fact {
    /// Session phase. Exactly one is live at a time.
    Stage(Stage),

    /// The completed questionnaire.
    Answers(UserAnswers),

    /// The platform the recommendation targets.
    Platform(Platform),

    /// The user owns neither a PC nor a console.
    NoPlatform,

    /// A genre the user can be offered.
    GenreAvailable(Genre),

    /// The user likes adventure games but has no online access.
    AdventureNotAvailable,

    /// A genre available on the chosen platform.
    Combination(Combination),

    /// The single recommendation of the run.
    FinalResult(Recommendation),

    ResultDisplayed,

    Finalized,
}

impl Fact {
    /// Kind of this fact, used for indexing.
    pub fn kind(&self) -> FactKind {
        match self {
            Fact::Stage(_) => FactKind::Stage,
            Fact::Answers(_) => FactKind::Answers,
            Fact::Platform(_) => FactKind::Platform,
            Fact::NoPlatform => FactKind::NoPlatform,
            Fact::GenreAvailable(_) => FactKind::GenreAvailable,
            Fact::AdventureNotAvailable => FactKind::AdventureNotAvailable,
            Fact::Combination(_) => FactKind::Combination,
            Fact::FinalResult(_) => FactKind::FinalResult,
            Fact::ResultDisplayed => FactKind::ResultDisplayed,
            Fact::Finalized => FactKind::Finalized,
        }
    }
}

impl std::fmt::Display for Fact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Fact::Stage(stage) => write!(f, "stage {}", stage),
            Fact::Answers(answers) => write!(f, "answers {}", answers),
            Fact::Platform(platform) => write!(f, "platform {}", platform),
            Fact::NoPlatform => f.write_str("no platform"),
            Fact::GenreAvailable(genre) => write!(f, "genre available {}", genre),
            Fact::AdventureNotAvailable => f.write_str("adventure not available"),
            Fact::Combination(combination) => write!(f, "combination {}", combination),
            Fact::FinalResult(result) => write!(f, "final result {}", result),
            Fact::ResultDisplayed => f.write_str("result displayed"),
            Fact::Finalized => f.write_str("finalized"),
        }
    }
}

/// Fact kinds, one per `Fact` variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FactKind {
    Stage,
    Answers,
    Platform,
    NoPlatform,
    GenreAvailable,
    AdventureNotAvailable,
    Combination,
    FinalResult,
    ResultDisplayed,
    Finalized,
}

/// Where a fact came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FactSource {
    /// Asserted when working memory was reset.
    Reset,
    /// Returned by answer intake.
    Intake,
    /// Asserted by the named production.
    Production(String),
}

impl std::fmt::Display for FactSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FactSource::Reset => f.write_str("reset"),
            FactSource::Intake => f.write_str("user"),
            FactSource::Production(name) => write!(f, "production {}", name),
        }
    }
}

/// A fact instance together with its provenance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactRecord {
    pub id: FactId,

    pub fact: Fact,

    pub source: FactSource,

    /// Facts the asserting production matched on.
    pub supports: Vec<FactId>,

    /// Store clock value at assertion; higher is more recent.
    pub sequence: u64,
}
