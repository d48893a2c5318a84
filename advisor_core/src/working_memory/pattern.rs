//! Fact patterns - what a production condition matches against.

use game_catalog::{Answer, Combination, Genre, Platform, Question, Stage};
use serde::{Deserialize, Serialize};

use super::{Fact, FactKind};

/// A pattern over one fact. Unlisted fields are wildcards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pattern {
    Stage(Stage),

    /// The answers record, with one field constrained.
    Answer(Question, Answer),

    Platform(Platform),

    /// Any platform fact.
    AnyPlatform,

    NoPlatform,

    GenreAvailable(Genre),

    AdventureNotAvailable,

    Combination(Combination),

    /// Any final result, whatever its value.
    AnyFinalResult,

    ResultDisplayed,

    Finalized,
}

impl Pattern {
    /// Kind of fact this pattern can match.
    pub fn kind(&self) -> FactKind {
        match self {
            Pattern::Stage(_) => FactKind::Stage,
            Pattern::Answer(..) => FactKind::Answers,
            Pattern::Platform(_) | Pattern::AnyPlatform => FactKind::Platform,
            Pattern::NoPlatform => FactKind::NoPlatform,
            Pattern::GenreAvailable(_) => FactKind::GenreAvailable,
            Pattern::AdventureNotAvailable => FactKind::AdventureNotAvailable,
            Pattern::Combination(_) => FactKind::Combination,
            Pattern::AnyFinalResult => FactKind::FinalResult,
            Pattern::ResultDisplayed => FactKind::ResultDisplayed,
            Pattern::Finalized => FactKind::Finalized,
        }
    }

    /// Check whether a fact satisfies this pattern.
    pub fn matches(&self, fact: &Fact) -> bool {
        match (self, fact) {
            (Pattern::Stage(want), Fact::Stage(have)) => want == have,
            (Pattern::Answer(question, want), Fact::Answers(answers)) => {
                answers.get(*question) == *want
            }
            (Pattern::Platform(want), Fact::Platform(have)) => want == have,
            (Pattern::AnyPlatform, Fact::Platform(_)) => true,
            (Pattern::NoPlatform, Fact::NoPlatform) => true,
            (Pattern::GenreAvailable(want), Fact::GenreAvailable(have)) => want == have,
            (Pattern::AdventureNotAvailable, Fact::AdventureNotAvailable) => true,
            (Pattern::Combination(want), Fact::Combination(have)) => want == have,
            (Pattern::AnyFinalResult, Fact::FinalResult(_)) => true,
            (Pattern::ResultDisplayed, Fact::ResultDisplayed) => true,
            (Pattern::Finalized, Fact::Finalized) => true,
            _ => false,
        }
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Pattern::Stage(stage) => write!(f, "(stage {})", stage),
            Pattern::Answer(question, answer) => write!(f, "(answers {}={})", question, answer),
            Pattern::Platform(platform) => write!(f, "(platform {})", platform),
            Pattern::AnyPlatform => f.write_str("(platform ?)"),
            Pattern::NoPlatform => f.write_str("(no-platform)"),
            Pattern::GenreAvailable(genre) => write!(f, "(genre-available {})", genre),
            Pattern::AdventureNotAvailable => f.write_str("(adventure-not-available)"),
            Pattern::Combination(combination) => write!(f, "(combination {})", combination),
            Pattern::AnyFinalResult => f.write_str("(final-result ?)"),
            Pattern::ResultDisplayed => f.write_str("(result-displayed)"),
            Pattern::Finalized => f.write_str("(finalized)"),
        }
    }
}
