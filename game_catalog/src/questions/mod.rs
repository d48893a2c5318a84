//! The questionnaire: ten yes/no questions asked in a fixed order.

mod answers;

pub use answers::*;

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// One question of the questionnaire.
///
/// The declaration order is the order in which questions are asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Question {
    HasPc,
    HasPlaystation,
    HasXbox,
    LikesAction,
    LikesRpg,
    LikesStrategy,
    LikesSimulators,
    LikesAdventure,
    HasOnline,
    ShortSessions,
}

impl Question {
    /// Every question, in asking order.
    pub const ALL: [Question; 10] = [
        Question::HasPc,
        Question::HasPlaystation,
        Question::HasXbox,
        Question::LikesAction,
        Question::LikesRpg,
        Question::LikesStrategy,
        Question::LikesSimulators,
        Question::LikesAdventure,
        Question::HasOnline,
        Question::ShortSessions,
    ];

    /// Position of this question in the asking order.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Text shown to the user.
    pub fn prompt(self) -> &'static str {
        match self {
            Question::HasPc => "Do you have a PC?",
            Question::HasPlaystation => "Do you have a PlayStation?",
            Question::HasXbox => "Do you have an Xbox?",
            Question::LikesAction => "Do you like action games?",
            Question::LikesRpg => "Do you like RPGs?",
            Question::LikesStrategy => "Do you like strategy games?",
            Question::LikesSimulators => "Do you like simulators?",
            Question::LikesAdventure => "Do you like adventure games?",
            Question::HasOnline => "Do you have access to online play?",
            Question::ShortSessions => "Do you prefer short play sessions?",
        }
    }

    /// Stable kebab-case key used in fact listings.
    pub fn key(self) -> &'static str {
        match self {
            Question::HasPc => "has-pc",
            Question::HasPlaystation => "has-playstation",
            Question::HasXbox => "has-xbox",
            Question::LikesAction => "likes-action",
            Question::LikesRpg => "likes-rpg",
            Question::LikesStrategy => "likes-strategy",
            Question::LikesSimulators => "likes-simulators",
            Question::LikesAdventure => "likes-adventure",
            Question::HasOnline => "has-online",
            Question::ShortSessions => "short-sessions",
        }
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Tri-state answer to a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Answer {
    Yes,
    No,
    #[default]
    Unset,
}

impl Answer {
    /// Whether the answer carries a value.
    pub fn is_set(self) -> bool {
        !matches!(self, Answer::Unset)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Answer::Yes => "yes",
            Answer::No => "no",
            Answer::Unset => "unset",
        }
    }
}

impl From<bool> for Answer {
    fn from(value: bool) -> Self {
        if value {
            Answer::Yes
        } else {
            Answer::No
        }
    }
}

impl std::fmt::Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input that is neither `yes` nor `no`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected 'yes' or 'no', got '{0}'")]
pub struct ParseAnswerError(pub String);

impl FromStr for Answer {
    type Err = ParseAnswerError;

    /// Exact match only: `Yes` or `y` are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "yes" => Ok(Answer::Yes),
            "no" => Ok(Answer::No),
            other => Err(ParseAnswerError(other.to_string())),
        }
    }
}
