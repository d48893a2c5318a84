//! Advisor configuration, read from an optional TOML file.

use std::path::Path;

use game_catalog::Answer;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::inference::ConflictStrategy;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisorConfig {
    pub engine: EngineSettings,
    pub intake: Vocabulary,
    pub report: ReportSettings,
}

impl AdvisorConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.intake.yes.is_empty() {
            return Err(ConfigError::EmptyVocabulary("yes"));
        }
        if self.intake.no.is_empty() {
            return Err(ConfigError::EmptyVocabulary("no"));
        }
        Ok(())
    }
}

/// Inference loop settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    pub strategy: ConflictStrategy,
}

/// Accepted spellings for each answer. Matching is exact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vocabulary {
    pub yes: Vec<String>,
    pub no: Vec<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            yes: vec!["yes".to_string()],
            no: vec!["no".to_string()],
        }
    }
}

impl Vocabulary {
    /// Map input to an answer, or `None` if it is not in the vocabulary.
    pub fn parse(&self, input: &str) -> Option<Answer> {
        if self.yes.iter().any(|word| word == input) {
            Some(Answer::Yes)
        } else if self.no.iter().any(|word| word == input) {
            Some(Answer::No)
        } else {
            None
        }
    }
}

/// Output settings for the binary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    /// Print the derivation chain of the final result.
    pub explain: bool,
    /// Print the final working memory.
    pub show_facts: bool,
}
