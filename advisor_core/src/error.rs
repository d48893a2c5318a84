//! Error types for the advisor engine.

use std::path::PathBuf;

use thiserror::Error;

/// Failures while collecting answers.
#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("failed to read answer: {0}")]
    Io(#[from] std::io::Error),

    #[error("input closed before '{0}' was answered")]
    InputClosed(String),
}

/// Failures while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("unknown conflict strategy '{0}' (expected recency, order or specificity)")]
    UnknownStrategy(String),

    #[error("answer vocabulary for '{0}' is empty")]
    EmptyVocabulary(&'static str),
}

/// Failures of the inference loop.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("working memory has no stage fact; reset the engine before running")]
    NotReset,

    #[error(transparent)]
    Intake(#[from] IntakeError),

    #[error("production '{production}' refers to condition {index}, which binds no fact")]
    MissingBinding { production: String, index: usize },
}
