//! Session lifecycle tag.

use serde::{Deserialize, Serialize};

/// Phase of a questionnaire run. Advances once, from `AwaitingInput` to `Inference`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Stage {
    #[default]
    AwaitingInput,
    Inference,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::AwaitingInput => f.write_str("awaiting-input"),
            Stage::Inference => f.write_str("inference"),
        }
    }
}
