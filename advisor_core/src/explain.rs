//! Explanation component - renders how a fact came to be in working memory.

use crate::working_memory::{FactId, FactKind, FactSource, WorkingMemory};

/// Builds derivation trees from fact provenance.
pub struct Explainer<'a> {
    memory: &'a WorkingMemory,
}

impl<'a> Explainer<'a> {
    pub fn new(memory: &'a WorkingMemory) -> Self {
        Self { memory }
    }

    /// Explain a fact, recursing into the facts it was derived from.
    ///
    /// Returns `None` for an ID the memory has never held.
    pub fn explain(&self, id: FactId) -> Option<String> {
        self.memory.lookup(id)?;
        let mut lines = Vec::new();
        self.build(id, 0, &mut lines);
        Some(lines.join("\n"))
    }

    /// Explain the final result, if one was asserted.
    pub fn explain_final_result(&self) -> Option<String> {
        let record = self.memory.facts_of_kind(FactKind::FinalResult).into_iter().next()?;
        self.explain(record.id)
    }

    fn build(&self, id: FactId, depth: usize, lines: &mut Vec<String>) {
        let indent = "  ".repeat(depth);
        let Some(record) = self.memory.lookup(id) else {
            lines.push(format!("{}- unknown fact {}", indent, id));
            return;
        };

        let retired = if self.memory.is_retired(id) { " (since retracted)" } else { "" };
        match &record.source {
            FactSource::Reset => {
                lines.push(format!("{}- '{}' is an initial fact{}", indent, record.fact, retired));
            }
            FactSource::Intake => {
                lines.push(format!("{}- '{}' was answered by the user{}", indent, record.fact, retired));
            }
            FactSource::Production(name) => {
                lines.push(format!(
                    "{}- '{}' was derived by {}{}",
                    indent, record.fact, name, retired
                ));
            }
        }

        if matches!(record.source, FactSource::Intake) || record.supports.is_empty() {
            return;
        }

        lines.push(format!("{}  because:", indent));
        for support in &record.supports {
            self.build(*support, depth + 2, lines);
        }
    }
}
