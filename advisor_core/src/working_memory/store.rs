//! Working memory store - live facts indexed by kind.

use std::collections::{HashMap, HashSet};

use super::{Fact, FactId, FactKind, FactRecord, FactSource, Pattern};

/// Result of asserting a fact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assertion {
    /// The fact was stored under a new ID.
    Added(FactId),
    /// An identical fact was already live; nothing changed.
    Duplicate(FactId),
}

impl Assertion {
    pub fn id(&self) -> FactId {
        match self {
            Assertion::Added(id) | Assertion::Duplicate(id) => *id,
        }
    }

    pub fn is_added(&self) -> bool {
        matches!(self, Assertion::Added(_))
    }
}

/// The working memory of one run.
///
/// Every assert and retract advances a monotonic clock; each record keeps the
/// clock value it was asserted at, which is what recency ordering compares.
#[derive(Debug, Clone, Default)]
pub struct WorkingMemory {
    /// Live facts by ID.
    facts: HashMap<FactId, FactRecord>,

    /// Index: kind -> live facts of that kind.
    by_kind: HashMap<FactKind, HashSet<FactId>>,

    /// Retracted facts, kept so derivations can still be explained.
    retired: HashMap<FactId, FactRecord>,

    clock: u64,
}

impl WorkingMemory {
    /// Create an empty working memory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a fact unless an identical one is already live.
    pub fn assert(&mut self, fact: Fact, source: FactSource, supports: Vec<FactId>) -> Assertion {
        if let Some(existing) = self.find_identical(&fact) {
            return Assertion::Duplicate(existing);
        }

        self.clock += 1;
        let id = FactId::new();
        self.by_kind.entry(fact.kind()).or_default().insert(id);
        self.facts.insert(
            id,
            FactRecord {
                id,
                fact,
                source,
                supports,
                sequence: self.clock,
            },
        );
        Assertion::Added(id)
    }

    /// Remove a live fact. The record moves to the retired set.
    pub fn retract(&mut self, id: FactId) -> Option<FactRecord> {
        let record = self.facts.remove(&id)?;
        self.clock += 1;
        if let Some(ids) = self.by_kind.get_mut(&record.fact.kind()) {
            ids.remove(&id);
        }
        self.retired.insert(id, record.clone());
        Some(record)
    }

    /// Live facts matching a pattern, oldest first.
    pub fn query(&self, pattern: &Pattern) -> Vec<&FactRecord> {
        let mut matches: Vec<&FactRecord> = self
            .by_kind
            .get(&pattern.kind())
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| self.facts.get(id))
                    .filter(|record| pattern.matches(&record.fact))
                    .collect()
            })
            .unwrap_or_default();
        matches.sort_by_key(|record| record.sequence);
        matches
    }

    /// Check whether any live fact matches a pattern.
    pub fn exists(&self, pattern: &Pattern) -> bool {
        self.by_kind
            .get(&pattern.kind())
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| self.facts.get(id))
                    .any(|record| pattern.matches(&record.fact))
            })
            .unwrap_or(false)
    }

    /// Get a live fact by ID.
    pub fn get(&self, id: FactId) -> Option<&FactRecord> {
        self.facts.get(&id)
    }

    /// Get a fact by ID, including retracted ones.
    pub fn lookup(&self, id: FactId) -> Option<&FactRecord> {
        self.facts.get(&id).or_else(|| self.retired.get(&id))
    }

    /// Whether the fact was asserted and later retracted.
    pub fn is_retired(&self, id: FactId) -> bool {
        self.retired.contains_key(&id)
    }

    /// Live facts of a kind, oldest first.
    pub fn facts_of_kind(&self, kind: FactKind) -> Vec<&FactRecord> {
        let mut records: Vec<&FactRecord> = self
            .by_kind
            .get(&kind)
            .map(|ids| ids.iter().filter_map(|id| self.facts.get(id)).collect())
            .unwrap_or_default();
        records.sort_by_key(|record| record.sequence);
        records
    }

    /// All live facts in assertion order.
    pub fn records(&self) -> Vec<&FactRecord> {
        let mut records: Vec<&FactRecord> = self.facts.values().collect();
        records.sort_by_key(|record| record.sequence);
        records
    }

    /// Number of live facts.
    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    /// Current clock value.
    pub fn clock(&self) -> u64 {
        self.clock
    }

    /// Drop every fact, live and retired, and restart the clock.
    pub fn clear(&mut self) {
        self.facts.clear();
        self.by_kind.clear();
        self.retired.clear();
        self.clock = 0;
    }

    fn find_identical(&self, fact: &Fact) -> Option<FactId> {
        self.by_kind.get(&fact.kind()).and_then(|ids| {
            ids.iter()
                .copied()
                .find(|id| self.facts.get(id).is_some_and(|record| record.fact == *fact))
        })
    }
}
