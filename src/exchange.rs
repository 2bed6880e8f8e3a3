use crate::annotations::Annotations;
use crate::correlation::PreflightFacts;
use crate::options::RewriteOptions;
use indexmap::IndexMap;
use std::fmt;

/// Identifies one request/response round trip through the proxy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExchangeId(u64);

impl ExchangeId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ExchangeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// State of a single exchange, created when its request arrives and read
/// back, unmodified in between, when its response arrives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeContext {
    id: ExchangeId,
    annotations: Annotations,
    facts: PreflightFacts,
}

impl ExchangeContext {
    pub fn new(id: ExchangeId) -> Self {
        Self {
            id,
            annotations: Annotations::new(),
            facts: PreflightFacts::default(),
        }
    }

    /// Rebuilds the context from an annotation bag alone, for hosts where the
    /// notes text is the only thing that survives between the two phases.
    pub fn from_annotations(
        id: ExchangeId,
        annotations: Annotations,
        options: &RewriteOptions,
    ) -> Self {
        let facts = PreflightFacts::read_notes(annotations.notes(), options);
        Self {
            id,
            annotations,
            facts,
        }
    }

    pub fn id(&self) -> ExchangeId {
        self.id
    }

    pub fn annotations(&self) -> &Annotations {
        &self.annotations
    }

    pub fn annotations_mut(&mut self) -> &mut Annotations {
        &mut self.annotations
    }

    pub fn facts(&self) -> PreflightFacts {
        self.facts
    }

    pub(crate) fn record(&mut self, facts: PreflightFacts, options: &RewriteOptions) {
        facts.write_notes(&mut self.annotations, options);
        self.facts.merge(facts);
    }

    pub fn into_annotations(self) -> Annotations {
        self.annotations
    }
}

/// Owns the contexts of exchanges whose response has not been seen yet.
///
/// Contexts are kept in arrival order so the oldest can be evicted when a
/// request never gets a response.
#[derive(Debug, Default)]
pub struct ExchangeArena {
    next_id: u64,
    pending: IndexMap<ExchangeId, ExchangeContext>,
}

impl ExchangeArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self) -> ExchangeId {
        self.next_id += 1;
        let id = ExchangeId(self.next_id);
        self.pending.insert(id, ExchangeContext::new(id));
        id
    }

    pub fn get(&self, id: ExchangeId) -> Option<&ExchangeContext> {
        self.pending.get(&id)
    }

    pub fn get_mut(&mut self, id: ExchangeId) -> Option<&mut ExchangeContext> {
        self.pending.get_mut(&id)
    }

    /// Removes the exchange; nothing about it outlives this call.
    pub fn finish(&mut self, id: ExchangeId) -> Option<ExchangeContext> {
        self.pending.shift_remove(&id)
    }

    /// Drops the oldest pending exchanges until at most `max` remain and
    /// returns how many were dropped.
    pub fn evict_oldest(&mut self, max: usize) -> usize {
        let excess = self.pending.len().saturating_sub(max);
        if excess > 0 {
            self.pending.drain(..excess);
        }
        excess
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
#[path = "exchange_test.rs"]
mod exchange_test;
