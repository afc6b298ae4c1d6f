//! Vocabulary catalog: listing, filtering and statistics over the table.

use serde::{Deserialize, Serialize};

use crate::category::VocabKind;
use crate::codec::Codec;
use crate::vocab::{Symbol, TokenId};

/// A table entry as shown in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabEntry {
    pub id: TokenId,
    pub symbol: Symbol,
    pub kind: VocabKind,
}

impl VocabEntry {
    pub fn label(&self) -> String {
        self.symbol.label()
    }

    /// Case-insensitive match on the label, or substring match on the id.
    fn matches_search(&self, term: &str) -> bool {
        self.label().to_lowercase().contains(&term.to_lowercase())
            || self.id.to_string().contains(term)
    }
}

/// Catalog filter. Empty fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VocabQuery {
    pub kind: Option<VocabKind>,
    pub search: Option<String>,
}

impl VocabQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_kind(mut self, kind: VocabKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    fn accepts(&self, entry: &VocabEntry) -> bool {
        if let Some(kind) = self.kind {
            if entry.kind != kind {
                return false;
            }
        }
        match self.search.as_deref() {
            Some(term) if !term.is_empty() => entry.matches_search(term),
            _ => true,
        }
    }
}

/// Per-kind entry counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabStats {
    pub total: usize,
    pub special: usize,
    pub lowercase: usize,
    pub uppercase: usize,
    pub numbers: usize,
    pub punctuation: usize,
    pub space: usize,
    pub other: usize,
}

impl VocabStats {
    /// Count for a single kind.
    pub fn count(&self, kind: VocabKind) -> usize {
        match kind {
            VocabKind::Special => self.special,
            VocabKind::Space => self.space,
            VocabKind::Punctuation => self.punctuation,
            VocabKind::Number => self.numbers,
            VocabKind::Lowercase => self.lowercase,
            VocabKind::Uppercase => self.uppercase,
            VocabKind::Other => self.other,
        }
    }
}

/// Snapshot of every table entry, in id order.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<VocabEntry>,
}

impl Catalog {
    pub fn new(codec: &Codec) -> Self {
        let entries = codec
            .symbols()
            .map(|(id, symbol)| VocabEntry {
                id,
                symbol,
                kind: VocabKind::of(symbol),
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[VocabEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries accepted by `query`, sorted by id.
    pub fn filter(&self, query: &VocabQuery) -> Vec<VocabEntry> {
        let mut matched: Vec<VocabEntry> = self
            .entries
            .iter()
            .filter(|entry| query.accepts(entry))
            .cloned()
            .collect();
        matched.sort_by_key(|entry| entry.id);
        matched
    }

    pub fn stats(&self) -> VocabStats {
        let mut stats = VocabStats {
            total: self.entries.len(),
            ..VocabStats::default()
        };
        for entry in &self.entries {
            match entry.kind {
                VocabKind::Special => stats.special += 1,
                VocabKind::Space => stats.space += 1,
                VocabKind::Punctuation => stats.punctuation += 1,
                VocabKind::Number => stats.numbers += 1,
                VocabKind::Lowercase => stats.lowercase += 1,
                VocabKind::Uppercase => stats.uppercase += 1,
                VocabKind::Other => stats.other += 1,
            }
        }
        stats
    }
}
