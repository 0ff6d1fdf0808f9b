//! Ordered, deduplicated collection of candidate entries.

use jsurls_core::types::CandidateEntry;
use rustc_hash::FxHashSet;

/// Entries in discovery order, unique by `(original, placeholder, resolved)`.
#[derive(Debug, Default)]
pub struct CandidateList {
    entries: Vec<CandidateEntry>,
    seen: FxHashSet<(String, String, String)>,
}

impl CandidateList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `entry` unless an entry with the same key is already present.
    pub fn push(&mut self, entry: CandidateEntry) -> bool {
        let (original, placeholder, resolved) = entry.key();
        let key = (original.to_string(), placeholder.to_string(), resolved.to_string());
        if !self.seen.insert(key) {
            return false;
        }
        self.entries.push(entry);
        true
    }

    pub fn extend<I: IntoIterator<Item = CandidateEntry>>(&mut self, entries: I) {
        for entry in entries {
            self.push(entry);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn as_slice(&self) -> &[CandidateEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<CandidateEntry> {
        self.entries
    }
}
