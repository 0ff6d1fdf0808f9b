//! Alias candidates and their confidence.

use serde::{Deserialize, Serialize};

/// How strongly a hint ties a display name to a variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Confidence {
    Low = 1,
    Medium = 2,
    High = 3,
}

/// One proposed display name for a variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasCandidate {
    pub name: String,
    pub confidence: Confidence,
}

impl AliasCandidate {
    pub fn new(name: impl Into<String>, confidence: Confidence) -> Self {
        Self {
            name: name.into(),
            confidence,
        }
    }
}

/// Insert or upgrade `name` in `list`, preserving first-seen order.
pub(crate) fn merge_candidate(list: &mut Vec<AliasCandidate>, name: &str, confidence: Confidence) {
    match list.iter_mut().find(|c| c.name == name) {
        Some(existing) => existing.confidence = existing.confidence.max(confidence),
        None => list.push(AliasCandidate::new(name, confidence)),
    }
}
