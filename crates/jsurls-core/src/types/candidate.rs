//! Candidate entries produced by the second pass.

use serde::{Deserialize, Serialize};

/// One discovered string occurrence with its three renderings.
///
/// `original` uses `{name}` notation for unresolved parts, `placeholder`
/// substitutes known values and the run's placeholder token for the rest,
/// and `resolved` is only present when it differs from `placeholder`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CandidateEntry {
    pub original: String,
    pub placeholder: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved: Option<String>,
    pub has_template: bool,
}

impl CandidateEntry {
    /// A literal occurrence: all three renderings are the same text.
    pub fn literal(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            original: text.clone(),
            placeholder: text,
            resolved: None,
            has_template: false,
        }
    }

    /// A templated occurrence. `resolved` is dropped when it equals `placeholder`.
    pub fn templated(
        original: impl Into<String>,
        placeholder: impl Into<String>,
        resolved: Option<String>,
    ) -> Self {
        let placeholder = placeholder.into();
        let resolved = resolved.filter(|r| !r.is_empty() && *r != placeholder);
        Self {
            original: original.into(),
            placeholder,
            resolved,
            has_template: true,
        }
    }

    /// Deduplication key: `(original, placeholder, resolved)`.
    pub fn key(&self) -> (&str, &str, &str) {
        (
            &self.original,
            &self.placeholder,
            self.resolved.as_deref().unwrap_or(""),
        )
    }

    /// Best concrete rendering: the resolved value if any, else the placeholder form.
    pub fn concrete(&self) -> &str {
        self.resolved.as_deref().unwrap_or(&self.placeholder)
    }
}
