//! Collision policy between external context and values found in the file.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// How context values and file values combine for the same name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContextPolicy {
    /// Context and file values are both kept, file values appended.
    #[default]
    Merge,
    /// Context wins; the file value for a context name is discarded.
    Override,
    /// Only context values are used; the first pass is skipped.
    Only,
}

impl ContextPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Merge => "merge",
            Self::Override => "override",
            Self::Only => "only",
        }
    }

    /// `only` never inspects the file for symbol values.
    pub fn skips_pass1(&self) -> bool {
        matches!(self, Self::Only)
    }

    /// Whether a value found in the file may be recorded for `name`.
    pub fn uses_file_value(&self, in_context: bool) -> bool {
        match self {
            Self::Merge => true,
            Self::Override => !in_context,
            Self::Only => false,
        }
    }
}

impl fmt::Display for ContextPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContextPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "merge" => Ok(Self::Merge),
            "override" => Ok(Self::Override),
            "only" => Ok(Self::Only),
            other => Err(ConfigError::InvalidValue {
                field: "context_policy".to_string(),
                message: format!(
                    "Invalid context policy '{other}', expected one of: merge, override, only"
                ),
            }),
        }
    }
}
