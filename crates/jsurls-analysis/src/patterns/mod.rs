//! URL, path and filename shape predicates.
//!
//! These decide whether a string is worth emitting at all. They look at
//! shape only; junk filtering happens later in `filters`.

mod extensions;

use once_cell::sync::Lazy;
use regex::Regex;
use rustc_hash::FxHashSet;

pub use extensions::KNOWN_EXTENSIONS;

static SCHEME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z][a-zA-Z0-9+.-]*://").unwrap());

static HOST_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^(www\.|api\.|cdn\.)").unwrap());

static IPV4: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{1,3}(\.\d{1,3}){3}(:\d+)?(/|$)").unwrap());

static DOMAIN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9-]+\.[a-zA-Z0-9-]+\.[a-zA-Z]{2,}").unwrap());

static DOMAIN_WITH_PATH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9-]+\.[a-zA-Z0-9-]+/").unwrap());

static ABSOLUTE_PATH: Lazy<Regex> = Lazy::new(|| Regex::new(r"^/[a-zA-Z0-9_-]{2,}").unwrap());

static RELATIVE_PATH: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\.\.?/").unwrap());

static SEGMENT_PATH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z][a-zA-Z0-9_-]*/[a-zA-Z0-9]").unwrap());

static FILENAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+(?:\.[A-Za-z0-9_-]+)*\.([A-Za-z0-9]+)$").unwrap());

/// Shape predicates, carrying the run's extra filename extensions.
#[derive(Debug, Clone, Default)]
pub struct PatternMatcher {
    custom_extensions: FxHashSet<String>,
}

impl PatternMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a matcher recognising `extensions` in addition to the built-in set.
    ///
    /// Entries may carry a leading dot, any case, or several comma-separated tokens.
    pub fn with_extensions<S: AsRef<str>>(extensions: &[S]) -> Self {
        let custom_extensions = extensions
            .iter()
            .flat_map(|entry| entry.as_ref().split(','))
            .map(normalize_extension)
            .filter(|ext| !ext.is_empty())
            .collect();
        Self { custom_extensions }
    }

    /// Absolute URL, protocol-relative URL, or host-looking prefix.
    pub fn is_url(&self, text: &str) -> bool {
        SCHEME.is_match(text)
            || text.starts_with("//")
            || HOST_PREFIX.is_match(text)
            || IPV4.is_match(text)
            || DOMAIN.is_match(text)
            || DOMAIN_WITH_PATH.is_match(text)
    }

    /// Absolute, relative or segment path, or a bare filename.
    pub fn is_path(&self, text: &str) -> bool {
        if text.starts_with("//") {
            return false;
        }
        ABSOLUTE_PATH.is_match(text)
            || RELATIVE_PATH.is_match(text)
            || SEGMENT_PATH.is_match(text)
            || self.is_filename(text)
    }

    pub fn is_url_or_path(&self, text: &str) -> bool {
        self.is_url(text) || self.is_path(text)
    }

    /// `name(.part)*.ext` with a recognised extension.
    pub fn is_filename(&self, text: &str) -> bool {
        let Some(caps) = FILENAME.captures(text) else {
            return false;
        };
        let ext = caps[1].to_ascii_lowercase();
        KNOWN_EXTENSIONS.contains(&ext.as_str()) || self.custom_extensions.contains(&ext)
    }
}

fn normalize_extension(ext: &str) -> String {
    ext.trim().trim_start_matches('.').to_ascii_lowercase()
}
