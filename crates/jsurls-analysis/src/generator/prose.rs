//! Prose and error-message detection.

use jsurls_core::types::CandidateEntry;
use once_cell::sync::Lazy;
use regex::Regex;

static PROSE_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"https?://[^\s<>"'{}|\\^`\[\])]+"#).unwrap());

static EMBEDDED_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"https?://[^\s<>"{}|\\^`\[\]]+"#).unwrap());

const PROSE_INDICATORS: &[&str] = &[
    "has been deprecated",
    "must be one of",
    "called on incompatible",
    "please change",
    "this means",
    "will never render",
    "in favor of",
    "for the full message",
    "minified",
    "invariant",
    "warning:",
    "error:",
];

const URL_STARTS: &[&str] = &["http://", "https://", "/", "./", "../"];

/// Whether `text` reads like a sentence or error message rather than a URL.
/// Markup is never prose.
pub fn is_prose(text: &str) -> bool {
    if text.contains('<') && text.contains('>') {
        return false;
    }
    let lower = text.to_lowercase();
    if PROSE_INDICATORS.iter().any(|i| lower.contains(i)) {
        return true;
    }
    if text.matches(' ').count() >= 4 && !URL_STARTS.iter().any(|s| text.starts_with(s)) {
        return true;
    }
    text.contains("useRoutes()")
}

/// Full URLs embedded in prose, or `None` when `text` is not prose.
///
/// Paths are not taken from prose; they are usually fragments of a URL
/// already reported or words like `RFC2822/ISO`.
pub fn prose_urls(text: &str, placeholder: &str) -> Option<Vec<CandidateEntry>> {
    if !is_prose(text) {
        return None;
    }
    let urls = PROSE_URL
        .find_iter(text)
        .map(|m| m.as_str().trim_end_matches(['.', ',', ';', ':']))
        .filter(|url| url.chars().count() > 10)
        .map(|url| {
            let mut entry = CandidateEntry::literal(url);
            entry.has_template = url.contains(placeholder);
            entry
        })
        .collect();
    Some(urls)
}

/// Static entries for every `http(s)://` URL inside `text`.
pub fn embedded_urls(text: &str) -> Vec<CandidateEntry> {
    EMBEDDED_URL
        .find_iter(text)
        .map(|m| CandidateEntry::literal(m.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indicators() {
        assert!(is_prose("componentWillMount has been deprecated"));
        assert!(is_prose("Warning: something odd"));
        assert!(is_prose("see the docs for more on this"));
        assert!(!is_prose("/api/v1/users"));
        assert!(!is_prose("<a href='/x'> link text goes in here </a>"));
    }

    #[test]
    fn test_prose_keeps_only_full_urls() {
        let urls = prose_urls(
            "Minified React error #31; visit https://reactjs.org/docs/error-decoder.html?invariant=31 for the full message.",
            "FUZZ",
        )
        .unwrap();
        assert_eq!(urls.len(), 1);
        assert_eq!(
            urls[0].original,
            "https://reactjs.org/docs/error-decoder.html?invariant=31"
        );
        assert!(prose_urls("/just/a/path", "FUZZ").is_none());
        assert_eq!(prose_urls("this means nothing at /x/y", "FUZZ"), Some(vec![]));
    }

    #[test]
    fn test_embedded_urls() {
        let found = embedded_urls("mirror: https://a.example.com/x and http://b.example.com");
        let found: Vec<_> = found.into_iter().map(|e| e.original).collect();
        assert_eq!(found, vec!["https://a.example.com/x", "http://b.example.com"]);
    }
}
