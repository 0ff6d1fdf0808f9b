//! Ordered junk rules.
//!
//! Each rule is a named predicate; the first rule that fires rejects the
//! string. Order matters only for which rule is reported, never for the
//! verdict, but the table is kept in evaluation order so the cheap exact
//! checks run first.

use once_cell::sync::Lazy;
use regex::Regex;

use super::mime::MIME_TYPES;
use crate::patterns::PatternMatcher;

static MIME_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(application|text|image|audio|video|font|multipart)/").unwrap()
});

static STANDALONE_SCHEME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z][a-zA-Z0-9+.-]*://?$").unwrap());

static PROPERTY_CHAIN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^[a-z]+\.[a-z]+\.[a-z.]+$").unwrap());

static SINGLE_PARAM_PATH: Lazy<Regex> = Lazy::new(|| Regex::new(r"^/\{[^}]+\}$").unwrap());

const YEAR: &str = r"(yyyy|yy|\{yyyy\}|\{yy\})";
const MONTH: &str = r"(mm|m|\{mm\}|\{m\})";
const DAY: &str = r"(dd|d|\{dd\}|\{d\})";

static DATE_FORMAT_PATHS: Lazy<[Regex; 3]> = Lazy::new(|| {
    let path = |a: &str, b: &str, c: &str| {
        Regex::new(&format!(r"(?i)^/+{a}[/-]{b}[/-]{c}/?$")).unwrap()
    };
    [
        path(YEAR, MONTH, DAY),
        path(DAY, MONTH, YEAR),
        path(MONTH, DAY, YEAR),
    ]
});

static TIME_FORMAT_PATH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^/+(hh|h|\{hh\}|\{h\}):(mm|m|\{mm\}|\{m\})(:(ss|s|\{ss\}|\{s\}))?/?$",
    )
    .unwrap()
});

static TIMEZONE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(Africa|America|Antarctica|Arctic|Asia|Atlantic|Australia|Europe|Indian|Pacific|Etc|US|Canada|Mexico|Brazil|Chile)/[A-Za-z0-9_+-]+(/[A-Za-z0-9_+-]+)?(\|.+)?$",
    )
    .unwrap()
});

static DATE_FORMAT_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(yyyy|yy|mm|m|dd|d)[/\-](yyyy|yy|mm|m|dd|d)[/\-](yyyy|yy|mm|m|dd|d)$")
        .unwrap()
});

static BACKREFERENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$\d").unwrap());

static ALPHANUMERIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-zA-Z0-9]").unwrap());

static STDLIB_ACCESS: Lazy<[Regex; 4]> = Lazy::new(|| {
    [
        Regex::new(
            r"^(Function|Object|Array|String|Number|Boolean|Symbol|Map|Set|WeakMap|WeakSet|Promise|Proxy|Reflect)\.",
        )
        .unwrap(),
        Regex::new(r"^(moment|Immutable|Redux|React|Vue|Angular)\.").unwrap(),
        Regex::new(r"\.prototype\.").unwrap(),
        Regex::new(r"\.(bind|call|apply|toString|valueOf)\s*$").unwrap(),
    ]
});

const CSS_UNITS: &str =
    "px|em|rem|%|vh|vw|vmin|vmax|ch|ex|pt|pc|in|cm|mm|deg|rad|turn|s|ms";

/// One named junk predicate.
pub struct JunkRule {
    pub name: &'static str,
    pub check: fn(&JunkFilter, &str) -> bool,
}

/// Junk rules in evaluation order.
pub static JUNK_RULES: &[JunkRule] = &[
    JunkRule { name: "empty", check: |_, t| t.is_empty() },
    JunkRule { name: "mime_type", check: |_, t| is_listed_mime(t) },
    JunkRule { name: "mime_prefix", check: |_, t| MIME_PREFIX.is_match(t) },
    JunkRule {
        name: "bare_protocol",
        check: |_, t| matches!(t, "http://" | "https://" | "//" | "https:" | "http:"),
    },
    JunkRule { name: "standalone_scheme", check: |_, t| STANDALONE_SCHEME.is_match(t) },
    JunkRule { name: "scheme_placeholder_only", check: |f, t| f.is_scheme_placeholder(t) },
    JunkRule { name: "property_chain", check: |f, t| f.is_property_chain(t) },
    JunkRule { name: "w3c_namespace", check: |_, t| t.starts_with("http://www.w3.org/") },
    JunkRule { name: "single_param_path", check: |_, t| SINGLE_PARAM_PATH.is_match(t) },
    JunkRule {
        name: "test_url",
        check: |_, t| matches!(t, "http://localhost" | "http://a" | "http://test/path"),
    },
    JunkRule { name: "generic_path", check: |f, t| f.is_generic_path(t) },
    JunkRule { name: "placeholder_segments", check: |f, t| matches_opt(&f.segments_only, t) },
    JunkRule {
        name: "date_format_path",
        check: |_, t| DATE_FORMAT_PATHS.iter().any(|re| re.is_match(t)),
    },
    JunkRule { name: "time_format_path", check: |_, t| TIME_FORMAT_PATH.is_match(t) },
    JunkRule { name: "timezone", check: |_, t| TIMEZONE.is_match(t) },
    JunkRule { name: "date_format_token", check: |_, t| DATE_FORMAT_TOKEN.is_match(t) },
    JunkRule { name: "query_only", check: |_, t| t == "/?" },
    JunkRule { name: "regex_backreference", check: |_, t| BACKREFERENCE.is_match(t) },
    JunkRule { name: "css_unit", check: |f, t| matches_opt(&f.css_unit, t) },
    JunkRule { name: "symbols_only", check: |f, t| f.is_symbols_only(t) },
    JunkRule {
        name: "stdlib_access",
        check: |_, t| STDLIB_ACCESS.iter().any(|re| re.is_match(t)),
    },
    JunkRule { name: "unclosed_tail", check: |_, t| t.trim_end().ends_with(['\'', '"', '(']) },
    JunkRule { name: "interior_quotes", check: |_, t| has_interior_quotes(t) },
];

/// Junk predicate for one run: the placeholder-dependent rules are compiled
/// once per placeholder, the filename check uses the run's extension set.
#[derive(Debug, Clone)]
pub struct JunkFilter {
    placeholder: String,
    patterns: PatternMatcher,
    segments_only: Option<Regex>,
    css_unit: Option<Regex>,
}

impl JunkFilter {
    pub fn new(placeholder: &str, patterns: PatternMatcher) -> Self {
        let escaped = regex::escape(placeholder);
        Self {
            placeholder: placeholder.to_string(),
            patterns,
            segments_only: Regex::new(&format!("^{escaped}(/{escaped})+$")).ok(),
            css_unit: Regex::new(&format!("^{escaped}({CSS_UNITS})$")).ok(),
        }
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn patterns(&self) -> &PatternMatcher {
        &self.patterns
    }

    /// Whether `text` is not a URL or path worth reporting.
    pub fn is_junk(&self, text: &str) -> bool {
        self.matching_rule(text).is_some()
    }

    /// Name of the first rule rejecting `text`.
    pub fn matching_rule(&self, text: &str) -> Option<&'static str> {
        JUNK_RULES
            .iter()
            .find(|rule| (rule.check)(self, text))
            .map(|rule| rule.name)
    }

    fn is_scheme_placeholder(&self, text: &str) -> bool {
        ["https://", "http://"].iter().any(|scheme| {
            text.strip_prefix(scheme)
                .map(|rest| rest.strip_suffix('/').unwrap_or(rest) == self.placeholder)
                .unwrap_or(false)
        })
    }

    fn is_property_chain(&self, text: &str) -> bool {
        !text.contains('/') && PROPERTY_CHAIN.is_match(text) && !self.patterns.is_filename(text)
    }

    fn is_generic_path(&self, text: &str) -> bool {
        text == "./"
            || text.strip_prefix('/') == Some(self.placeholder.as_str())
            || text.strip_prefix("//") == Some(self.placeholder.as_str())
    }

    fn is_symbols_only(&self, text: &str) -> bool {
        let stripped = text.replace(&self.placeholder, "");
        !stripped.is_empty() && !ALPHANUMERIC.is_match(&stripped)
    }
}

fn is_listed_mime(text: &str) -> bool {
    let base = text.split(';').next().unwrap_or(text);
    let base = base.split(',').next().unwrap_or(base).trim();
    MIME_TYPES.iter().any(|m| *m == base)
}

/// Quotes strictly inside the string, on text that does not start like a
/// URL, path, or template.
fn has_interior_quotes(text: &str) -> bool {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= 3 {
        return false;
    }
    let inner = &chars[1..chars.len() - 1];
    if !inner.iter().any(|c| *c == '\'' || *c == '"') {
        return false;
    }
    !["http://", "https://", "/", "./", "../", "{"]
        .iter()
        .any(|prefix| text.starts_with(prefix))
}

fn matches_opt(re: &Option<Regex>, text: &str) -> bool {
    re.as_ref().is_some_and(|re| re.is_match(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter() -> JunkFilter {
        JunkFilter::new("FUZZ", PatternMatcher::new())
    }

    fn rule(text: &str) -> Option<&'static str> {
        filter().matching_rule(text)
    }

    #[test]
    fn test_mime_types() {
        assert_eq!(rule("application/json"), Some("mime_prefix"));
        assert_eq!(rule("text/html; charset=utf-8"), Some("mime_prefix"));
        assert_eq!(rule("x-shader/x-vertex"), Some("mime_type"));
    }

    #[test]
    fn test_protocol_fast_paths() {
        assert_eq!(rule("https://"), Some("bare_protocol"));
        assert_eq!(rule("file://"), Some("standalone_scheme"));
        assert_eq!(rule("https://FUZZ/"), Some("scheme_placeholder_only"));
        assert!(!filter().is_junk("https://{domain}"));
    }

    #[test]
    fn test_property_chain_spares_filenames() {
        assert_eq!(rule("action.target.name"), Some("property_chain"));
        assert!(!filter().is_junk("jquery.min.js"));
    }

    #[test]
    fn test_placeholder_shapes() {
        assert_eq!(rule("/{t}"), Some("single_param_path"));
        assert_eq!(rule("/FUZZ"), Some("generic_path"));
        assert_eq!(rule("FUZZ/FUZZ/FUZZ"), Some("placeholder_segments"));
        assert_eq!(rule("FUZZpx"), Some("css_unit"));
        assert_eq!(rule("/*FUZZ*FUZZ"), Some("symbols_only"));
    }

    #[test]
    fn test_date_time_and_timezones() {
        assert_eq!(rule("/yyyy/mm/dd/"), Some("date_format_path"));
        assert_eq!(rule("/{dd}-{MM}-{yyyy}"), Some("date_format_path"));
        assert_eq!(rule("/HH:mm:ss"), Some("time_format_path"));
        assert_eq!(rule("America/Argentina/Buenos_Aires"), Some("timezone"));
        assert_eq!(rule("Africa/Abidjan|LMT GMT|g.8 0|01"), Some("timezone"));
        assert_eq!(rule("MM/DD/YYYY"), Some("date_format_token"));
    }

    #[test]
    fn test_artifacts() {
        assert_eq!(rule("/?"), Some("query_only"));
        assert_eq!(rule("$1/$2"), Some("regex_backreference"));
        assert_eq!(rule("Promise.resolve(url)"), Some("stdlib_access"));
        assert_eq!(rule("Object.prototype.hasOwnProperty"), Some("property_chain"));
        assert_eq!(rule("/api/users/'"), Some("unclosed_tail"));
        assert_eq!(rule("can't load it/x"), Some("interior_quotes"));
    }

    #[test]
    fn test_real_urls_pass() {
        let f = filter();
        for url in [
            "https://api.example.com/users",
            "/api/v2/users",
            "/users/FUZZ",
            "./assets/logo.png",
            "/users/{id}",
        ] {
            assert!(!f.is_junk(url), "{url} flagged by {:?}", f.matching_rule(url));
        }
    }

    #[test]
    fn test_custom_placeholder_rules() {
        let f = JunkFilter::new("X.Y", PatternMatcher::new());
        assert!(f.is_junk("X.Y/X.Y"));
        assert!(!f.is_junk("XAY/XBY"));
    }
}
