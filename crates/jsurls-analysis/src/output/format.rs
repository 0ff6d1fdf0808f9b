//! Final rendering of candidate entries into the output list.

use jsurls_core::types::CandidateEntry;
use rustc_hash::FxHashSet;

use crate::filters::{clean_trailing_sentence_punctuation, clean_unbalanced_brackets, JunkFilter};

/// Render `entries` into the ordered, deduplicated output list.
///
/// Without templates, templated entries contribute only their placeholder
/// rendering and only once every `{...}` marker is gone. With templates,
/// both renderings are emitted.
pub fn format_output(
    entries: &[CandidateEntry],
    include_templates: bool,
    junk: &JunkFilter,
) -> Vec<String> {
    let placeholder = junk.placeholder();
    let mut output = OutputList::default();

    for entry in entries {
        if entry.placeholder == placeholder && entry.resolved.is_none() {
            continue;
        }

        if !entry.has_template {
            let text = if include_templates {
                entry.placeholder.as_str()
            } else {
                entry.concrete()
            };
            output.push(clean(text), junk);
            continue;
        }

        let rendered = clean(&entry.placeholder);
        if include_templates {
            let original = clean(&entry.original);
            output.push(original, junk);
            if rendered != original {
                output.push(rendered, junk);
            }
        } else if !rendered.contains('{') {
            output.push(rendered, junk);
        }
    }

    output.items
}

fn clean(text: &str) -> &str {
    clean_trailing_sentence_punctuation(clean_unbalanced_brackets(text))
}

#[derive(Default)]
struct OutputList {
    items: Vec<String>,
    seen: FxHashSet<String>,
}

impl OutputList {
    fn push(&mut self, text: &str, junk: &JunkFilter) {
        if text.is_empty() || junk.is_junk(text) || self.seen.contains(text) {
            return;
        }
        self.seen.insert(text.to_string());
        self.items.push(text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::PatternMatcher;

    fn junk() -> JunkFilter {
        JunkFilter::new("FUZZ", PatternMatcher::new())
    }

    fn templated() -> CandidateEntry {
        CandidateEntry::templated("/users/{id}", "/users/FUZZ", None)
    }

    #[test]
    fn test_static_entries_once() {
        let entries = vec![
            CandidateEntry::literal("/api/v1/users"),
            CandidateEntry::literal("/api/v1/users"),
        ];
        assert_eq!(format_output(&entries, false, &junk()), vec!["/api/v1/users"]);
        assert_eq!(format_output(&entries, true, &junk()), vec!["/api/v1/users"]);
    }

    #[test]
    fn test_templates_off_emits_placeholder_form() {
        assert_eq!(format_output(&[templated()], false, &junk()), vec!["/users/FUZZ"]);
    }

    #[test]
    fn test_templates_on_emits_both_forms() {
        assert_eq!(
            format_output(&[templated()], true, &junk()),
            vec!["/users/{id}", "/users/FUZZ"]
        );
    }

    #[test]
    fn test_unresolved_markers_dropped_without_templates() {
        let entry = CandidateEntry::templated("/a/{b}", "/a/{b}", None);
        assert!(format_output(&[entry], false, &junk()).is_empty());
    }

    #[test]
    fn test_bare_placeholder_dropped() {
        let entry = CandidateEntry::templated("{x}", "FUZZ", None);
        assert!(format_output(&[entry], true, &junk()).is_empty());
    }

    #[test]
    fn test_cleanup_and_junk() {
        let entries = vec![
            CandidateEntry::literal("https://github.com/repo)"),
            CandidateEntry::literal("application/json"),
            CandidateEntry::literal("http://example.com/path/."),
        ];
        assert_eq!(
            format_output(&entries, false, &junk()),
            vec!["https://github.com/repo", "http://example.com/path/"]
        );
    }
}
