//! Property tests over generated sources.

use jsurls_analysis::output::convert_route_params;
use jsurls_analysis::{CandidateList, JunkFilter, PatternMatcher, UrlExtractor};
use jsurls_core::config::ExtractConfig;
use proptest::prelude::*;

/// String literal bodies rich in path characters and brackets.
fn literal() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9/:._{}()\\[\\]?=&-]{0,24}"
}

fn program() -> impl Strategy<Value = String> {
    (literal(), literal(), literal(), "[a-z]{1,6}").prop_map(|(a, b, c, name)| {
        format!(
            "const {name} = \"{a}\";\nfetch({name} + \"{b}\");\nload(`{c}/${{{name}}}/x`);\n// see {b}\n"
        )
    })
}

fn has_unmatched_closer(text: &str) -> bool {
    let mut stack = Vec::new();
    for ch in text.chars() {
        match ch {
            '(' | '[' | '{' => stack.push(ch),
            ')' | ']' | '}' => {
                let opener = match ch {
                    ')' => '(',
                    ']' => '[',
                    _ => '{',
                };
                if stack.pop() != Some(opener) {
                    return true;
                }
            }
            _ => {}
        }
    }
    false
}

fn extractor(include_templates: bool) -> UrlExtractor {
    UrlExtractor::new(ExtractConfig {
        include_templates: Some(include_templates),
        ..Default::default()
    })
    .unwrap()
}

proptest! {
    #[test]
    fn extraction_is_deterministic(source in program(), templates in any::<bool>()) {
        let extractor = extractor(templates);
        let first = extractor.extract(&source).unwrap();
        let second = extractor.extract(&source).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn outputs_are_never_junk(source in program(), templates in any::<bool>()) {
        let junk = JunkFilter::new("FUZZ", PatternMatcher::new());
        for url in extractor(templates).extract(&source).unwrap() {
            prop_assert!(!junk.is_junk(&url), "junk in output: {}", url);
        }
    }

    #[test]
    fn outputs_have_balanced_closers(source in program()) {
        for url in extractor(true).extract(&source).unwrap() {
            prop_assert!(!has_unmatched_closer(&url), "unbalanced: {}", url);
        }
    }

    #[test]
    fn outputs_are_unique(source in program()) {
        let out = extractor(true).extract(&source).unwrap();
        let mut seen = std::collections::HashSet::new();
        for url in &out {
            prop_assert!(seen.insert(url.clone()), "duplicate: {}", url);
        }
    }

    #[test]
    fn entries_are_unique_by_key(source in program()) {
        let entries = extractor(true).extract_entries(&source).unwrap();
        let mut list = CandidateList::new();
        for entry in entries {
            prop_assert!(list.push(entry));
        }
    }

    #[test]
    fn credentials_never_become_route_params(
        user in "[a-z]{1,8}",
        pass in "[a-z0-9]{1,8}",
        host in "[a-z]{1,8}\\.com",
        path in "(/[a-z]{1,6}){0,3}",
    ) {
        let url = format!("https://{user}:{pass}@{host}{path}");
        let out = convert_route_params(&url);
        prop_assert_eq!(out.converted, url);
        prop_assert!(!out.has_params);
    }
}
