//! URLs in HTML markup: attribute values and inline scripts.

use jsurls_core::types::CandidateEntry;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

use crate::patterns::PatternMatcher;

static ANY_ELEMENT: Lazy<Selector> = Lazy::new(|| Selector::parse("*").unwrap());

static SCRIPT: Lazy<Selector> = Lazy::new(|| Selector::parse("script").unwrap());

/// Attributes holding URLs, per tag.
static TAG_ATTRIBUTES: &[(&str, &[&str])] = &[
    ("a", &["href"]),
    ("link", &["href"]),
    ("base", &["href"]),
    ("area", &["href"]),
    ("img", &["src", "srcset", "data-src"]),
    ("script", &["src", "data-src"]),
    ("form", &["action"]),
    ("button", &["formaction"]),
    ("iframe", &["src", "data-src"]),
    ("video", &["src", "poster", "data-src"]),
    ("audio", &["src", "data-src"]),
    ("source", &["src", "srcset"]),
    ("track", &["src"]),
    ("embed", &["src"]),
    ("input", &["src"]),
    ("object", &["data", "codebase"]),
    ("blockquote", &["cite"]),
    ("q", &["cite"]),
    ("ins", &["cite"]),
    ("del", &["cite"]),
    ("use", &["href", "xlink:href"]),
];

/// Lazy-loading attributes checked on every element.
const DATA_ATTRIBUTES: &[&str] = &["data-url", "data-href", "data-src"];

const SKIPPED_PREFIXES: &[&str] = &["#", "javascript:", "data:"];

/// Static entries for every URL or path found in markup attributes.
///
/// Tag-specific attributes are collected first, in tag table order, then
/// the lazy-loading `data-*` attributes of all elements.
pub fn extract_markup_urls(html: &str, patterns: &PatternMatcher) -> Vec<CandidateEntry> {
    let document = Html::parse_document(html);
    let elements: Vec<ElementRef<'_>> = document.select(&ANY_ELEMENT).collect();
    let mut entries = Vec::new();

    for (tag, attributes) in TAG_ATTRIBUTES {
        for element in elements.iter().filter(|e| e.value().name() == *tag) {
            for attribute in *attributes {
                let Some(value) = attribute_value(element, attribute) else {
                    continue;
                };
                if *attribute == "srcset" {
                    for candidate in srcset_urls(value) {
                        push_url(&mut entries, candidate, patterns);
                    }
                } else {
                    push_url(&mut entries, value.trim(), patterns);
                }
            }
        }
    }

    for element in &elements {
        for attribute in DATA_ATTRIBUTES {
            if let Some(value) = attribute_value(element, attribute) {
                push_url(&mut entries, value.trim(), patterns);
            }
        }
    }

    entries
}

/// Trimmed bodies of `<script>` elements that have no `src`.
pub fn inline_scripts(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    document
        .select(&SCRIPT)
        .filter(|script| {
            script
                .value()
                .attr("src")
                .map_or(true, |src| src.trim().is_empty())
        })
        .map(|script| script.text().collect::<String>().trim().to_string())
        .filter(|code| !code.is_empty())
        .collect()
}

/// Whether `text` is an HTML document rather than JavaScript.
///
/// True for a doctype or `<html`/`<head`/`<body` near the start, or when
/// the text opens with a `<script` tag or a single well-formed tag.
pub fn is_html_document(text: &str) -> bool {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return false;
    }

    let head: String = trimmed.chars().take(200).collect::<String>().to_lowercase();
    if ["<!doctype html", "<html", "<head", "<body"]
        .iter()
        .any(|marker| head.contains(marker))
    {
        return true;
    }

    if !trimmed.starts_with('<') {
        return false;
    }
    let window: String = trimmed.chars().take(100).collect();
    if !window.contains('>') {
        return false;
    }
    match trimmed.find('>') {
        Some(end) if end > 0 => {
            let first_tag = &trimmed[..=end];
            first_tag.to_lowercase().contains("<script") || first_tag.matches('<').count() == 1
        }
        _ => false,
    }
}

/// Attribute by name. Namespaced attributes such as `xlink:href` are
/// matched on their local name.
fn attribute_value<'a>(element: &ElementRef<'a>, name: &str) -> Option<&'a str> {
    let local = name.rsplit(':').next().unwrap_or(name);
    element
        .value()
        .attrs()
        .find(|(key, _)| *key == name || *key == local)
        .map(|(_, value)| value)
        .filter(|value| !value.trim().is_empty())
}

/// First token of each comma-separated `srcset` candidate.
fn srcset_urls(value: &str) -> impl Iterator<Item = &str> {
    value
        .split(',')
        .filter_map(|item| item.split_whitespace().next())
}

fn push_url(entries: &mut Vec<CandidateEntry>, url: &str, patterns: &PatternMatcher) {
    if url.is_empty() || SKIPPED_PREFIXES.iter().any(|p| url.starts_with(p)) {
        return;
    }
    if patterns.is_url_or_path(url) {
        entries.push(CandidateEntry::literal(url));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls(html: &str) -> Vec<String> {
        extract_markup_urls(html, &PatternMatcher::new())
            .into_iter()
            .map(|e| e.original)
            .collect()
    }

    #[test]
    fn test_tag_attributes() {
        let html = r#"<div><a href="/about">About</a><img src="/img/logo.png"><form action="/api/login"></form></div>"#;
        assert_eq!(urls(html), vec!["/about", "/img/logo.png", "/api/login"]);
    }

    #[test]
    fn test_srcset_and_data_attributes() {
        let html = r#"<img srcset="/a-1x.png 1x, /a-2x.png 2x"><div data-url="/lazy/load"></div>"#;
        assert_eq!(urls(html), vec!["/a-1x.png", "/a-2x.png", "/lazy/load"]);
    }

    #[test]
    fn test_skipped_values() {
        let html = r##"<a href="#top">x</a><a href="javascript:void(0)">y</a><img src="data:image/png;base64,AA">"##;
        assert!(urls(html).is_empty());
    }

    #[test]
    fn test_inline_scripts_only() {
        let html = r#"<script src="/app.js"></script><script> const u = "/api/x"; </script><script></script>"#;
        assert_eq!(inline_scripts(html), vec![r#"const u = "/api/x";"#.to_string()]);
    }

    #[test]
    fn test_html_document_detection() {
        assert!(is_html_document("<!DOCTYPE html><html></html>"));
        assert!(is_html_document("  <script>var a = 1;</script>"));
        assert!(is_html_document("<div class=\"x\">hi</div>"));
        assert!(!is_html_document("const a = 1 < 2 && 3 > 1;"));
        assert!(!is_html_document(""));
    }
}
