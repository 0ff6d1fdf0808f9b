//! Comments and hash-bang lines.

use jsurls_core::types::CandidateEntry;
use once_cell::sync::Lazy;
use regex::Regex;
use tree_sitter::Node;

use super::{CandidateGenerator, CandidateList};
use crate::budget::VisitBudget;
use crate::parsers::node_text;

static COMMENT_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"https?://[^\s<>"{}|\\^`\[\]]+"#).unwrap());

static COMMENT_PATH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?:^|[\s,;])((?:/[a-zA-Z0-9_\-./{}:]+)|(?:\./[a-zA-Z0-9_\-./]+)|(?:\.\./[a-zA-Z0-9_\-./]+))",
    )
    .unwrap()
});

/// Comment body without its `//`, `/* */` or `#!` delimiters, trimmed.
/// `None` when nothing is left.
pub fn strip_comment_delimiters(text: &str) -> Option<&str> {
    let body = if let Some(rest) = text.strip_prefix("//") {
        rest
    } else if text.len() >= 4 && text.starts_with("/*") && text.ends_with("*/") {
        &text[2..text.len() - 2]
    } else if let Some(rest) = text.strip_prefix("#!") {
        rest
    } else {
        text
    };
    let body = body.trim();
    (!body.is_empty()).then_some(body)
}

impl CandidateGenerator<'_> {
    /// URLs and paths written in the comment, then a nested run over its
    /// body in case it holds commented-out code.
    pub(super) fn comment(
        &self,
        node: Node<'_>,
        budget: &mut VisitBudget,
        out: &mut CandidateList,
    ) {
        let text = node_text(node, self.source);
        let Some(body) = strip_comment_delimiters(text) else {
            return;
        };
        let urls = COMMENT_URL.find_iter(body).map(|m| m.as_str());
        let paths = COMMENT_PATH
            .captures_iter(body)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str());
        for candidate in urls.chain(paths) {
            if self.is_url_or_path(candidate) {
                out.push(CandidateEntry::literal(candidate));
            }
        }
        // Only re-run on text strictly shorter than the comment itself.
        if body.len() < text.len() {
            out.extend(self.nested.analyze_nested(body, budget));
        }
    }
}
