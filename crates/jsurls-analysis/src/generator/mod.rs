//! Candidate generator: the second pass.
//!
//! Re-walks the tree and turns every string-producing node into candidate
//! entries, using the value tables for substitution and alias inference
//! for display names. Comment text and markup found in strings are handed
//! to a nested run of the whole pipeline.

mod comments;
mod concat;
mod literals;
mod prose;
mod sink;
mod template;

pub use comments::strip_comment_delimiters;
pub use prose::{embedded_urls, is_prose, prose_urls};
pub use sink::CandidateList;

use jsurls_core::types::CandidateEntry;
use tree_sitter::Node;

use crate::budget::VisitBudget;
use crate::parsers::{named_children, BinaryOp, NodeShape};
use crate::patterns::PatternMatcher;
use crate::resolver::{string_method, Resolver, StringMethod};
use crate::tables::ValueTables;

/// Runs the full two-pass pipeline over embedded source text.
///
/// Implementations build a fresh analysis context per call, bounded by what
/// is left of `budget`, and charge the nodes they visit back to it.
pub trait NestedAnalysis {
    fn analyze_nested(&self, source: &str, budget: &mut VisitBudget) -> Vec<CandidateEntry>;
}

/// Nested analysis that finds nothing. Comment and inline-script content is
/// still scanned for literal URLs, but never re-parsed.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoNestedAnalysis;

impl NestedAnalysis for NoNestedAnalysis {
    fn analyze_nested(&self, _source: &str, _budget: &mut VisitBudget) -> Vec<CandidateEntry> {
        Vec::new()
    }
}

/// Second-pass walker over one parsed source.
#[derive(Clone, Copy)]
pub struct CandidateGenerator<'a> {
    source: &'a str,
    tables: &'a ValueTables,
    placeholder: &'a str,
    patterns: &'a PatternMatcher,
    aliases_enabled: bool,
    nested: &'a dyn NestedAnalysis,
}

impl<'a> CandidateGenerator<'a> {
    pub fn new(
        source: &'a str,
        tables: &'a ValueTables,
        placeholder: &'a str,
        patterns: &'a PatternMatcher,
        nested: &'a dyn NestedAnalysis,
    ) -> Self {
        Self {
            source,
            tables,
            placeholder,
            patterns,
            aliases_enabled: true,
            nested,
        }
    }

    pub fn with_aliases(mut self, enabled: bool) -> Self {
        self.aliases_enabled = enabled;
        self
    }

    /// Walk `root` in pre-order, appending entries to `out` until `budget` runs out.
    pub fn generate(&self, root: Node<'_>, budget: &mut VisitBudget, out: &mut CandidateList) {
        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            if !budget.visit() {
                break;
            }
            match NodeShape::of(node) {
                NodeShape::String => self.string_literal(node, budget, out),
                NodeShape::TemplateString => self.template_string(node, budget, out),
                NodeShape::Binary(BinaryOp::Add) => {
                    if let Some(entry) = self.concatenation(node) {
                        out.push(entry);
                    }
                }
                NodeShape::Call => self.call(node, out),
                NodeShape::Comment | NodeShape::HashBang => self.comment(node, budget, out),
                _ => {}
            }
            let mut children = named_children(node);
            children.reverse();
            stack.extend(children);
        }
    }

    fn call(&self, node: Node<'_>, out: &mut CandidateList) {
        let entry = match string_method(node, self.source) {
            Some(StringMethod::Concat) => self.concat_chain(node),
            Some(StringMethod::Replace) if self.is_concat_chain(node) => self.concat_chain(node),
            Some(method) => self.method_call_entry(node, method),
            None => None,
        };
        if let Some(entry) = entry {
            out.push(entry);
        }
    }

    fn resolver(&self) -> Resolver<'a> {
        Resolver::new(self.tables, self.placeholder, self.source)
    }

    fn is_url_or_path(&self, text: &str) -> bool {
        self.patterns.is_url_or_path(text)
    }
}


#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::parsers::parse_javascript;

    /// Records the budget each nested run starts from and charges a fixed cost.
    struct Recording {
        cost: usize,
        starts: RefCell<Vec<usize>>,
    }

    impl NestedAnalysis for Recording {
        fn analyze_nested(&self, _source: &str, budget: &mut VisitBudget) -> Vec<CandidateEntry> {
            self.starts.borrow_mut().push(budget.remaining());
            budget.charge(self.cost);
            Vec::new()
        }
    }

    #[test]
    fn test_nested_runs_draw_from_parent_budget() {
        let source = "// one()\n// two()\n// three()\n";
        let tree = parse_javascript(source).unwrap();
        let tables = ValueTables::new();
        let patterns = PatternMatcher::new();
        let nested = Recording {
            cost: 10,
            starts: RefCell::new(Vec::new()),
        };
        let mut budget = VisitBudget::for_candidates(100);
        let mut out = CandidateList::new();
        CandidateGenerator::new(source, &tables, "FUZZ", &patterns, &nested)
            .generate(tree.root_node(), &mut budget, &mut out);

        let starts = nested.starts.into_inner();
        assert_eq!(starts.len(), 3);
        for pair in starts.windows(2) {
            assert!(pair[0] - pair[1] > 10, "nested cost not charged: {starts:?}");
        }
        assert!(budget.visited() >= 3 * 10 + 4);
    }
}
