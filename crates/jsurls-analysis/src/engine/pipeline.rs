//! One run of both passes over a source text.

use jsurls_core::errors::ParseError;
use jsurls_core::types::CandidateEntry;
use tracing::debug;

use super::context::{AnalysisContext, RunFlags};
use super::UrlExtractor;
use crate::budget::VisitBudget;
use crate::generator::{CandidateGenerator, CandidateList, NestedAnalysis};
use crate::parsers::parse_javascript;
use crate::symbols::SymbolTableBuilder;

/// Runs the pipeline with one extractor's settings and a fixed set of flags.
///
/// Every call to [`Pipeline::run`] starts from empty tables seeded only by
/// the caller's context.
pub(super) struct Pipeline<'e> {
    extractor: &'e UrlExtractor,
    flags: RunFlags,
}

impl<'e> Pipeline<'e> {
    pub(super) fn new(extractor: &'e UrlExtractor, flags: RunFlags) -> Self {
        Self { extractor, flags }
    }

    pub(super) fn run(
        &self,
        source: &str,
        max_nodes: usize,
    ) -> Result<Vec<CandidateEntry>, ParseError> {
        self.run_counted(source, max_nodes).map(|(entries, _)| entries)
    }

    /// Like [`Pipeline::run`], also returning the nodes visited by both passes.
    fn run_counted(
        &self,
        source: &str,
        max_nodes: usize,
    ) -> Result<(Vec<CandidateEntry>, usize), ParseError> {
        let tree = parse_javascript(source)?;
        let root = tree.root_node();
        let placeholder = self.extractor.config.effective_placeholder();
        let context = self.extractor.context.as_ref();

        let mut ctx = AnalysisContext::new(self.flags, max_nodes);
        if let Some(context) = context {
            context.populate(&mut ctx.tables);
        }
        if ctx.flags.resolve_symbols {
            SymbolTableBuilder::new(source, placeholder)
                .with_context(context, self.extractor.config.effective_context_policy())
                .build(root, &mut ctx.tables, &mut ctx.symbol_budget);
        }

        let mut out = CandidateList::new();
        CandidateGenerator::new(source, &ctx.tables, placeholder, &self.extractor.patterns, self)
            .with_aliases(ctx.flags.infer_aliases)
            .generate(root, &mut ctx.candidate_budget, &mut out);
        let visited = ctx.symbol_budget.visited() + ctx.candidate_budget.visited();
        Ok((out.into_entries(), visited))
    }
}

impl NestedAnalysis for Pipeline<'_> {
    fn analyze_nested(&self, source: &str, budget: &mut VisitBudget) -> Vec<CandidateEntry> {
        let max_nodes = budget.remaining();
        if max_nodes == 0 || source.trim().is_empty() {
            return Vec::new();
        }
        match self.run_counted(source, max_nodes) {
            Ok((entries, visited)) => {
                budget.charge(visited);
                entries
            }
            Err(e) => {
                debug!(error = %e, bytes = source.len(), "discarding unparsable nested content");
                Vec::new()
            }
        }
    }
}
