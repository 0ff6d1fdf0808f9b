//! Per-run analysis state.

use jsurls_core::config::ExtractConfig;

use crate::budget::VisitBudget;
use crate::tables::ValueTables;

/// Which parts of the pipeline run for one input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunFlags {
    /// Input exceeded `max_file_size_mb`.
    pub large_input: bool,
    /// Run Pass 1 (symbol table construction).
    pub resolve_symbols: bool,
    /// Choose display names from alias hints.
    pub infer_aliases: bool,
}

impl RunFlags {
    /// Apply the size threshold and the skip switches to an input of `len` bytes.
    ///
    /// Context presence keeps symbol resolution on for large inputs;
    /// the `only` policy turns Pass 1 off whenever context is present.
    pub fn for_input(config: &ExtractConfig, len: usize, has_context: bool) -> Self {
        let large_input = config.is_large_input(len);
        let skip_symbols = config.effective_skip_symbols() || (large_input && !has_context);
        let policy_skips = has_context && config.effective_context_policy().skips_pass1();
        Self {
            large_input,
            resolve_symbols: !skip_symbols && !policy_skips,
            infer_aliases: !(config.effective_skip_aliases() || large_input),
        }
    }
}

/// State owned by exactly one run of the pipeline.
///
/// Nested runs over comments and inline scripts each build their own.
#[derive(Debug)]
pub struct AnalysisContext {
    pub tables: ValueTables,
    pub flags: RunFlags,
    pub symbol_budget: VisitBudget,
    pub candidate_budget: VisitBudget,
}

impl AnalysisContext {
    pub fn new(flags: RunFlags, max_nodes: usize) -> Self {
        Self {
            tables: ValueTables::new(),
            flags,
            symbol_budget: VisitBudget::for_symbols(max_nodes),
            candidate_budget: VisitBudget::for_candidates(max_nodes),
        }
    }
}
