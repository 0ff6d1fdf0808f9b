//! Node-visit budget shared by both passes.

use jsurls_core::tracing::fields;
use tracing::warn;

/// Counts visited nodes against a ceiling. Exhaustion is reported once and
/// stops the walk; whatever was gathered so far stays valid.
///
/// Nested runs over comment bodies and inline scripts start from
/// [`VisitBudget::remaining`] and their visits are charged back with
/// [`VisitBudget::charge`], so one top-level call never walks more than
/// `limit` nodes per budget.
#[derive(Debug)]
pub struct VisitBudget {
    pass: &'static str,
    limit: usize,
    visited: usize,
    exhausted: bool,
}

impl VisitBudget {
    pub fn new(pass: &'static str, limit: usize) -> Self {
        Self {
            pass,
            limit,
            visited: 0,
            exhausted: false,
        }
    }

    pub fn for_symbols(limit: usize) -> Self {
        Self::new(fields::PASS_SYMBOLS, limit)
    }

    pub fn for_candidates(limit: usize) -> Self {
        Self::new(fields::PASS_CANDIDATES, limit)
    }

    /// Count one visit. Returns false once the budget is spent.
    pub fn visit(&mut self) -> bool {
        if self.visited >= self.limit {
            if !self.exhausted {
                self.exhausted = true;
                warn!(
                    pass = self.pass,
                    budget = self.limit,
                    "node visit budget exceeded, returning partial results"
                );
            }
            return false;
        }
        self.visited += 1;
        true
    }

    /// Visits left before the budget is spent.
    pub fn remaining(&self) -> usize {
        self.limit.saturating_sub(self.visited)
    }

    /// Account for visits made elsewhere on this budget's behalf.
    pub fn charge(&mut self, visits: usize) {
        self.visited = self.visited.saturating_add(visits).min(self.limit);
    }

    pub fn visited(&self) -> usize {
        self.visited
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}
