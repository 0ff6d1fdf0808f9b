//! Alias inference: human-meaningful names for opaque variables.
//!
//! Hints come from two places. The symbol pass records object-literal keys
//! and `URLSearchParams`/`FormData` pairs into the alias table; the
//! candidate pass looks around each use site for destructuring patterns and
//! nearby literals. Both feed one ranking.

mod hints;
mod local;
mod rank;

pub use hints::{record_object_hints, scan_search_params, scan_sibling_hints};
pub use local::collect_local_aliases;
pub use rank::{best_alias, AliasTier};

use rustc_hash::FxHashMap;
use tree_sitter::Node;

use crate::tables::{merge_candidate, ValueTables};

/// Display names for the variables used at one site.
///
/// Lookups for variables without a better name return the variable itself.
#[derive(Debug, Default)]
pub struct DisplayNames {
    names: FxHashMap<String, String>,
}

impl DisplayNames {
    /// Choose display names for `variables` as used at `node`.
    ///
    /// Returns an empty set when alias inference is disabled.
    pub fn for_site<'v, I>(
        node: Node<'_>,
        variables: I,
        source: &str,
        tables: &ValueTables,
        enabled: bool,
    ) -> Self
    where
        I: IntoIterator<Item = &'v str>,
    {
        if !enabled {
            return Self::default();
        }
        let variables: Vec<&str> = variables.into_iter().collect();
        if variables.is_empty() {
            return Self::default();
        }

        let mut candidates = collect_local_aliases(node, &variables, source);
        let mut names = FxHashMap::default();
        for var in variables {
            let list = candidates.entry(var.to_string()).or_default();
            for hint in tables.aliases(var) {
                merge_candidate(list, &hint.name, hint.confidence);
            }
            let chosen = best_alias(var, list);
            if chosen != var {
                names.insert(var.to_string(), chosen.to_string());
            }
        }
        Self { names }
    }

    pub fn get<'a>(&'a self, var: &'a str) -> &'a str {
        self.names.get(var).map(String::as_str).unwrap_or(var)
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
