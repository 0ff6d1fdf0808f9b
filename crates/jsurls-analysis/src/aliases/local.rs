//! Alias hints in the lexical neighbourhood of a use site.

use jsurls_core::constants::ALIAS_SEARCH_DEPTH;
use rustc_hash::FxHashMap;
use tree_sitter::Node;

use crate::parsers::{method_call, named_children, node_text};
use crate::resolver::string_value;
use crate::tables::{merge_candidate, AliasCandidate, Confidence};

/// Collect alias candidates for `variables` from the scopes enclosing `node`.
///
/// Walks up to `ALIAS_SEARCH_DEPTH` ancestors. Function parameters are read
/// for destructuring patterns; blocks and the program are scanned for
/// object literals, destructuring declarations, `new URLSearchParams({..})`
/// and `.append(key, value)` / `.set(key, value)` statements.
pub fn collect_local_aliases(
    node: Node<'_>,
    variables: &[&str],
    source: &str,
) -> FxHashMap<String, Vec<AliasCandidate>> {
    let mut found = LocalHints {
        variables,
        source,
        found: FxHashMap::default(),
    };

    let mut current = node.parent();
    let mut depth = 0;
    while let Some(scope) = current {
        if depth >= ALIAS_SEARCH_DEPTH {
            break;
        }
        depth += 1;
        match scope.kind() {
            "arrow_function" => {
                for child in named_children(scope) {
                    match child.kind() {
                        "formal_parameters" => found.parameters(child),
                        "object_pattern" => found.pattern(child),
                        _ => {}
                    }
                }
            }
            "function_declaration" | "function_expression" | "function"
            | "generator_function_declaration" | "method_definition" => {
                if let Some(params) = scope.child_by_field_name("parameters") {
                    found.parameters(params);
                }
            }
            "statement_block" | "program" => found.block(scope),
            _ => {}
        }
        current = scope.parent();
    }

    found.found
}

struct LocalHints<'v, 's> {
    variables: &'v [&'v str],
    source: &'s str,
    found: FxHashMap<String, Vec<AliasCandidate>>,
}

impl LocalHints<'_, '_> {
    fn parameters(&mut self, params: Node<'_>) {
        for param in named_children(params) {
            if param.kind() == "object_pattern" {
                self.pattern(param);
            }
        }
    }

    fn block(&mut self, block: Node<'_>) {
        for statement in named_children(block) {
            match statement.kind() {
                "lexical_declaration" | "variable_declaration" => self.declaration(statement),
                "expression_statement" => {
                    if let Some(expr) = statement.named_child(0) {
                        self.key_value_call(expr);
                    }
                }
                _ => {}
            }
        }
    }

    fn declaration(&mut self, declaration: Node<'_>) {
        for declarator in named_children(declaration) {
            if declarator.kind() != "variable_declarator" {
                continue;
            }
            if let Some(name) = declarator.child_by_field_name("name") {
                if name.kind() == "object_pattern" {
                    self.pattern(name);
                }
            }
            let Some(value) = declarator.child_by_field_name("value") else {
                continue;
            };
            match value.kind() {
                "object" | "object_pattern" => self.pattern(value),
                "new_expression" => self.search_params_constructor(value),
                _ => {}
            }
        }
    }

    /// `{ key: var }` and `{ key: var } = ...`: the key names the variable.
    fn pattern(&mut self, pattern: Node<'_>) {
        for pair in named_children(pattern) {
            if !matches!(pair.kind(), "pair" | "pair_pattern") {
                continue;
            }
            let (Some(key), Some(value)) = (
                pair.child_by_field_name("key"),
                pair.child_by_field_name("value"),
            ) else {
                continue;
            };
            if value.kind() == "identifier" {
                let alias = node_text(key, self.source).trim_matches(['"', '\'']);
                self.add(node_text(value, self.source), alias);
            }
        }
    }

    fn search_params_constructor(&mut self, node: Node<'_>) {
        let constructor = node
            .child_by_field_name("constructor")
            .map(|c| node_text(c, self.source));
        if !matches!(constructor, Some("URLSearchParams" | "FormData")) {
            return;
        }
        let first = node
            .child_by_field_name("arguments")
            .and_then(|args| named_children(args).into_iter().next());
        if let Some(object) = first.filter(|n| n.kind() == "object") {
            self.pattern(object);
        }
    }

    /// `params.append('key', var)` or `params.set('key', var)`.
    fn key_value_call(&mut self, expr: Node<'_>) {
        let Some(call) = method_call(expr, self.source) else {
            return;
        };
        if !matches!(call.method, "append" | "set") || call.arguments.len() < 2 {
            return;
        }
        let (key, value) = (call.arguments[0], call.arguments[1]);
        if key.kind() == "string" && value.kind() == "identifier" {
            let alias = string_value(key, self.source);
            self.add(node_text(value, self.source), &alias);
        }
    }

    fn add(&mut self, var: &str, alias: &str) {
        if alias.is_empty() || alias == var || !self.variables.iter().any(|v| *v == var) {
            return;
        }
        let list = self.found.entry(var.to_string()).or_default();
        merge_candidate(list, alias, Confidence::Medium);
    }
}
