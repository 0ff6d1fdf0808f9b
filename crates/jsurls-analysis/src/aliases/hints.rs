//! Alias hints recorded into the alias table during the symbol pass.

use tree_sitter::Node;

use crate::parsers::{method_call, named_children, node_text};
use crate::resolver::string_value;
use crate::tables::{Confidence, ValueTables};

/// Record `{ key: ident }` pairs of an object literal or destructuring
/// pattern as high-confidence aliases. With `only`, other variables are ignored.
pub fn record_object_hints(
    object: Node<'_>,
    source: &str,
    tables: &mut ValueTables,
    only: Option<&str>,
) {
    if !matches!(object.kind(), "object" | "object_pattern") {
        return;
    }
    for pair in named_children(object) {
        if !matches!(pair.kind(), "pair" | "pair_pattern") {
            continue;
        }
        let (Some(key), Some(value)) = (
            pair.child_by_field_name("key"),
            pair.child_by_field_name("value"),
        ) else {
            continue;
        };
        if value.kind() != "identifier" {
            continue;
        }
        let var = node_text(value, source);
        if only.is_some_and(|wanted| wanted != var) {
            continue;
        }
        let alias = node_text(key, source).trim_matches(['"', '\'']);
        tables.add_alias(var, alias, Confidence::High);
    }
}

/// `new URLSearchParams({..})`, `new FormData({..})`, and
/// `x.append('key', ident)` / `x.set('key', ident)`.
pub fn scan_search_params(
    node: Node<'_>,
    source: &str,
    tables: &mut ValueTables,
    only: Option<&str>,
) {
    match node.kind() {
        "new_expression" => {
            let constructor = node
                .child_by_field_name("constructor")
                .map(|c| node_text(c, source));
            if !matches!(constructor, Some("URLSearchParams" | "FormData")) {
                return;
            }
            let first = node
                .child_by_field_name("arguments")
                .and_then(|args| named_children(args).into_iter().next());
            if let Some(object) = first.filter(|n| n.kind() == "object") {
                record_object_hints(object, source, tables, only);
            }
        }
        "call_expression" => {
            let Some(call) = method_call(node, source) else {
                return;
            };
            if !matches!(call.method, "append" | "set") || call.arguments.len() < 2 {
                return;
            }
            let (key, value) = (call.arguments[0], call.arguments[1]);
            if key.kind() != "string" || value.kind() != "identifier" {
                return;
            }
            let var = node_text(value, source);
            if only.is_some_and(|wanted| wanted != var) {
                return;
            }
            let alias = string_value(key, source);
            tables.add_alias(var, &alias, Confidence::High);
        }
        _ => {}
    }
}

/// Scan the other declarators of `declaration` for hints naming `var`:
/// `const t = '1', params = { contentId: t };`.
pub fn scan_sibling_hints(
    declaration: Node<'_>,
    var: &str,
    source: &str,
    tables: &mut ValueTables,
) {
    for sibling in named_children(declaration) {
        if sibling.kind() != "variable_declarator" {
            continue;
        }
        let Some(value) = sibling.child_by_field_name("value") else {
            continue;
        };
        match value.kind() {
            "object" => record_object_hints(value, source, tables, Some(var)),
            "new_expression" | "call_expression" => {
                scan_search_params(value, source, tables, Some(var))
            }
            _ => {}
        }
    }
}
