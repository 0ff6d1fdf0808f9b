//! `+` concatenation, `.concat()` chains and standalone `.join`/`.replace` calls.

use jsurls_core::types::CandidateEntry;
use tree_sitter::Node;

use super::CandidateGenerator;
use crate::aliases::DisplayNames;
use crate::filters::{collapse_placeholder_runs, consolidate_adjacent_placeholders};
use crate::output::{convert_route_params, replace_template_markers};
use crate::parsers::{base_identifier, method_call, node_text, BinaryOp, NodeShape};
use crate::resolver::{string_method, string_value, StringMethod};

/// One operand of a flattened concatenation.
#[derive(Debug, Clone)]
enum Part<'t> {
    Literal(String),
    Identifier(Node<'t>),
    Member(Node<'t>),
    Template(Node<'t>),
    Call(Node<'t>, StringMethod),
    Unknown(Node<'t>),
    /// A `.replace(search, value)` that could not be applied to a literal.
    Replacement(String),
}

impl<'t> Part<'t> {
    fn is_literal(&self) -> bool {
        matches!(self, Part::Literal(_))
    }
}

impl CandidateGenerator<'_> {
    /// Entry for a `+` chain, when either rendering looks like a URL or path.
    pub(super) fn concatenation(&self, node: Node<'_>) -> Option<CandidateEntry> {
        let mut parts = Vec::new();
        self.flatten_binary(node, &mut parts);
        self.parts_entry(node, &parts)
    }

    /// Entry for a `base.concat(a).concat(b)` chain.
    pub(super) fn concat_chain(&self, node: Node<'_>) -> Option<CandidateEntry> {
        let mut parts = Vec::new();
        self.flatten_chain(node, &mut parts);
        self.parts_entry(node, &parts)
    }

    /// Entry for a standalone `.join(sep)` or `.replace(search, value)` call.
    pub(super) fn method_call_entry(
        &self,
        node: Node<'_>,
        method: StringMethod,
    ) -> Option<CandidateEntry> {
        let resolver = self.resolver();
        let values = match method {
            StringMethod::Join => resolver.join(node),
            StringMethod::Replace => resolver.replace(node),
            StringMethod::Concat => return None,
        };
        let first = values.first()?;
        if !self.is_url_or_path(first) {
            return None;
        }
        Some(CandidateEntry::templated(
            format!("{{{}}}", node_text(node, self.source)),
            first,
            None,
        ))
    }

    /// Whether `node` is a method chain with a `.concat()` somewhere below it.
    pub(super) fn is_concat_chain(&self, node: Node<'_>) -> bool {
        let mut current = node;
        while let Some(call) = method_call(current, self.source) {
            if call.method == "concat" {
                return true;
            }
            match call.receiver {
                Some(receiver) => current = receiver,
                None => return false,
            }
        }
        false
    }

    fn flatten_binary<'t>(&self, node: Node<'t>, parts: &mut Vec<Part<'t>>) {
        match NodeShape::of(node) {
            NodeShape::Binary(BinaryOp::Add) => {
                if let Some(left) = node.child_by_field_name("left") {
                    self.flatten_binary(left, parts);
                }
                if let Some(right) = node.child_by_field_name("right") {
                    self.flatten_binary(right, parts);
                }
            }
            NodeShape::TemplateString => parts.push(Part::Template(node)),
            NodeShape::Call => match string_method(node, self.source) {
                Some(method @ (StringMethod::Join | StringMethod::Replace)) => {
                    parts.push(Part::Call(node, method))
                }
                _ => parts.push(Part::Unknown(node)),
            },
            _ if node.kind() == "parenthesized_expression" => match node.named_child(0) {
                Some(inner) => self.flatten_binary(inner, parts),
                None => parts.push(Part::Unknown(node)),
            },
            _ => self.push_operand(node, parts),
        }
    }

    fn flatten_chain<'t>(&self, node: Node<'t>, parts: &mut Vec<Part<'t>>) {
        if node.kind() != "call_expression" {
            self.push_operand(node, parts);
            return;
        }
        let Some(call) = method_call(node, self.source) else {
            parts.push(Part::Unknown(node));
            return;
        };
        if let Some(receiver) = call.receiver {
            self.flatten_chain(receiver, parts);
        }
        match call.method {
            "concat" => {
                for argument in call.arguments {
                    self.push_operand(argument, parts);
                }
            }
            "replace" => self.apply_replace(&call.arguments, parts),
            _ => {}
        }
    }

    fn push_operand<'t>(&self, node: Node<'t>, parts: &mut Vec<Part<'t>>) {
        match NodeShape::of(node) {
            NodeShape::String => {
                let value = string_value(node, self.source);
                if !value.is_empty() {
                    parts.push(Part::Literal(value));
                }
            }
            NodeShape::Identifier => parts.push(Part::Identifier(node)),
            NodeShape::Member => parts.push(Part::Member(node)),
            _ => parts.push(Part::Unknown(node)),
        }
    }

    /// Apply a chained `.replace` to the trailing literal, or record it as a marker.
    fn apply_replace(&self, arguments: &[Node<'_>], parts: &mut Vec<Part<'_>>) {
        let [search, replacement, ..] = arguments else {
            return;
        };
        if NodeShape::of(*search) != NodeShape::String {
            return;
        }
        let search = string_value(*search, self.source);
        if search.is_empty() {
            return;
        }
        let replacement = match NodeShape::of(*replacement) {
            NodeShape::String => Some(string_value(*replacement, self.source)),
            NodeShape::Identifier => self
                .tables
                .symbol(node_text(*replacement, self.source))
                .and_then(|values| values.first().map(str::to_string)),
            _ => None,
        }
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| self.placeholder.to_string());

        match parts.last_mut() {
            Some(Part::Literal(text)) => *text = text.replace(&search, &replacement),
            _ => parts.push(Part::Replacement(format!("{{{search}->{replacement}}}"))),
        }
    }

    fn parts_entry(&self, node: Node<'_>, parts: &[Part<'_>]) -> Option<CandidateEntry> {
        if parts.is_empty() {
            return None;
        }
        let variables = parts.iter().filter_map(|part| match part {
            Part::Identifier(n) => Some(node_text(*n, self.source)),
            Part::Member(n) => base_identifier(*n, self.source),
            _ => None,
        });
        let display = DisplayNames::for_site(
            node,
            variables,
            self.source,
            self.tables,
            self.aliases_enabled,
        );

        let (original, rendered) = self.render_parts(parts, &display);
        let has_template = parts.iter().any(|part| !part.is_literal());
        let rendered = collapse_placeholder_runs(&rendered, self.placeholder);
        if !(self.is_url_or_path(&original) || self.is_url_or_path(&rendered)) {
            return None;
        }

        let original_conversion = convert_route_params(&original);
        if has_template || original_conversion.has_params {
            let converted = convert_route_params(&rendered).converted;
            let placeholder = consolidate_adjacent_placeholders(
                &replace_template_markers(&converted, self.placeholder),
                self.placeholder,
            );
            return Some(CandidateEntry::templated(
                original_conversion.converted,
                placeholder,
                None,
            ));
        }
        Some(CandidateEntry {
            original,
            placeholder: rendered,
            resolved: None,
            has_template: false,
        })
    }

    /// `(original, placeholder)` renderings; each unknown takes its first value.
    fn render_parts(&self, parts: &[Part<'_>], display: &DisplayNames) -> (String, String) {
        let resolver = self.resolver();
        let mut original = String::new();
        let mut rendered = String::new();
        for part in parts {
            let (name, value) = match part {
                Part::Literal(text) => {
                    original.push_str(text);
                    rendered.push_str(text);
                    continue;
                }
                Part::Identifier(n) => {
                    let name = node_text(*n, self.source);
                    (
                        format!("{{{}}}", display.get(name)),
                        resolver.identifier(*n).first().map(str::to_string),
                    )
                }
                Part::Member(n) => {
                    let text = node_text(*n, self.source);
                    let name = match base_identifier(*n, self.source) {
                        Some(base) => text.replacen(base, display.get(base), 1),
                        None => text.to_string(),
                    };
                    (
                        format!("{{{name}}}"),
                        resolver.member(*n).first().map(str::to_string),
                    )
                }
                Part::Template(n) => {
                    let rendering = self.render_template(*n);
                    let value = rendering.renderings.first().map(str::to_string);
                    (rendering.original, value)
                }
                Part::Call(n, method) => {
                    let values = match method {
                        StringMethod::Replace => resolver.replace(*n),
                        _ => resolver.join(*n),
                    };
                    (
                        format!("{{{}}}", node_text(*n, self.source)),
                        values.first().map(str::to_string),
                    )
                }
                Part::Unknown(n) => (format!("{{{}}}", node_text(*n, self.source)), None),
                Part::Replacement(marker) => (marker.clone(), None),
            };
            original.push_str(&name);
            rendered.push_str(value.as_deref().unwrap_or(self.placeholder));
        }
        (original, rendered)
    }
}

#[cfg(test)]
mod tests {
    use crate::generator::test_support::{entries, templated};

    fn pair(original: &str, placeholder: &str) -> (String, String) {
        (original.to_string(), placeholder.to_string())
    }

    #[test]
    fn test_static_concatenation() {
        let found = entries(r#"const u = "/api" + "/v2" + "/users";"#, true);
        assert!(found
            .iter()
            .any(|e| e.original == "/api/v2/users" && !e.has_template));
    }

    #[test]
    fn test_unknown_operand() {
        let found = templated(r#"fetch("/users/" + id + "/posts");"#);
        assert!(found.contains(&pair("/users/{id}/posts", "/users/FUZZ/posts")));
    }

    #[test]
    fn test_known_operand_uses_first_value() {
        let found = templated(r#"const v = "v2"; fetch("/api/" + v + "/items");"#);
        assert!(found.contains(&pair("/api/{v}/items", "/api/v2/items")));
    }

    #[test]
    fn test_parenthesized_operands_flatten() {
        let found = templated(r#"fetch("/a/" + (b + "/c"));"#);
        assert!(found.contains(&pair("/a/{b}/c", "/a/FUZZ/c")));
    }

    #[test]
    fn test_concat_chain() {
        let found = templated(r#"const p = "/api".concat("/users/", id);"#);
        assert_eq!(found, vec![pair("/api/users/{id}", "/api/users/FUZZ")]);
    }

    #[test]
    fn test_concat_chain_replace_on_literal() {
        let found = entries(r#"x = "/api/".concat("VER/items").replace("VER", "v1");"#, true);
        assert!(found.iter().any(|e| e.original == "/api/v1/items"));
    }

    #[test]
    fn test_standalone_join() {
        let found = templated(r#"const segs = ["api", "users"]; go(segs.join("/"));"#);
        assert_eq!(found, vec![pair(r#"{segs.join("/")}"#, "api/users")]);
    }

    #[test]
    fn test_non_url_concat_ignored() {
        assert!(templated(r#"msg("hello " + name);"#).is_empty());
    }
}
