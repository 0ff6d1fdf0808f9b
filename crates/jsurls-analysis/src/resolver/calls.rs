//! `.join(sep)` and `.replace(search, value)` calls, plus array element lists.

use tree_sitter::Node;

use super::{string_value, Resolver};
use crate::parsers::{method_call, named_children, node_text, NodeShape};
use crate::tables::Values;

/// String-building methods the resolver evaluates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringMethod {
    Join,
    Replace,
    Concat,
}

/// Which string-building method `node` calls, if any.
pub fn string_method(node: Node<'_>, source: &str) -> Option<StringMethod> {
    match method_call(node, source)?.method {
        "join" => Some(StringMethod::Join),
        "replace" => Some(StringMethod::Replace),
        "concat" => Some(StringMethod::Concat),
        _ => None,
    }
}

impl Resolver<'_> {
    /// Elements of an array literal, one entry per element.
    ///
    /// Identifiers expand in place to all their values; anything
    /// unresolvable becomes the placeholder.
    pub fn array_elements(&self, array: Node<'_>) -> Vec<String> {
        let mut elements = Vec::new();
        for element in named_children(array) {
            match NodeShape::of(element) {
                NodeShape::String => {
                    let value = string_value(element, self.source);
                    if !value.is_empty() {
                        elements.push(value);
                    }
                }
                NodeShape::Identifier => elements.extend(self.identifier(element)),
                NodeShape::Binary(_) | NodeShape::Member | NodeShape::Subscript => {
                    elements.extend(self.resolve(element))
                }
                NodeShape::Comment => {}
                _ => elements.push(self.placeholder.to_string()),
            }
        }
        elements
    }

    /// `arr.join(sep)`: one value, the receiver's elements joined by `sep` (default "").
    pub fn join(&self, node: Node<'_>) -> Values {
        let Some(call) = method_call(node, self.source) else {
            return self.placeholder_values();
        };
        let elements = match call.receiver {
            Some(receiver) if receiver.kind() == "identifier" => {
                match self.tables.array(node_text(receiver, self.source)) {
                    Some(elements) => elements.to_vec(),
                    None => return self.placeholder_values(),
                }
            }
            Some(receiver) if receiver.kind() == "array" => self.array_elements(receiver),
            _ => return self.placeholder_values(),
        };
        let separator = match call.arguments.first() {
            Some(arg) if arg.kind() == "string" => string_value(*arg, self.source),
            Some(arg) if arg.kind() == "identifier" => self
                .tables
                .symbol(node_text(*arg, self.source))
                .and_then(|v| v.first().map(str::to_string))
                .unwrap_or_default(),
            _ => String::new(),
        };
        Values::one(elements.join(&separator))
    }

    /// `base.replace(search, value)`: literal substring replacement of every
    /// occurrence, for each base value and each replacement value.
    pub fn replace(&self, node: Node<'_>) -> Values {
        let Some(call) = method_call(node, self.source) else {
            return self.placeholder_values();
        };
        let bases = match call.receiver {
            Some(receiver) if receiver.kind() == "string" => {
                Values::one(string_value(receiver, self.source))
            }
            Some(receiver) if receiver.kind() == "identifier" => {
                match self.tables.symbol(node_text(receiver, self.source)) {
                    Some(values) => values.clone(),
                    None => return self.placeholder_values(),
                }
            }
            _ => return self.placeholder_values(),
        };
        let [search, replacement, ..] = call.arguments.as_slice() else {
            return self.placeholder_values();
        };
        if search.kind() != "string" {
            return self.placeholder_values();
        }
        let search = string_value(*search, self.source);
        let replacements = match NodeShape::of(*replacement) {
            NodeShape::String => Values::one(string_value(*replacement, self.source)),
            NodeShape::Identifier => self.identifier(*replacement),
            _ => self.placeholder_values(),
        };

        let mut out = Values::new();
        for base in bases.iter() {
            for value in replacements.iter() {
                out.push(base.replace(&search, value));
            }
        }
        out
    }
}
