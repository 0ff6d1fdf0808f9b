//! Expression resolver: the statically known string values of an expression.
//!
//! Resolution never fails. Shapes it cannot evaluate resolve to the
//! placeholder, so callers always get at least one value back.

mod calls;
mod member;
mod product;
mod strings;

pub use calls::{string_method, StringMethod};
pub use member::member_path;
pub use product::cartesian_concat;
pub use strings::{decode_js_string, string_value};

use tree_sitter::Node;

use crate::parsers::{node_text, BinaryOp, NodeShape};
use crate::tables::{ValueTables, Values};

/// Read-only view over one run's tables.
#[derive(Clone, Copy)]
pub struct Resolver<'a> {
    pub tables: &'a ValueTables,
    pub placeholder: &'a str,
    pub source: &'a str,
}

impl<'a> Resolver<'a> {
    pub fn new(tables: &'a ValueTables, placeholder: &'a str, source: &'a str) -> Self {
        Self {
            tables,
            placeholder,
            source,
        }
    }

    pub fn placeholder_values(&self) -> Values {
        Values::one(self.placeholder)
    }

    /// All values `node` may evaluate to; `[placeholder]` when unknown.
    pub fn resolve(&self, node: Node<'_>) -> Values {
        match NodeShape::of(node) {
            NodeShape::String => Values::one(string_value(node, self.source)),
            NodeShape::Identifier => self.identifier(node),
            NodeShape::Member => self.member(node),
            NodeShape::Subscript => self.subscript(node),
            NodeShape::Binary(op) => self.binary(node, op),
            NodeShape::Call => self.call(node),
            _ if node.kind() == "parenthesized_expression" => match node.named_child(0) {
                Some(inner) => self.resolve(inner),
                None => self.placeholder_values(),
            },
            _ => self.placeholder_values(),
        }
    }

    /// Symbol values of an identifier, or `[placeholder]`.
    pub fn identifier(&self, node: Node<'_>) -> Values {
        self.tables
            .symbol(node_text(node, self.source))
            .cloned()
            .unwrap_or_else(|| self.placeholder_values())
    }

    /// `+` is the cross product of both sides; `||` and `&&` yield the right side.
    pub fn binary(&self, node: Node<'_>, op: BinaryOp) -> Values {
        let (Some(left), Some(right)) = (
            node.child_by_field_name("left"),
            node.child_by_field_name("right"),
        ) else {
            return self.placeholder_values();
        };
        match op {
            BinaryOp::Add => {
                let left = self.resolve(left).or_placeholder(self.placeholder);
                let right = self.resolve(right).or_placeholder(self.placeholder);
                cartesian_concat(&[left, right])
            }
            BinaryOp::Or | BinaryOp::And => self.resolve(right).or_placeholder(self.placeholder),
            BinaryOp::Other => self.placeholder_values(),
        }
    }

    /// `.join(sep)` and `.replace(search, value)`; any other call is unknown.
    pub fn call(&self, node: Node<'_>) -> Values {
        match string_method(node, self.source) {
            Some(StringMethod::Join) => self.join(node),
            Some(StringMethod::Replace) => self.replace(node),
            _ => self.placeholder_values(),
        }
    }
}
