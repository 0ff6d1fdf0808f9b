//! Classification of syntax nodes into the shapes the engine understands.

use tree_sitter::Node;

/// Operator of a binary expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    /// `+`
    Add,
    /// `||`
    Or,
    /// `&&`
    And,
    /// Any other operator; never contributes string values.
    Other,
}

/// Node shapes the resolver and both passes dispatch on.
///
/// Anything outside this set is `Other`, which always resolves to the placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeShape {
    String,
    TemplateString,
    Identifier,
    Member,
    Subscript,
    Binary(BinaryOp),
    Call,
    Array,
    Object,
    Comment,
    HashBang,
    Other,
}

impl NodeShape {
    pub fn of(node: Node<'_>) -> Self {
        match node.kind() {
            "string" => Self::String,
            "template_string" => Self::TemplateString,
            "identifier" => Self::Identifier,
            "member_expression" => Self::Member,
            "subscript_expression" => Self::Subscript,
            "binary_expression" => Self::Binary(BinaryOp::of(node)),
            "call_expression" => Self::Call,
            "array" => Self::Array,
            "object" => Self::Object,
            "comment" => Self::Comment,
            "hash_bang_line" => Self::HashBang,
            _ => Self::Other,
        }
    }
}

impl BinaryOp {
    fn of(node: Node<'_>) -> Self {
        match node.child_by_field_name("operator").map(|op| op.kind()) {
            Some("+") => Self::Add,
            Some("||") => Self::Or,
            Some("&&") => Self::And,
            _ => Self::Other,
        }
    }
}
