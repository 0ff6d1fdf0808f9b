//! JavaScript parser and node access helpers.

use jsurls_core::errors::ParseError;
use tree_sitter::{Node, Parser, Tree};

/// Parse `source` into a fresh syntax tree.
///
/// Tree-sitter is error tolerant, so malformed input still yields a tree
/// with ERROR nodes; an error here means the grammar or parser failed.
pub fn parse_javascript(source: &str) -> Result<Tree, ParseError> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_javascript::LANGUAGE.into())
        .map_err(|e| ParseError::GrammarLoad {
            message: e.to_string(),
        })?;
    parser.parse(source, None).ok_or_else(|| ParseError::Failed {
        message: format!("no tree for {} bytes of input", source.len()),
    })
}

/// Source text spanned by `node`.
pub fn node_text<'s>(node: Node<'_>, source: &'s str) -> &'s str {
    source.get(node.start_byte()..node.end_byte()).unwrap_or("")
}

/// Text of the child in field `name`, if present.
pub fn field_text<'s>(node: Node<'_>, name: &str, source: &'s str) -> Option<&'s str> {
    node.child_by_field_name(name).map(|n| node_text(n, source))
}

/// Named children of `node`, in source order.
pub fn named_children<'t>(node: Node<'t>) -> Vec<Node<'t>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor).collect()
}

/// The innermost identifier a member chain hangs off: `a` for `a.b.c`.
pub fn base_identifier<'s>(node: Node<'_>, source: &'s str) -> Option<&'s str> {
    let mut current = node;
    while current.kind() == "member_expression" {
        let object = current.child_by_field_name("object")?;
        if object.kind() == "identifier" {
            return Some(node_text(object, source));
        }
        current = object;
    }
    None
}

/// A `receiver.method(args)` call.
#[derive(Debug, Clone)]
pub struct MethodCall<'t, 's> {
    pub method: &'s str,
    pub receiver: Option<Node<'t>>,
    pub arguments: Vec<Node<'t>>,
}

/// Decompose a call expression whose callee is a member access.
pub fn method_call<'t, 's>(node: Node<'t>, source: &'s str) -> Option<MethodCall<'t, 's>> {
    if node.kind() != "call_expression" {
        return None;
    }
    let function = node.child_by_field_name("function")?;
    if function.kind() != "member_expression" {
        return None;
    }
    let method = field_text(function, "property", source)?;
    let arguments = node
        .child_by_field_name("arguments")
        .map(named_children)
        .unwrap_or_default();
    Some(MethodCall {
        method,
        receiver: function.child_by_field_name("object"),
        arguments,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_method_call() {
        let source = "parts.join('/');";
        let tree = parse_javascript(source).unwrap();
        let root = tree.root_node();
        let statement = root.named_child(0).unwrap();
        let call = statement.named_child(0).unwrap();
        let mc = method_call(call, source).unwrap();
        assert_eq!(mc.method, "join");
        assert_eq!(node_text(mc.receiver.unwrap(), source), "parts");
        assert_eq!(mc.arguments.len(), 1);
    }

    #[test]
    fn test_base_identifier() {
        let source = "a.b.c;";
        let tree = parse_javascript(source).unwrap();
        let member = tree.root_node().named_child(0).unwrap().named_child(0).unwrap();
        assert_eq!(base_identifier(member, source), Some("a"));
    }

    #[test]
    fn test_malformed_input_still_parses() {
        let tree = parse_javascript("const = = ;;; {").unwrap();
        assert!(tree.root_node().has_error());
    }
}
