//! Object literal contents.

use tree_sitter::Node;

use crate::parsers::{named_children, node_text, NodeShape};
use crate::resolver::{string_value, Resolver};
use crate::tables::{merge_property, ObjectMap, PropertyValue, Values};

/// Property structure of an object literal, nested objects included.
///
/// Keys are identifiers, strings or numbers; computed keys and spreads are
/// skipped. Unknown identifiers record the placeholder so the property still
/// exists; shapes the resolver cannot evaluate are left out.
pub(super) fn object_literal(object: Node<'_>, resolver: &Resolver<'_>) -> ObjectMap {
    let mut map = ObjectMap::default();
    for member in named_children(object) {
        match member.kind() {
            "pair" => {
                let (Some(key), Some(value)) = (
                    member.child_by_field_name("key"),
                    member.child_by_field_name("value"),
                ) else {
                    continue;
                };
                let Some(key) = property_key(key, resolver.source) else {
                    continue;
                };
                if let Some(property) = property_value(value, resolver) {
                    merge_property(&mut map, &key, property);
                }
            }
            "shorthand_property_identifier" => {
                let name = node_text(member, resolver.source);
                let values = resolver.identifier(member);
                merge_property(&mut map, name, PropertyValue::Values(values));
            }
            _ => {}
        }
    }
    map
}

fn property_key(key: Node<'_>, source: &str) -> Option<String> {
    match key.kind() {
        "string" => Some(string_value(key, source)),
        "property_identifier" | "number" | "private_property_identifier" => {
            Some(node_text(key, source).to_string())
        }
        _ => None,
    }
}

fn property_value(value: Node<'_>, resolver: &Resolver<'_>) -> Option<PropertyValue> {
    let values = match NodeShape::of(value) {
        NodeShape::Object => return Some(PropertyValue::Object(object_literal(value, resolver))),
        NodeShape::String => {
            let text = string_value(value, resolver.source);
            if text.is_empty() {
                return None;
            }
            Values::one(text)
        }
        NodeShape::Identifier => resolver.identifier(value),
        NodeShape::Binary(_) | NodeShape::Member | NodeShape::Subscript => resolver.resolve(value),
        _ => return None,
    };
    Some(PropertyValue::Values(values))
}
