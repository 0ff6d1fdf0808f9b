//! Member and subscript access.

use tree_sitter::Node;

use super::{string_value, Resolver};
use crate::parsers::{node_text, NodeShape};
use crate::tables::{PropertyValue, Values};

/// Dotted path of a member chain rooted at an identifier: `a.b.c` -> `[a, b, c]`.
pub fn member_path<'s>(node: Node<'_>, source: &'s str) -> Option<Vec<&'s str>> {
    let mut segments = Vec::new();
    let mut current = node;
    loop {
        match current.kind() {
            "member_expression" => {
                let property = current.child_by_field_name("property")?;
                segments.push(node_text(property, source));
                current = current.child_by_field_name("object")?;
            }
            "identifier" | "this" => {
                segments.push(node_text(current, source));
                break;
            }
            _ => return None,
        }
    }
    segments.reverse();
    Some(segments)
}

impl Resolver<'_> {
    /// Context symbols for the full path win, then location defaults, then the object table.
    pub fn member(&self, node: Node<'_>) -> Values {
        let Some(path) = member_path(node, self.source) else {
            return self.placeholder_values();
        };

        if let Some(values) = self.tables.symbol(&path.join(".")) {
            return values.clone();
        }

        if let Some(property) = location_property(&path) {
            return Values::one(location_default(property, self.placeholder));
        }

        match self.tables.lookup_property(path[0], &path[1..]) {
            Some(PropertyValue::Values(values)) if !values.is_empty() => values.clone(),
            _ => self.placeholder_values(),
        }
    }

    /// `obj[key]` with a string or identifier key (possibly multi-valued).
    pub fn subscript(&self, node: Node<'_>) -> Values {
        let (Some(object), Some(index)) = (
            node.child_by_field_name("object"),
            node.child_by_field_name("index"),
        ) else {
            return self.placeholder_values();
        };

        if index.kind() == "number" {
            if let Some(values) = self.array_element(object, index) {
                return values;
            }
            return self.placeholder_values();
        }

        let keys = match NodeShape::of(index) {
            NodeShape::String => Values::one(string_value(index, self.source)),
            NodeShape::Identifier => match self.tables.symbol(node_text(index, self.source)) {
                Some(values) => values.clone(),
                None => return self.placeholder_values(),
            },
            _ => return self.placeholder_values(),
        };

        let Some(base) = member_path(object, self.source) else {
            return self.placeholder_values();
        };

        let mut found = Values::new();
        for key in keys.iter() {
            let mut path: Vec<&str> = base[1..].to_vec();
            path.push(key);
            if let Some(PropertyValue::Values(values)) = self.tables.lookup_property(base[0], &path) {
                found.extend_from(values);
            }
        }
        found.or_placeholder(self.placeholder)
    }

    fn array_element(&self, object: Node<'_>, index: Node<'_>) -> Option<Values> {
        if object.kind() != "identifier" {
            return None;
        }
        let position: usize = node_text(index, self.source).parse().ok()?;
        let elements = self.tables.array(node_text(object, self.source))?;
        elements.get(position).map(|v| Values::one(v.as_str()))
    }
}

/// The property read from `window.location.*` or `location.*`, if that is the shape.
fn location_property<'p>(path: &[&'p str]) -> Option<&'p str> {
    match path {
        ["window", "location", property, ..] => Some(*property),
        ["location", property, ..] => Some(*property),
        _ => None,
    }
}

fn location_default(property: &str, placeholder: &str) -> String {
    match property {
        "protocol" => "https:".to_string(),
        "origin" => format!("https://{placeholder}"),
        "pathname" => format!("/{placeholder}"),
        "port" | "search" | "hash" => String::new(),
        _ => placeholder.to_string(),
    }
}
