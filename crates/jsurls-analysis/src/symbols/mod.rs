//! Symbol table builder: the first pass.
//!
//! One pre-order walk over the tree records what each variable, object
//! property and array may hold. Forward references are not resolved: a use
//! that precedes its declaration sees whatever the tables held at that point.

mod objects;

use jsurls_core::types::ContextPolicy;
use tracing::debug;
use tree_sitter::Node;

use crate::aliases::{record_object_hints, scan_sibling_hints};
use crate::budget::VisitBudget;
use crate::context::ContextData;
use crate::parsers::{named_children, node_text, BinaryOp, NodeShape};
use crate::resolver::{member_path, string_value, Resolver, StringMethod};
use crate::tables::{merge_property, PropertyValue, ValueTables, Values};

/// Builds the value tables of one run from a syntax tree.
#[derive(Clone, Copy)]
pub struct SymbolTableBuilder<'a> {
    source: &'a str,
    placeholder: &'a str,
    context: Option<&'a ContextData>,
    policy: ContextPolicy,
}

impl<'a> SymbolTableBuilder<'a> {
    pub fn new(source: &'a str, placeholder: &'a str) -> Self {
        Self {
            source,
            placeholder,
            context: None,
            policy: ContextPolicy::default(),
        }
    }

    /// Apply `policy` to names present in `context`.
    pub fn with_context(mut self, context: Option<&'a ContextData>, policy: ContextPolicy) -> Self {
        self.context = context;
        self.policy = policy;
        self
    }

    /// Walk `root` and record into `tables`, stopping when `budget` runs out.
    pub fn build(&self, root: Node<'_>, tables: &mut ValueTables, budget: &mut VisitBudget) {
        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            if !budget.visit() {
                break;
            }
            match node.kind() {
                "lexical_declaration" | "variable_declaration" => {
                    for declarator in named_children(node) {
                        if declarator.kind() == "variable_declarator" {
                            self.declarator(declarator, node, tables);
                        }
                    }
                }
                "assignment_expression" => self.assignment(node, tables),
                _ => {}
            }
            let mut children = named_children(node);
            children.reverse();
            stack.extend(children);
        }
        debug!(
            symbols = tables.symbol_count(),
            objects = tables.object_count(),
            visited = budget.visited(),
            "symbol tables built"
        );
    }

    fn declarator(&self, declarator: Node<'_>, declaration: Node<'_>, tables: &mut ValueTables) {
        let (Some(name), Some(value)) = (
            declarator.child_by_field_name("name"),
            declarator.child_by_field_name("value"),
        ) else {
            return;
        };
        if name.kind() != "identifier" {
            return;
        }
        let name = node_text(name, self.source);
        if self.record_variable(name, value, tables) {
            scan_sibling_hints(declaration, name, self.source, tables);
        }
    }

    fn assignment(&self, node: Node<'_>, tables: &mut ValueTables) {
        let (Some(left), Some(right)) = (
            node.child_by_field_name("left"),
            node.child_by_field_name("right"),
        ) else {
            return;
        };
        match left.kind() {
            "identifier" => {
                self.record_variable(node_text(left, self.source), right, tables);
            }
            "member_expression" => self.record_property(left, right, tables),
            _ => {}
        }
    }

    /// Whether the file may contribute a value for `name` under the context policy.
    fn accepts_file_value(&self, name: &str) -> bool {
        match self.context {
            Some(context) => self.policy.uses_file_value(context.contains(name)),
            None => true,
        }
    }

    /// Record the value of `name = value`. Returns false when the policy
    /// discarded the file value.
    fn record_variable(&self, name: &str, value: Node<'_>, tables: &mut ValueTables) -> bool {
        if !self.accepts_file_value(name) {
            return false;
        }
        let value = unwrap_parens(value);
        match NodeShape::of(value) {
            NodeShape::Array => {
                let elements = self.resolver(tables).array_elements(value);
                tables.set_array(name, elements);
            }
            NodeShape::Object => {
                let map = objects::object_literal(value, &self.resolver(tables));
                let root = tables.object_mut(name);
                for (key, property) in map {
                    merge_property(root, &key, property);
                }
                record_object_hints(value, self.source, tables, None);
            }
            _ => {
                if let Some(values) = self.scalar_value(value, tables) {
                    tables.add_symbol_values(name, values);
                }
            }
        }
        true
    }

    /// `a.b.c = value` writes into the object table at `b.c` under `a`.
    fn record_property(&self, target: Node<'_>, value: Node<'_>, tables: &mut ValueTables) {
        let Some(path) = member_path(target, self.source) else {
            return;
        };
        let Some((root, rest)) = path.split_first() else {
            return;
        };
        if rest.is_empty() || !self.accepts_file_value(root) {
            return;
        }
        let value = unwrap_parens(value);
        if value.kind() == "object" {
            let map = objects::object_literal(value, &self.resolver(tables));
            tables.assign_value(root, rest, PropertyValue::Object(map));
            record_object_hints(value, self.source, tables, None);
            return;
        }
        if let Some(values) = self.scalar_value(value, tables) {
            tables.assign_property(root, rest, values);
        }
    }

    /// Values of a right-hand side that lands in the symbol table.
    ///
    /// `None` when the shape is not tracked or every value is made of
    /// placeholders only.
    fn scalar_value(&self, value: Node<'_>, tables: &ValueTables) -> Option<Values> {
        let resolver = self.resolver(tables);
        let values = match NodeShape::of(value) {
            NodeShape::String => Values::one(string_value(value, self.source)),
            NodeShape::Identifier => tables.symbol(node_text(value, self.source))?.clone(),
            NodeShape::Binary(BinaryOp::Other) => return None,
            NodeShape::Binary(op) => resolver.binary(value, op),
            NodeShape::Member => resolver.member(value),
            NodeShape::Subscript => resolver.subscript(value),
            NodeShape::Call => match crate::resolver::string_method(value, self.source)? {
                StringMethod::Join => resolver.join(value),
                StringMethod::Replace => resolver.replace(value),
                StringMethod::Concat => return None,
            },
            _ => return None,
        };
        let unknown = values
            .iter()
            .all(|v| v.replace(self.placeholder, "").is_empty());
        (!unknown).then_some(values)
    }

    fn resolver<'t>(&self, tables: &'t ValueTables) -> Resolver<'t>
    where
        'a: 't,
    {
        Resolver::new(tables, self.placeholder, self.source)
    }
}

fn unwrap_parens(node: Node<'_>) -> Node<'_> {
    let mut current = node;
    while current.kind() == "parenthesized_expression" {
        match current.named_child(0) {
            Some(inner) => current = inner,
            None => break,
        }
    }
    current
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::parse_javascript;
    use serde_json::json;

    fn build(source: &str) -> ValueTables {
        build_with(source, None, ContextPolicy::Merge)
    }

    fn build_with(source: &str, context: Option<&ContextData>, policy: ContextPolicy) -> ValueTables {
        let tree = parse_javascript(source).unwrap();
        let mut tables = ValueTables::new();
        if let Some(context) = context {
            context.populate(&mut tables);
        }
        let mut budget = VisitBudget::for_symbols(10_000);
        SymbolTableBuilder::new(source, "FUZZ")
            .with_context(context, policy)
            .build(tree.root_node(), &mut tables, &mut budget);
        tables
    }

    fn symbol(tables: &ValueTables, name: &str) -> Vec<String> {
        tables.symbol(name).map(|v| v.to_vec()).unwrap_or_default()
    }

    #[test]
    fn test_declarations_and_reassignment() {
        let tables = build("let base = '/api'; base = '/v2'; const copy = base;");
        assert_eq!(symbol(&tables, "base"), vec!["/api", "/v2"]);
        assert_eq!(symbol(&tables, "copy"), vec!["/api", "/v2"]);
    }

    #[test]
    fn test_concatenation_and_fallback() {
        let tables = build("const b = '/api'; const u = b + '/users'; const h = window.HOST || 'x.com';");
        assert_eq!(symbol(&tables, "u"), vec!["/api/users"]);
        assert_eq!(symbol(&tables, "h"), vec!["x.com"]);
    }

    #[test]
    fn test_forward_reference_unresolved() {
        let tables = build("const u = later + '/x'; const later = '/api';");
        assert_eq!(symbol(&tables, "u"), vec!["FUZZ/x"]);
    }

    #[test]
    fn test_unresolvable_has_no_entry() {
        let tables = build("const id = getId(); const n = 1 + 2;");
        assert!(tables.symbol("id").is_none());
        assert!(tables.symbol("n").is_none());
    }

    #[test]
    fn test_arrays_and_join() {
        let tables = build("const parts = ['api', 'v1']; const p = parts.join('/');");
        assert_eq!(tables.array("parts").unwrap(), &["api".to_string(), "v1".to_string()]);
        assert_eq!(symbol(&tables, "p"), vec!["api/v1"]);
    }

    #[test]
    fn test_object_literal_and_nested_write() {
        let tables = build(
            "const cfg = { api: { base: '/api' }, host: 'x.com' }; cfg.api.version = 'v2';",
        );
        assert!(matches!(
            tables.lookup_property("cfg", &["api", "base"]),
            Some(PropertyValue::Values(v)) if v.first() == Some("/api")
        ));
        assert!(matches!(
            tables.lookup_property("cfg", &["api", "version"]),
            Some(PropertyValue::Values(v)) if v.first() == Some("v2")
        ));
    }

    #[test]
    fn test_object_alias_hints() {
        let tables = build("const t = '1'; const params = { contentId: t };");
        assert_eq!(tables.aliases("t")[0].name, "contentId");
    }

    #[test]
    fn test_override_policy_discards_file_value() {
        let context = ContextData::from(
            json!({ "BASE_URL": "https://x.com" }).as_object().unwrap().clone(),
        );
        let source = "const BASE_URL = 'https://file.com';";
        let tables = build_with(source, Some(&context), ContextPolicy::Override);
        assert_eq!(symbol(&tables, "BASE_URL"), vec!["https://x.com"]);

        let tables = build_with(source, Some(&context), ContextPolicy::Merge);
        assert_eq!(symbol(&tables, "BASE_URL"), vec!["https://x.com", "https://file.com"]);
    }

    #[test]
    fn test_budget_truncates() {
        let source = "const a = '/a'; const b = '/b';";
        let tree = parse_javascript(source).unwrap();
        let mut tables = ValueTables::new();
        let mut budget = VisitBudget::for_symbols(3);
        SymbolTableBuilder::new(source, "FUZZ").build(tree.root_node(), &mut tables, &mut budget);
        assert!(budget.is_exhausted());
        assert!(tables.symbol("b").is_none());
    }
}
