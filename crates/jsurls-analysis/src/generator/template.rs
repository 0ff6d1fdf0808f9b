//! Template strings.

use jsurls_core::types::CandidateEntry;
use tree_sitter::Node;

use super::prose::prose_urls;
use super::{CandidateGenerator, CandidateList};
use crate::aliases::DisplayNames;
use crate::budget::VisitBudget;
use crate::filters::consolidate_adjacent_placeholders;
use crate::output::{convert_route_params, replace_template_markers};
use crate::parsers::{base_identifier, named_children, node_text, NodeShape};
use crate::resolver::{cartesian_concat, decode_js_string};
use crate::tables::Values;

/// A template string rendered two ways.
#[derive(Debug)]
pub(super) struct TemplateRendering {
    /// `{name}` for each substitution, literal text elsewhere.
    pub original: String,
    /// Every combination of known substitution values.
    pub renderings: Values,
    pub has_substitutions: bool,
    /// Whether literal text carried `:name` or `[name]` route parameters.
    pub has_route_params: bool,
}

impl CandidateGenerator<'_> {
    pub(super) fn render_template(&self, node: Node<'_>) -> TemplateRendering {
        let children = named_children(node);
        let substitutions: Vec<Node<'_>> = children
            .iter()
            .filter(|c| c.kind() == "template_substitution")
            .filter_map(|c| c.named_child(0))
            .collect();
        let variables = substitutions.iter().filter_map(|expr| match NodeShape::of(*expr) {
            NodeShape::Identifier => Some(node_text(*expr, self.source)),
            NodeShape::Member => base_identifier(*expr, self.source),
            _ => None,
        });
        let display = DisplayNames::for_site(
            node,
            variables,
            self.source,
            self.tables,
            self.aliases_enabled,
        );
        let resolver = self.resolver();

        let mut original = String::new();
        let mut positions = Vec::with_capacity(children.len());
        let mut has_substitutions = false;
        let mut has_route_params = false;
        for child in children {
            match child.kind() {
                "string_fragment" => {
                    let conversion = convert_route_params(&decode_js_string(node_text(child, self.source)));
                    has_route_params |= conversion.has_params;
                    original.push_str(&conversion.converted);
                    positions.push(Values::one(conversion.converted));
                }
                "escape_sequence" => {
                    let decoded = decode_js_string(node_text(child, self.source));
                    original.push_str(&decoded);
                    positions.push(Values::one(decoded));
                }
                "template_substitution" => {
                    has_substitutions = true;
                    let Some(expr) = child.named_child(0) else {
                        continue;
                    };
                    let text = node_text(expr, self.source);
                    let (name, values) = match NodeShape::of(expr) {
                        NodeShape::Identifier => {
                            (display.get(text).to_string(), resolver.identifier(expr))
                        }
                        NodeShape::Member => {
                            let name = match base_identifier(expr, self.source) {
                                Some(base) => text.replacen(base, display.get(base), 1),
                                None => text.to_string(),
                            };
                            (name, resolver.member(expr))
                        }
                        _ => (text.to_string(), resolver.placeholder_values()),
                    };
                    original.push('{');
                    original.push_str(&name);
                    original.push('}');
                    positions.push(values.or_placeholder(self.placeholder));
                }
                _ => {}
            }
        }

        TemplateRendering {
            original,
            renderings: cartesian_concat(&positions),
            has_substitutions,
            has_route_params,
        }
    }

    pub(super) fn template_string(
        &self,
        node: Node<'_>,
        budget: &mut VisitBudget,
        out: &mut CandidateList,
    ) {
        let rendering = self.render_template(node);

        if !rendering.has_substitutions {
            let text = rendering.original;
            if text.is_empty() || self.markup(&text, budget, out) {
                return;
            }
            if !self.is_url_or_path(&text) {
                return;
            }
            let entry = if rendering.has_route_params {
                let placeholder = replace_template_markers(&text, self.placeholder);
                CandidateEntry::templated(text, placeholder, None)
            } else {
                CandidateEntry::literal(text)
            };
            out.push(entry);
            return;
        }

        let original_is_url = self.is_url_or_path(&rendering.original);
        let original = convert_route_params(&rendering.original).converted;
        for combo in rendering.renderings.iter() {
            if let Some(urls) = prose_urls(combo, self.placeholder) {
                out.extend(urls);
                continue;
            }
            if !(original_is_url || self.is_url_or_path(combo)) {
                continue;
            }
            let resolved = convert_route_params(combo).converted;
            let placeholder = consolidate_adjacent_placeholders(
                &replace_template_markers(&resolved, self.placeholder),
                self.placeholder,
            );
            out.push(CandidateEntry::templated(original.clone(), placeholder, None));
        }
    }
}
