//! String literals and markup found inside them.

use jsurls_core::types::CandidateEntry;
use tree_sitter::Node;

use super::prose::{embedded_urls, prose_urls};
use super::{CandidateGenerator, CandidateList};
use crate::budget::VisitBudget;
use crate::markup::{extract_markup_urls, inline_scripts};
use crate::output::{convert_route_params, replace_template_markers};
use crate::resolver::string_value;

impl CandidateGenerator<'_> {
    /// Prose first, then markup, then the literal as a URL or path, then
    /// any URLs embedded in it.
    pub(super) fn string_literal(
        &self,
        node: Node<'_>,
        budget: &mut VisitBudget,
        out: &mut CandidateList,
    ) {
        let text = string_value(node, self.source);
        if text.is_empty() {
            return;
        }
        if let Some(urls) = prose_urls(&text, self.placeholder) {
            out.extend(urls);
            return;
        }
        if self.markup(&text, budget, out) {
            return;
        }
        if self.is_url_or_path(&text) {
            out.push(self.route_entry(&text));
            return;
        }
        out.extend(embedded_urls(&text));
    }

    /// Attribute URLs of a markup fragment. Inline scripts are analyzed by a
    /// nested run. Returns whether the fragment yielded any attribute URLs.
    pub(super) fn markup(
        &self,
        text: &str,
        budget: &mut VisitBudget,
        out: &mut CandidateList,
    ) -> bool {
        if !(text.contains('<') && text.contains('>')) {
            return false;
        }
        for script in inline_scripts(text) {
            out.extend(self.nested.analyze_nested(&script, budget));
        }
        let entries = extract_markup_urls(text, self.patterns);
        let found = !entries.is_empty();
        out.extend(entries);
        found
    }

    /// A static string, templated when it carries `:name` or `[name]` route parameters.
    pub(super) fn route_entry(&self, text: &str) -> CandidateEntry {
        let conversion = convert_route_params(text);
        if conversion.has_params {
            let placeholder = replace_template_markers(&conversion.converted, self.placeholder);
            CandidateEntry::templated(conversion.converted, placeholder, None)
        } else {
            CandidateEntry::literal(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::generator::test_support::{entries, originals, templated};

    #[test]
    fn test_literal_paths_and_urls() {
        let found = originals(r#"fetch("/api/users"); go("https://example.com/a");"#);
        assert!(found.contains(&"/api/users".to_string()));
        assert!(found.contains(&"https://example.com/a".to_string()));
    }

    #[test]
    fn test_route_params_become_templates() {
        let found = templated(r#"route("/users/:id/posts/[slug]");"#);
        assert_eq!(
            found,
            vec![("/users/{id}/posts/{slug}".to_string(), "/users/FUZZ/posts/FUZZ".to_string())]
        );
    }

    #[test]
    fn test_prose_yields_only_urls() {
        let found = originals(
            r#"log("Warning: this API has been deprecated, see https://docs.example.com/migrate");"#,
        );
        assert_eq!(found, vec!["https://docs.example.com/migrate"]);
    }

    #[test]
    fn test_markup_attributes() {
        let found = entries(r#"el.innerHTML = '<a href="/help">Help</a><img src="/logo.png">';"#, true);
        let found: Vec<_> = found.into_iter().map(|e| e.original).collect();
        assert!(found.contains(&"/help".to_string()));
        assert!(found.contains(&"/logo.png".to_string()));
    }

    #[test]
    fn test_embedded_url_in_plain_text() {
        let found = originals(r#"x = "mirror=https://cdn.example.com/pkg";"#);
        assert!(found.contains(&"https://cdn.example.com/pkg".to_string()));
    }
}
