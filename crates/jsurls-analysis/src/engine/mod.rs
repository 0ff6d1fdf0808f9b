//! Pipeline entry points.
//!
//! `UrlExtractor` holds the validated configuration and parsed context and
//! can be reused across inputs. Each call runs both passes over a fresh
//! `AnalysisContext`; nested content gets its own.

mod context;
mod pipeline;

pub use context::{AnalysisContext, RunFlags};

use jsurls_core::config::ExtractConfig;
use jsurls_core::errors::ExtractError;
use jsurls_core::types::CandidateEntry;
use tracing::info;

use crate::budget::VisitBudget;
use crate::context::{parse_context_input, ContextData};
use crate::filters::JunkFilter;
use crate::generator::{CandidateList, NestedAnalysis};
use crate::markup::{extract_markup_urls, inline_scripts, is_html_document};
use crate::output::format_output;
use crate::patterns::PatternMatcher;
use pipeline::Pipeline;

/// Reusable extraction engine for one configuration and context.
#[derive(Debug)]
pub struct UrlExtractor {
    config: ExtractConfig,
    context: Option<ContextData>,
    patterns: PatternMatcher,
    junk: JunkFilter,
}

impl UrlExtractor {
    /// Validate `config` and parse its context input, if any.
    pub fn new(config: ExtractConfig) -> Result<Self, ExtractError> {
        ExtractConfig::validate(&config)?;
        let context = config
            .context
            .as_deref()
            .map(parse_context_input)
            .transpose()?;
        Ok(Self::assemble(config, context))
    }

    /// Use an already parsed context; `config.context` is ignored.
    pub fn with_context(config: ExtractConfig, context: ContextData) -> Result<Self, ExtractError> {
        ExtractConfig::validate(&config)?;
        Ok(Self::assemble(config, Some(context)))
    }

    fn assemble(config: ExtractConfig, context: Option<ContextData>) -> Self {
        let patterns = PatternMatcher::with_extensions(&config.extensions);
        let junk = JunkFilter::new(config.effective_placeholder(), patterns.clone());
        Self {
            config,
            context,
            patterns,
            junk,
        }
    }

    pub fn config(&self) -> &ExtractConfig {
        &self.config
    }

    pub fn context(&self) -> Option<&ContextData> {
        self.context.as_ref()
    }

    /// Filtered, formatted URL and path strings found in `source`.
    pub fn extract(&self, source: &str) -> Result<Vec<String>, ExtractError> {
        let (entries, flags) = self.run(source)?;
        let outputs = format_output(&entries, self.config.effective_include_templates(), &self.junk);
        info!(
            entries = entries.len(),
            outputs = outputs.len(),
            large_input = flags.large_input,
            symbols_disabled = !flags.resolve_symbols,
            aliases_disabled = !flags.infer_aliases,
            "extraction complete"
        );
        Ok(outputs)
    }

    /// Raw candidate entries before junk filtering and formatting.
    pub fn extract_entries(&self, source: &str) -> Result<Vec<CandidateEntry>, ExtractError> {
        let (entries, flags) = self.run(source)?;
        info!(
            entries = entries.len(),
            large_input = flags.large_input,
            symbols_disabled = !flags.resolve_symbols,
            aliases_disabled = !flags.infer_aliases,
            "extraction complete"
        );
        Ok(entries)
    }

    fn run(&self, source: &str) -> Result<(Vec<CandidateEntry>, RunFlags), ExtractError> {
        let flags = RunFlags::for_input(&self.config, source.len(), self.context.is_some());
        let pipeline = Pipeline::new(self, flags);
        let max_nodes = self.config.effective_max_nodes();

        if is_html_document(source) {
            let mut out = CandidateList::new();
            let mut budget = VisitBudget::for_candidates(max_nodes);
            out.extend(extract_markup_urls(source, &self.patterns));
            for script in inline_scripts(source) {
                out.extend(pipeline.analyze_nested(&script, &mut budget));
            }
            return Ok((out.into_entries(), flags));
        }

        Ok((pipeline.run(source, max_nodes)?, flags))
    }
}

/// One-shot extraction with `config`.
pub fn extract_urls(source: &str, config: &ExtractConfig) -> Result<Vec<String>, ExtractError> {
    UrlExtractor::new(config.clone())?.extract(source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = ExtractConfig {
            placeholder: Some(String::new()),
            ..Default::default()
        };
        assert!(matches!(UrlExtractor::new(config), Err(ExtractError::Config(_))));
    }

    #[test]
    fn test_malformed_context_is_rejected() {
        let config = ExtractConfig {
            context: Some("{not json".to_string()),
            ..Default::default()
        };
        assert!(matches!(UrlExtractor::new(config), Err(ExtractError::Context(_))));
    }

    #[test]
    fn test_extract_basic() {
        let urls = extract_urls(r#"fetch("/api/users");"#, &ExtractConfig::default()).unwrap();
        assert_eq!(urls, vec!["/api/users"]);
    }

    #[test]
    fn test_extractor_is_reusable() {
        let extractor = UrlExtractor::new(ExtractConfig::default()).unwrap();
        let a = extractor.extract(r#"const a = "/one/path";"#).unwrap();
        let b = extractor.extract(r#"const b = "/two/path";"#).unwrap();
        assert_eq!(a, vec!["/one/path"]);
        assert_eq!(b, vec!["/two/path"]);
    }

    #[test]
    fn test_nested_run_is_charged_to_caller() {
        let extractor = UrlExtractor::new(ExtractConfig::default()).unwrap();
        let script = r#"fetch("/api/users");"#;
        let flags = RunFlags::for_input(extractor.config(), script.len(), false);
        let pipeline = Pipeline::new(&extractor, flags);

        let mut budget = VisitBudget::for_candidates(1_000);
        let entries = pipeline.analyze_nested(script, &mut budget);
        assert_eq!(entries[0].original, "/api/users");
        assert!(budget.visited() > 0);
        assert!(budget.remaining() < 1_000);

        let mut spent = VisitBudget::for_candidates(0);
        assert!(pipeline.analyze_nested(script, &mut spent).is_empty());
    }

    #[test]
    fn test_document_scripts_share_one_budget() {
        let scripts: String = (0..40)
            .map(|i| format!(r#"<script>fetch("/api/item{i}/details");</script>"#))
            .collect();
        let html = format!("<!DOCTYPE html><html><body>{scripts}</body></html>");
        let config = ExtractConfig {
            max_nodes: Some(50),
            ..Default::default()
        };
        let urls = extract_urls(&html, &config).unwrap();
        assert!(urls.contains(&"/api/item0/details".to_string()));
        assert!(urls.len() < 40, "{} scripts analyzed past the budget", urls.len());
    }
}
