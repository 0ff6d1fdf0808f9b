//! jsurls-analysis: two-pass URL and path extraction over JavaScript.
//!
//! Pass 1 walks the syntax tree once and records what variables, object
//! properties and arrays may hold. Pass 2 walks it again and turns string
//! literals, concatenations, template strings and comments into candidate
//! entries, substituting known values and the placeholder for the rest.
//! Candidates are then junk-filtered and formatted.
//!
//! ```no_run
//! use jsurls_analysis::extract_urls;
//! use jsurls_core::ExtractConfig;
//!
//! let urls = extract_urls("fetch(`/users/${id}`)", &ExtractConfig::default())?;
//! # Ok::<(), jsurls_core::ExtractError>(())
//! ```

pub mod aliases;
pub mod budget;
pub mod context;
pub mod engine;
pub mod filters;
pub mod generator;
pub mod markup;
pub mod output;
pub mod parsers;
pub mod patterns;
pub mod resolver;
pub mod symbols;
pub mod tables;

pub use context::{parse_context_input, ContextData};
pub use engine::{extract_urls, AnalysisContext, RunFlags, UrlExtractor};
pub use filters::JunkFilter;
pub use generator::{CandidateGenerator, CandidateList, NestedAnalysis};
pub use jsurls_core::types::{CandidateEntry, ContextPolicy};
pub use patterns::PatternMatcher;
pub use symbols::SymbolTableBuilder;
pub use tables::ValueTables;
