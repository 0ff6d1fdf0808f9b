//! jsurls-core: shared foundation for the jsurls extraction engine.
//!
//! Holds everything that crosses the engine boundary without needing a parser:
//! - Errors: one enum per subsystem, aggregated by `ExtractError`
//! - Config: `ExtractConfig` with layered TOML/env/override resolution
//! - Tracing: `EnvFilter`-driven subscriber setup and event field names
//! - Types: candidate entries and the context collision policy

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;

pub use config::{ConfigOverrides, ExtractConfig};
pub use errors::{ConfigError, ContextError, ExtractError, JsurlsErrorCode, ParseError};
pub use types::{CandidateEntry, ContextPolicy};
