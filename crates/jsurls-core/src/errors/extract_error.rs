//! Top-level extraction errors.

use super::error_code::JsurlsErrorCode;
use super::{ConfigError, ContextError, ParseError};

/// Errors returned by the public extraction entry points.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Context error: {0}")]
    Context(#[from] ContextError),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
}

impl JsurlsErrorCode for ExtractError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Context(e) => e.error_code(),
            Self::Parse(e) => e.error_code(),
        }
    }
}
