//! Parser errors.

use super::error_code::{self, JsurlsErrorCode};

/// Errors that can occur while producing a syntax tree.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Failed to load JavaScript grammar: {message}")]
    GrammarLoad { message: String },

    #[error("Tree-sitter produced no tree: {message}")]
    Failed { message: String },
}

impl JsurlsErrorCode for ParseError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::GrammarLoad { .. } => error_code::GRAMMAR_ERROR,
            Self::Failed { .. } => error_code::PARSE_ERROR,
        }
    }
}
