//! Errors raised while parsing externally supplied context.

use super::error_code::{self, JsurlsErrorCode};

/// Malformed context input. Always surfaced to the caller as a usage error.
#[derive(Debug, thiserror::Error)]
pub enum ContextError {
    #[error("Context input is empty")]
    EmptyInput,

    #[error("Failed to read context file {path}: {message}")]
    Io { path: String, message: String },

    #[error("Invalid JSON context: {message}")]
    InvalidJson { message: String },

    #[error("JSON context must be an object, got {found}")]
    NotAnObject { found: String },

    #[error("Invalid context item '{item}': expected KEY=VALUE")]
    MissingSeparator { item: String },

    #[error("Invalid context item '{item}': key is empty")]
    EmptyKey { item: String },
}

impl JsurlsErrorCode for ContextError {
    fn error_code(&self) -> &'static str {
        error_code::CONTEXT_ERROR
    }
}
