//! Stable error codes for callers that match on error class rather than message.

/// Every error enum implements this to expose a structured code string.
pub trait JsurlsErrorCode {
    /// Returns the error code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn code_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const CONTEXT_ERROR: &str = "CONTEXT_ERROR";
pub const PARSE_ERROR: &str = "PARSE_ERROR";
pub const GRAMMAR_ERROR: &str = "GRAMMAR_ERROR";
