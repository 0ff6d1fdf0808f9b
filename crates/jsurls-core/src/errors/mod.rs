//! Error handling for jsurls.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod context_error;
pub mod error_code;
pub mod extract_error;
pub mod parse_error;

pub use config_error::ConfigError;
pub use context_error::ContextError;
pub use error_code::JsurlsErrorCode;
pub use extract_error::ExtractError;
pub use parse_error::ParseError;
