//! Shared constants for the jsurls extraction engine.

/// Token substituted for values that cannot be determined statically.
pub const DEFAULT_PLACEHOLDER: &str = "FUZZ";

/// Per-pass node-visit budget.
pub const DEFAULT_MAX_NODES: usize = 1_000_000;

/// Input size (MiB) above which symbol and alias resolution auto-disable.
pub const DEFAULT_MAX_FILE_SIZE_MB: f64 = 1.0;

/// Bytes per size unit used for `max_file_size_mb`.
pub const BYTES_PER_MB: f64 = 1_048_576.0;

/// Project config file name looked up by `ExtractConfig::load`.
pub const CONFIG_FILE_NAME: &str = "jsurls.toml";

/// Lexical nesting depth searched for alias hints around a use site.
pub const ALIAS_SEARCH_DEPTH: usize = 15;
