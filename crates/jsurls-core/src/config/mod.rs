//! Configuration system for jsurls.
//! TOML-based, 3-layer resolution: overrides > env > project > defaults.

pub mod extract_config;

pub use extract_config::{ConfigOverrides, ExtractConfig};
