//! Extraction configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{
    BYTES_PER_MB, CONFIG_FILE_NAME, DEFAULT_MAX_FILE_SIZE_MB, DEFAULT_MAX_NODES,
    DEFAULT_PLACEHOLDER,
};
use crate::errors::ConfigError;
use crate::types::ContextPolicy;

/// Options recognised by the extraction engine.
///
/// Resolution order (highest priority first):
/// 1. Explicit overrides (applied via `apply_overrides`)
/// 2. Environment variables (`JSURLS_*`)
/// 3. Project config (`jsurls.toml` in the project root)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ExtractConfig {
    /// Token for unresolved values. Default: "FUZZ".
    pub placeholder: Option<String>,
    /// Emit `{name}` forms in addition to resolved forms. Default: false.
    pub include_templates: Option<bool>,
    /// Per-pass node-visit budget. Default: 1,000,000.
    pub max_nodes: Option<usize>,
    /// Input size in MiB above which symbol/alias resolution auto-disables. Default: 1.0.
    pub max_file_size_mb: Option<f64>,
    /// Force-disable the symbol table pass. Default: false.
    pub skip_symbols: Option<bool>,
    /// Force-disable alias inference. Default: false.
    pub skip_aliases: Option<bool>,
    /// Raw context input: a file path, a JSON object, or `KEY=VALUE` pairs.
    pub context: Option<String>,
    /// Collision policy for context names. Default: merge.
    pub context_policy: Option<ContextPolicy>,
    /// Additional filename extensions recognised by the filename predicate.
    #[serde(default)]
    pub extensions: Vec<String>,
}

/// Explicit override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub placeholder: Option<String>,
    pub include_templates: Option<bool>,
    pub max_nodes: Option<usize>,
    pub max_file_size_mb: Option<f64>,
    pub skip_symbols: Option<bool>,
    pub skip_aliases: Option<bool>,
    pub context: Option<String>,
    pub context_policy: Option<ContextPolicy>,
    pub extensions: Vec<String>,
}

impl ExtractConfig {
    pub fn effective_placeholder(&self) -> &str {
        self.placeholder.as_deref().unwrap_or(DEFAULT_PLACEHOLDER)
    }

    pub fn effective_include_templates(&self) -> bool {
        self.include_templates.unwrap_or(false)
    }

    pub fn effective_max_nodes(&self) -> usize {
        self.max_nodes.unwrap_or(DEFAULT_MAX_NODES)
    }

    pub fn effective_max_file_size_mb(&self) -> f64 {
        self.max_file_size_mb.unwrap_or(DEFAULT_MAX_FILE_SIZE_MB)
    }

    pub fn effective_skip_symbols(&self) -> bool {
        self.skip_symbols.unwrap_or(false)
    }

    pub fn effective_skip_aliases(&self) -> bool {
        self.skip_aliases.unwrap_or(false)
    }

    pub fn effective_context_policy(&self) -> ContextPolicy {
        self.context_policy.unwrap_or_default()
    }

    /// Whether an input of `len` bytes exceeds the size threshold.
    pub fn is_large_input(&self, len: usize) -> bool {
        (len as f64 / BYTES_PER_MB) > self.effective_max_file_size_mb()
    }

    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(CONFIG_FILE_NAME);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
            debug!(path = %project_config_path.display(), "merged project config");
        }

        Self::apply_env_overrides(&mut config)?;

        if let Some(overrides) = overrides {
            Self::apply_overrides(&mut config, overrides);
        }

        Self::validate(&config)?;
        debug!(
            placeholder = config.effective_placeholder(),
            max_nodes = config.effective_max_nodes(),
            include_templates = config.effective_include_templates(),
            has_context = config.context.is_some(),
            overridden = overrides.is_some(),
            "extraction config resolved"
        );
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &ExtractConfig) -> Result<(), ConfigError> {
        if let Some(ref placeholder) = config.placeholder {
            if placeholder.is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "placeholder".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        if config.max_nodes == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "max_nodes".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if let Some(size) = config.max_file_size_mb {
            if !(size > 0.0) {
                return Err(ConfigError::ValidationFailed {
                    field: "max_file_size_mb".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        if let Some(ref context) = config.context {
            if context.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "context".to_string(),
                    message: "must not be empty when set".to_string(),
                });
            }
        }
        Ok(())
    }

    fn merge_toml_file(config: &mut ExtractConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: ExtractConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it has a value.
    fn merge(base: &mut ExtractConfig, other: &ExtractConfig) {
        if other.placeholder.is_some() {
            base.placeholder = other.placeholder.clone();
        }
        if other.include_templates.is_some() {
            base.include_templates = other.include_templates;
        }
        if other.max_nodes.is_some() {
            base.max_nodes = other.max_nodes;
        }
        if other.max_file_size_mb.is_some() {
            base.max_file_size_mb = other.max_file_size_mb;
        }
        if other.skip_symbols.is_some() {
            base.skip_symbols = other.skip_symbols;
        }
        if other.skip_aliases.is_some() {
            base.skip_aliases = other.skip_aliases;
        }
        if other.context.is_some() {
            base.context = other.context.clone();
        }
        if other.context_policy.is_some() {
            base.context_policy = other.context_policy;
        }
        if !other.extensions.is_empty() {
            base.extensions = other.extensions.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Unparseable numbers and booleans are ignored; an unknown policy is an error.
    fn apply_env_overrides(config: &mut ExtractConfig) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var("JSURLS_PLACEHOLDER") {
            config.placeholder = Some(val);
        }
        if let Ok(val) = std::env::var("JSURLS_INCLUDE_TEMPLATES") {
            if let Ok(v) = val.parse::<bool>() {
                config.include_templates = Some(v);
            }
        }
        if let Ok(val) = std::env::var("JSURLS_MAX_NODES") {
            if let Ok(v) = val.parse::<usize>() {
                config.max_nodes = Some(v);
            }
        }
        if let Ok(val) = std::env::var("JSURLS_MAX_FILE_SIZE_MB") {
            if let Ok(v) = val.parse::<f64>() {
                config.max_file_size_mb = Some(v);
            }
        }
        if let Ok(val) = std::env::var("JSURLS_SKIP_SYMBOLS") {
            if let Ok(v) = val.parse::<bool>() {
                config.skip_symbols = Some(v);
            }
        }
        if let Ok(val) = std::env::var("JSURLS_SKIP_ALIASES") {
            if let Ok(v) = val.parse::<bool>() {
                config.skip_aliases = Some(v);
            }
        }
        if let Ok(val) = std::env::var("JSURLS_CONTEXT_POLICY") {
            config.context_policy = Some(val.parse()?);
        }
        Ok(())
    }

    /// Apply explicit overrides (highest priority).
    pub fn apply_overrides(config: &mut ExtractConfig, overrides: &ConfigOverrides) {
        if let Some(ref v) = overrides.placeholder {
            config.placeholder = Some(v.clone());
        }
        if let Some(v) = overrides.include_templates {
            config.include_templates = Some(v);
        }
        if let Some(v) = overrides.max_nodes {
            config.max_nodes = Some(v);
        }
        if let Some(v) = overrides.max_file_size_mb {
            config.max_file_size_mb = Some(v);
        }
        if let Some(v) = overrides.skip_symbols {
            config.skip_symbols = Some(v);
        }
        if let Some(v) = overrides.skip_aliases {
            config.skip_aliases = Some(v);
        }
        if let Some(ref v) = overrides.context {
            config.context = Some(v.clone());
        }
        if let Some(v) = overrides.context_policy {
            config.context_policy = Some(v);
        }
        if !overrides.extensions.is_empty() {
            config.extensions = overrides.extensions.clone();
        }
    }
}
