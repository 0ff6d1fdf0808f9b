//! Tests for the jsurls configuration system.

use std::sync::Mutex;

use jsurls_core::config::{ConfigOverrides, ExtractConfig};
use jsurls_core::errors::{ConfigError, JsurlsErrorCode};
use jsurls_core::types::ContextPolicy;

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Clear all JSURLS_ env vars to prevent cross-test contamination.
fn clear_env_vars() {
    for key in [
        "JSURLS_PLACEHOLDER",
        "JSURLS_INCLUDE_TEMPLATES",
        "JSURLS_MAX_NODES",
        "JSURLS_MAX_FILE_SIZE_MB",
        "JSURLS_SKIP_SYMBOLS",
        "JSURLS_SKIP_ALIASES",
        "JSURLS_CONTEXT_POLICY",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
fn test_layered_resolution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("jsurls.toml"),
        r#"
placeholder = "XXX"
max_nodes = 5000
include_templates = true
"#,
    )
    .unwrap();

    std::env::set_var("JSURLS_MAX_NODES", "7000");

    let overrides = ConfigOverrides {
        placeholder: Some("PH".to_string()),
        ..Default::default()
    };

    let config = ExtractConfig::load(dir.path(), Some(&overrides)).unwrap();

    // Overrides beat env and project file
    assert_eq!(config.effective_placeholder(), "PH");
    // Env beats project file
    assert_eq!(config.effective_max_nodes(), 7000);
    // Project file beats defaults
    assert!(config.effective_include_templates());

    clear_env_vars();
}

#[test]
fn test_load_without_project_file() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();

    let dir = tempdir();
    let config = ExtractConfig::load(dir.path(), None).unwrap();
    assert_eq!(config, ExtractConfig::default());
}

#[test]
fn test_env_policy_invalid_is_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();

    std::env::set_var("JSURLS_CONTEXT_POLICY", "sometimes");
    let dir = tempdir();
    let err = ExtractConfig::load(dir.path(), None).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { .. }));
    assert_eq!(err.error_code(), "CONFIG_ERROR");

    clear_env_vars();
}

#[test]
fn test_from_toml_policy_and_extensions() {
    let config = ExtractConfig::from_toml(
        r#"
context_policy = "override"
extensions = [".vue", "SVELTE"]
"#,
    )
    .unwrap();
    assert_eq!(config.effective_context_policy(), ContextPolicy::Override);
    assert_eq!(config.extensions, vec![".vue".to_string(), "SVELTE".to_string()]);
}

#[test]
fn test_from_toml_unknown_policy() {
    let err = ExtractConfig::from_toml(r#"context_policy = "sometimes""#).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_invalid_project_file() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();

    let dir = tempdir();
    std::fs::write(dir.path().join("jsurls.toml"), "max_nodes = [").unwrap();
    let err = ExtractConfig::load(dir.path(), None).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_validation_after_merge() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();

    let dir = tempdir();
    let overrides = ConfigOverrides {
        max_file_size_mb: Some(0.0),
        ..Default::default()
    };
    let err = ExtractConfig::load(dir.path(), Some(&overrides)).unwrap_err();
    assert!(
        matches!(err, ConfigError::ValidationFailed { ref field, .. } if field == "max_file_size_mb")
    );
}

#[test]
fn test_toml_roundtrip_keeps_values() {
    let config = ExtractConfig {
        placeholder: Some("X".to_string()),
        skip_aliases: Some(true),
        context_policy: Some(ContextPolicy::Only),
        ..Default::default()
    };
    let text = config.to_toml().unwrap();
    let back = ExtractConfig::from_toml(&text).unwrap();
    assert_eq!(back, config);
}

#[test]
fn test_load_with_tracing_initialized() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();
    jsurls_core::tracing::init_tracing();
    jsurls_core::tracing::init_tracing();

    let dir = tempdir();
    std::fs::write(dir.path().join("jsurls.toml"), "max_nodes = 500\n").unwrap();
    let overrides = ConfigOverrides {
        skip_aliases: Some(true),
        ..Default::default()
    };
    let config = ExtractConfig::load(dir.path(), Some(&overrides)).unwrap();
    assert_eq!(config.effective_max_nodes(), 500);
    assert_eq!(config.skip_aliases, Some(true));
}
