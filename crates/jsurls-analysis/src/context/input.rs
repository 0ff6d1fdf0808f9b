//! Context input detection: file path, JSON object, or `KEY=VALUE` pairs.

use std::path::Path;

use jsurls_core::errors::ContextError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

use super::ContextData;

static ITEM_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"[,\s]+").unwrap());

/// Parse context input, trying in order: an existing file holding a JSON
/// object, an inline JSON object, then comma/space separated `KEY=VALUE` items.
pub fn parse_context_input(input: &str) -> Result<ContextData, ContextError> {
    if input.trim().is_empty() {
        return Err(ContextError::EmptyInput);
    }

    let path = Path::new(input);
    if path.is_file() {
        let content = std::fs::read_to_string(path).map_err(|e| ContextError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        return parse_json_object(&content);
    }

    if let Ok(value) = serde_json::from_str::<Value>(input) {
        return into_object(value);
    }

    parse_key_values(input)
}

fn parse_json_object(text: &str) -> Result<ContextData, ContextError> {
    let value: Value = serde_json::from_str(text).map_err(|e| ContextError::InvalidJson {
        message: e.to_string(),
    })?;
    into_object(value)
}

fn into_object(value: Value) -> Result<ContextData, ContextError> {
    match value {
        Value::Object(map) => Ok(ContextData::new(map)),
        other => Err(ContextError::NotAnObject {
            found: json_type_name(&other).to_string(),
        }),
    }
}

fn parse_key_values(input: &str) -> Result<ContextData, ContextError> {
    let mut map = Map::new();
    for item in ITEM_SEPARATOR.split(input).map(str::trim).filter(|s| !s.is_empty()) {
        let Some((key, value)) = item.split_once('=') else {
            return Err(ContextError::MissingSeparator {
                item: item.to_string(),
            });
        };
        let key = key.trim();
        if key.is_empty() {
            return Err(ContextError::EmptyKey {
                item: item.to_string(),
            });
        }
        map.insert(key.to_string(), Value::String(value.trim().to_string()));
    }
    if map.is_empty() {
        return Err(ContextError::EmptyInput);
    }
    Ok(ContextData::new(map))
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
