//! Recursive object property structure.

use rustc_hash::FxHashMap;

use super::Values;

/// Property name to value mapping of one object.
pub type ObjectMap = FxHashMap<String, PropertyValue>;

/// A property holds either a value list or a nested object.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Values(Values),
    Object(ObjectMap),
}

impl PropertyValue {
    pub fn as_values(&self) -> Option<&Values> {
        match self {
            Self::Values(values) => Some(values),
            Self::Object(_) => None,
        }
    }
}

/// Merge a property observed in an object literal into `map`.
///
/// The first-observed shape wins: a value list never replaces a nested
/// object and vice versa. Same-shape observations merge.
pub fn merge_property(map: &mut ObjectMap, key: &str, value: PropertyValue) {
    if !map.contains_key(key) {
        map.insert(key.to_string(), value);
        return;
    }
    match (map.get_mut(key), value) {
        (Some(PropertyValue::Values(existing)), PropertyValue::Values(incoming)) => {
            existing.extend_from(&incoming);
        }
        (Some(PropertyValue::Object(existing)), PropertyValue::Object(incoming)) => {
            for (k, v) in incoming {
                merge_property(existing, &k, v);
            }
        }
        _ => {}
    }
}
