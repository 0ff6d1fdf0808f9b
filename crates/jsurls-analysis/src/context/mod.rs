//! External context: caller-supplied variable values seeded into the tables.

mod input;

pub use input::parse_context_input;

use serde_json::{Map, Value};

use crate::tables::{merge_property, ObjectMap, PropertyValue, ValueTables, Values};

/// Parsed context: top-level names to JSON values, in input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContextData(Map<String, Value>);

impl ContextData {
    pub fn new(map: Map<String, Value>) -> Self {
        Self(map)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Seed `tables`: objects into the object table, arrays into the array
    /// table, scalars into the symbol table as single stringified values.
    pub fn populate(&self, tables: &mut ValueTables) {
        for (name, value) in &self.0 {
            match value {
                Value::Object(map) => {
                    let target = tables.object_mut(name);
                    for (key, property) in build_object(map) {
                        merge_property(target, &key, property);
                    }
                }
                Value::Array(items) => {
                    tables.set_array(name, items.iter().map(scalar_string).collect());
                }
                scalar => tables.add_symbol_values(name, [scalar_string(scalar)]),
            }
        }
    }
}

impl From<Map<String, Value>> for ContextData {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

fn build_object(map: &Map<String, Value>) -> ObjectMap {
    let mut object = ObjectMap::default();
    for (key, value) in map {
        let property = match value {
            Value::Object(inner) => PropertyValue::Object(build_object(inner)),
            Value::Array(items) => PropertyValue::Values(items.iter().map(scalar_string).collect()),
            scalar => PropertyValue::Values(Values::one(scalar_string(scalar))),
        };
        object.insert(key.clone(), property);
    }
    object
}

fn scalar_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
