//! Value tables: what each variable, object property, and array may hold.
//!
//! Populated by the symbol pass (and context seeding), read by the resolver
//! and the candidate pass. Owned by exactly one analysis run.

mod aliases;
mod objects;
mod values;

pub use aliases::{AliasCandidate, Confidence};
pub(crate) use aliases::merge_candidate;
pub use objects::{merge_property, ObjectMap, PropertyValue};
pub use values::Values;

use rustc_hash::FxHashMap;

/// The four tables of one analysis run.
#[derive(Debug, Default)]
pub struct ValueTables {
    symbols: FxHashMap<String, Values>,
    objects: FxHashMap<String, ObjectMap>,
    arrays: FxHashMap<String, Vec<String>>,
    aliases: FxHashMap<String, Vec<AliasCandidate>>,
}

impl ValueTables {
    pub fn new() -> Self {
        Self::default()
    }

    // ---- Symbol table ----

    /// Values recorded for `name`. Empty entries read as absent.
    pub fn symbol(&self, name: &str) -> Option<&Values> {
        self.symbols.get(name).filter(|v| !v.is_empty())
    }

    /// Append values for `name`, skipping empties and duplicates.
    /// Nothing is recorded when every value is empty.
    pub fn add_symbol_values<I>(&mut self, name: &str, values: I)
    where
        I: IntoIterator<Item = String>,
    {
        let mut values = values.into_iter().filter(|v| !v.is_empty()).peekable();
        if values.peek().is_none() {
            return;
        }
        let entry = self.symbols.entry(name.to_string()).or_default();
        for value in values {
            entry.push(value);
        }
    }

    pub fn symbol_count(&self) -> usize {
        self.symbols.len()
    }

    // ---- Array table ----

    pub fn array(&self, name: &str) -> Option<&[String]> {
        self.arrays.get(name).map(Vec::as_slice)
    }

    /// Record the elements of array `name`. A later literal replaces an earlier one.
    pub fn set_array(&mut self, name: &str, elements: Vec<String>) {
        self.arrays.insert(name.to_string(), elements);
    }

    // ---- Object table ----

    pub fn object(&self, name: &str) -> Option<&ObjectMap> {
        self.objects.get(name)
    }

    /// Mutable property map of object `name`, created empty if missing.
    pub fn object_mut(&mut self, name: &str) -> &mut ObjectMap {
        self.objects.entry(name.to_string()).or_default()
    }

    /// Walk `root.path[0].path[1]...` through the object table.
    pub fn lookup_property(&self, root: &str, path: &[&str]) -> Option<&PropertyValue> {
        let (first, rest) = path.split_first()?;
        let mut current = self.objects.get(root)?.get(*first)?;
        for segment in rest {
            match current {
                PropertyValue::Object(map) => current = map.get(*segment)?,
                PropertyValue::Values(_) => return None,
            }
        }
        Some(current)
    }

    /// Record `values` at `root.path...`, as written by `a.b.c = expr`.
    /// Empty values are dropped; nothing is written when none remain.
    pub fn assign_property<I>(&mut self, root: &str, path: &[&str], values: I)
    where
        I: IntoIterator<Item = String>,
    {
        let values: Values = values.into_iter().filter(|v| !v.is_empty()).collect();
        if !values.is_empty() {
            self.assign_value(root, path, PropertyValue::Values(values));
        }
    }

    /// Record `value` at `root.path...`.
    ///
    /// Intermediate segments are created as nested maps; an intermediate
    /// segment that held a value list is converted to a map. At the final
    /// segment the first-observed shape wins.
    pub fn assign_value(&mut self, root: &str, path: &[&str], value: PropertyValue) {
        let Some((last, intermediate)) = path.split_last() else {
            return;
        };
        let mut map = self.object_mut(root);
        for segment in intermediate {
            let slot = map
                .entry((*segment).to_string())
                .or_insert_with(|| PropertyValue::Object(ObjectMap::default()));
            if let PropertyValue::Values(_) = slot {
                *slot = PropertyValue::Object(ObjectMap::default());
            }
            map = match slot {
                PropertyValue::Object(inner) => inner,
                PropertyValue::Values(_) => return,
            };
        }
        merge_property(map, last, value);
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    // ---- Alias table ----

    /// Record `alias` as a display name for `var`. Re-adding keeps the
    /// first-seen position and raises confidence to the higher of the two.
    pub fn add_alias(&mut self, var: &str, alias: &str, confidence: Confidence) {
        if alias.is_empty() || alias == var {
            return;
        }
        let entry = self.aliases.entry(var.to_string()).or_default();
        aliases::merge_candidate(entry, alias, confidence);
    }

    pub fn aliases(&self, var: &str) -> &[AliasCandidate] {
        self.aliases.get(var).map(Vec::as_slice).unwrap_or(&[])
    }
}
