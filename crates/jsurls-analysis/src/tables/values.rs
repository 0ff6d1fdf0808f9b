//! Ordered, deduplicated value lists.

use std::ops::Deref;

use smallvec::SmallVec;

/// The set of strings an expression may evaluate to, in discovery order.
///
/// Most symbols hold one or two values, so the list lives inline until it grows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Values(SmallVec<[String; 2]>);

impl Values {
    pub fn new() -> Self {
        Self(SmallVec::new())
    }

    pub fn one(value: impl Into<String>) -> Self {
        let mut values = Self::new();
        values.0.push(value.into());
        values
    }

    /// Append `value` unless already present. Returns whether it was added.
    pub fn push(&mut self, value: String) -> bool {
        if self.0.iter().any(|v| *v == value) {
            return false;
        }
        self.0.push(value);
        true
    }

    pub fn extend_from(&mut self, other: &Values) {
        for value in other.iter() {
            self.push(value.clone());
        }
    }

    pub fn first(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// `self` if non-empty, otherwise `[placeholder]`.
    pub fn or_placeholder(self, placeholder: &str) -> Self {
        if self.is_empty() {
            Self::one(placeholder)
        } else {
            self
        }
    }
}

impl Deref for Values {
    type Target = [String];

    fn deref(&self) -> &[String] {
        &self.0
    }
}

impl FromIterator<String> for Values {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut values = Self::new();
        for value in iter {
            values.push(value);
        }
        values
    }
}

impl IntoIterator for Values {
    type Item = String;
    type IntoIter = smallvec::IntoIter<[String; 2]>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Values {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
