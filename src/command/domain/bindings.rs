//! Parse results.

use serde::Serialize;
use std::collections::BTreeMap;

use super::Value;

/// Values bound by one parse call, keyed by canonical parameter name.
///
/// Serialises as a plain name-to-value object.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Bindings {
    values: BTreeMap<String, Value>,
    #[serde(skip)]
    nothing_matched: bool,
}

impl Bindings {
    pub(super) const fn new(values: BTreeMap<String, Value>, nothing_matched: bool) -> Self {
        Self {
            values,
            nothing_matched,
        }
    }

    /// Returns the value bound to `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Returns `true` when `name` was bound, even to [`Value::Null`].
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Returns the integer bound to `name`.
    #[must_use]
    pub fn int(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(Value::as_int)
    }

    /// Returns the float bound to `name`.
    #[must_use]
    pub fn float(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(Value::as_float)
    }

    /// Returns the string bound to `name`.
    #[must_use]
    pub fn str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    /// Returns the boolean bound to `name`.
    #[must_use]
    pub fn bool(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(Value::as_bool)
    }

    /// Returns `true` when no token of the input was bound to a parameter.
    #[must_use]
    pub const fn nothing_matched(&self) -> bool {
        self.nothing_matched
    }

    /// Iterates over bindings in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Returns the number of bound parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` when nothing was bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the bindings as a name-to-value map.
    #[must_use]
    pub const fn as_map(&self) -> &BTreeMap<String, Value> {
        &self.values
    }

    /// Consumes the bindings, returning the underlying map.
    #[must_use]
    pub fn into_map(self) -> BTreeMap<String, Value> {
        self.values
    }
}
