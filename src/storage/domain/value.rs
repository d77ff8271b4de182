//! The typed value union accepted by stores.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::storage::error::{StoreError, StoreResult};

/// A value that can be persisted.
///
/// Documents are plain JSON; integers and floats are kept apart so a value
/// reads back with the variant it was written with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoredValue {
    /// No value.
    #[default]
    Null,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Floating point value.
    Float(f64),
    /// Text value.
    Text(String),
    /// Ordered list of values.
    List(Vec<StoredValue>),
    /// String-keyed map of values.
    Map(BTreeMap<String, StoredValue>),
}

impl StoredValue {
    /// Encodes the value as a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NonFiniteFloat`] when the value contains a NaN
    /// or infinite float, which JSON cannot represent.
    pub fn encode(&self) -> StoreResult<String> {
        if self.has_non_finite_float() {
            return Err(StoreError::NonFiniteFloat);
        }
        Ok(serde_json::to_string(self)?)
    }

    /// Decodes a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Codec`] when the document is not valid JSON.
    pub fn decode(document: &str) -> StoreResult<Self> {
        Ok(serde_json::from_str(document)?)
    }

    /// Returns the value stored under `key` in a map.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Self> {
        match self {
            Self::Map(entries) => entries.get(key),
            _ => None,
        }
    }

    /// Returns the integer payload, if any.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the text payload, if any.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }

    fn has_non_finite_float(&self) -> bool {
        match self {
            Self::Float(value) => !value.is_finite(),
            Self::List(items) => items.iter().any(Self::has_non_finite_float),
            Self::Map(entries) => entries.values().any(Self::has_non_finite_float),
            Self::Null | Self::Bool(_) | Self::Int(_) | Self::Text(_) => false,
        }
    }
}

impl From<bool> for StoredValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for StoredValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for StoredValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for StoredValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for StoredValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<Self>> for StoredValue {
    fn from(value: Vec<Self>) -> Self {
        Self::List(value)
    }
}

impl From<BTreeMap<String, Self>> for StoredValue {
    fn from(value: BTreeMap<String, Self>) -> Self {
        Self::Map(value)
    }
}
