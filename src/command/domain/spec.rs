//! Parameter specifications.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{BindError, SchemaError, Value, ValueType};

/// How a parameter is located in the token list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterKind {
    /// Bound by position among the tokens left after keyword matching.
    Positional,
    /// Keyword parameter that must be present.
    Required,
    /// Keyword parameter that falls back to its default.
    Optional,
    /// Boolean parameter bound by the presence of an alias.
    Flag,
}

impl ParameterKind {
    /// Returns the kind as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Positional => "positional",
            Self::Required => "required",
            Self::Optional => "optional",
            Self::Flag => "flag",
        }
    }
}

impl fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single parameter of a command schema.
///
/// The first alias is the canonical name under which the bound value is
/// reported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterSpec {
    kind: ParameterKind,
    aliases: Vec<String>,
    value_type: ValueType,
    default: Value,
}

impl ParameterSpec {
    /// Creates a positional parameter.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] when `aliases` is empty or contains an empty
    /// string.
    pub fn positional(
        aliases: impl IntoIterator<Item = impl Into<String>>,
        value_type: ValueType,
    ) -> Result<Self, SchemaError> {
        Self::build(ParameterKind::Positional, aliases, value_type, Value::Null)
    }

    /// Creates a required keyword parameter.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] when `aliases` is empty or contains an empty
    /// string.
    pub fn required(
        aliases: impl IntoIterator<Item = impl Into<String>>,
        value_type: ValueType,
    ) -> Result<Self, SchemaError> {
        Self::build(ParameterKind::Required, aliases, value_type, Value::Null)
    }

    /// Creates an optional keyword parameter defaulting to [`Value::Null`].
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] when `aliases` is empty or contains an empty
    /// string.
    pub fn optional(
        aliases: impl IntoIterator<Item = impl Into<String>>,
        value_type: ValueType,
    ) -> Result<Self, SchemaError> {
        Self::build(ParameterKind::Optional, aliases, value_type, Value::Null)
    }

    /// Creates a flag defaulting to `false`.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] when `aliases` is empty or contains an empty
    /// string.
    pub fn flag(aliases: impl IntoIterator<Item = impl Into<String>>) -> Result<Self, SchemaError> {
        Self::build(
            ParameterKind::Flag,
            aliases,
            ValueType::Bool,
            Value::Bool(false),
        )
    }

    fn build(
        kind: ParameterKind,
        aliases: impl IntoIterator<Item = impl Into<String>>,
        value_type: ValueType,
        default: Value,
    ) -> Result<Self, SchemaError> {
        let alias_list: Vec<String> = aliases.into_iter().map(Into::into).collect();
        let canonical = alias_list
            .first()
            .ok_or(SchemaError::EmptyAliases { kind })?;
        if alias_list.iter().any(String::is_empty) {
            return Err(SchemaError::BlankAlias {
                kind,
                parameter: canonical.clone(),
            });
        }

        Ok(Self {
            kind,
            aliases: alias_list,
            value_type,
            default,
        })
    }

    /// Sets the value bound when the parameter is not supplied.
    ///
    /// Required parameters never fall back to their default.
    #[must_use]
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = default.into();
        self
    }

    /// Returns the canonical (display) name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.aliases.first().map_or("", String::as_str)
    }

    /// Returns every accepted spelling, canonical name first.
    #[must_use]
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Returns the parameter kind.
    #[must_use]
    pub const fn kind(&self) -> ParameterKind {
        self.kind
    }

    /// Returns the declared value type.
    #[must_use]
    pub const fn value_type(&self) -> ValueType {
        self.value_type
    }

    /// Returns the default value.
    #[must_use]
    pub const fn default_value(&self) -> &Value {
        &self.default
    }

    /// Returns `true` when `token` is one of this parameter's aliases.
    #[must_use]
    pub fn matches(&self, token: &str) -> bool {
        self.aliases.iter().any(|alias| alias == token)
    }

    pub(super) fn coerce(&self, raw: &str) -> Result<Value, BindError> {
        self.value_type
            .coerce(raw)
            .ok_or_else(|| BindError::TypeMismatch {
                parameter: self.name().to_owned(),
                value: raw.to_owned(),
                expected: self.value_type,
            })
    }
}

impl fmt::Display for ParameterSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
