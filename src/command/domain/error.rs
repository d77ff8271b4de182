//! Error types for schema construction and token binding.

use thiserror::Error;

use super::{ParameterKind, ValueType};

/// Errors raised while defining a parameter or a schema.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SchemaError {
    /// A parameter was declared without any alias.
    #[error("{kind} parameter must declare at least one alias")]
    EmptyAliases {
        /// Kind of the rejected parameter.
        kind: ParameterKind,
    },

    /// An alias was the empty string.
    #[error("{kind} parameter '{parameter}' has an empty alias")]
    BlankAlias {
        /// Kind of the rejected parameter.
        kind: ParameterKind,
        /// Canonical name of the rejected parameter, possibly empty.
        parameter: String,
    },

    /// Two parameters share a canonical name.
    #[error("duplicate parameter definition '{0}'")]
    DuplicateParameter(String),
}

/// Errors raised while binding tokens against a schema.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BindError {
    /// More than one alias of the same parameter appeared in the input.
    #[error("too many alias matches for parameter '{parameter}': {}", matches.join(", "))]
    AmbiguousAlias {
        /// Canonical parameter name.
        parameter: String,
        /// The alias tokens found in the input, in alias order.
        matches: Vec<String>,
    },

    /// A required parameter was not supplied.
    #[error("required parameter '{parameter}' not found")]
    MissingRequiredParameter {
        /// Canonical parameter name.
        parameter: String,
    },

    /// A value token could not be converted to the declared type.
    #[error("value type of '{parameter}' is mismatched: {expected} required but '{value}' was given")]
    TypeMismatch {
        /// Canonical parameter name.
        parameter: String,
        /// The raw token that failed to convert.
        value: String,
        /// The declared type.
        expected: ValueType,
    },
}
