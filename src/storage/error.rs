//! Error types for stores and store registries.

use std::sync::Arc;
use thiserror::Error;

/// Result type for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors returned by stores and store registries.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// No store is registered under the name.
    #[error("store '{0}' was not registered")]
    NotFound(String),

    /// A store is already registered under the name.
    #[error("store '{0}' is already registered")]
    AlreadyRegistered(String),

    /// A stored document could not be encoded or decoded.
    #[error("invalid stored document: {0}")]
    Codec(Arc<serde_json::Error>),

    /// A float was NaN or infinite.
    #[error("non-finite floats cannot be stored")]
    NonFiniteFloat,

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    /// Wraps a persistence error.
    #[must_use]
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }

    /// Wraps a poisoned lock as a persistence error.
    #[must_use]
    pub(crate) fn poisoned(err: impl std::fmt::Display) -> Self {
        Self::persistence(std::io::Error::other(err.to_string()))
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Codec(Arc::new(err))
    }
}
