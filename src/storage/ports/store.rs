//! Key-value store port.

use crate::storage::{domain::StoredValue, error::StoreResult};

/// Persistence contract consumed by card, status, and log storage.
///
/// Keys are usually built with
/// [`StoreKey`](crate::storage::domain::StoreKey). Implementations must
/// return from [`load`](Self::load) exactly what was last passed to
/// [`save`](Self::save) for the same key.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore: Send + Sync {
    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`](crate::storage::error::StoreError) when the
    /// value cannot be encoded or persisted.
    fn save(&self, key: &str, value: StoredValue) -> StoreResult<()>;

    /// Loads the value stored under `key`.
    ///
    /// Returns `None` when nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`](crate::storage::error::StoreError) when the
    /// stored document cannot be read or decoded.
    fn load(&self, key: &str) -> StoreResult<Option<StoredValue>>;

    /// Removes the value stored under `key`.
    ///
    /// Returns `true` when a value was present.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`](crate::storage::error::StoreError) on
    /// persistence failure.
    fn remove(&self, key: &str) -> StoreResult<bool>;

    /// Lists every stored key in ascending order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`](crate::storage::error::StoreError) on
    /// persistence failure.
    fn keys(&self) -> StoreResult<Vec<String>>;
}
