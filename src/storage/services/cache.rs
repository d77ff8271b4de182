//! Read-through cache over a store.

use std::collections::HashMap;
use std::sync::RwLock;
use tracing::debug;

use crate::storage::{
    domain::StoredValue,
    error::{StoreError, StoreResult},
    ports::KeyValueStore,
};

/// Read-through cache wrapping a [`KeyValueStore`].
///
/// Loads are served from the cache after the first read of a key, misses
/// included. Writes and removals go to the wrapped store and drop the
/// cached entry.
///
/// The wrapped store is never called with the cache lock held. A load
/// that overlaps an invalidation returns what it read but does not cache
/// it, so a value read before a write is never served after it.
#[derive(Debug)]
pub struct CachedStore<S> {
    inner: S,
    state: RwLock<CacheState>,
}

#[derive(Debug, Default)]
struct CacheState {
    entries: HashMap<String, Option<StoredValue>>,
    /// Bumped by every invalidation.
    generation: u64,
}

impl<S: KeyValueStore> CachedStore<S> {
    /// Wraps `inner` with an empty cache.
    #[must_use]
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            state: RwLock::new(CacheState::default()),
        }
    }

    /// Returns the wrapped store.
    #[must_use]
    pub const fn inner(&self) -> &S {
        &self.inner
    }

    /// Drops the cached entry for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Persistence`] when the cache lock is poisoned.
    pub fn invalidate(&self, key: &str) -> StoreResult<()> {
        let mut state = self.state.write().map_err(StoreError::poisoned)?;
        state.generation = state.generation.wrapping_add(1);
        if state.entries.remove(key).is_some() {
            debug!(key, "cache entry invalidated");
        }
        Ok(())
    }

    /// Drops every cached entry.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Persistence`] when the cache lock is poisoned.
    pub fn invalidate_all(&self) -> StoreResult<()> {
        let mut state = self.state.write().map_err(StoreError::poisoned)?;
        debug!(count = state.entries.len(), "cache cleared");
        state.generation = state.generation.wrapping_add(1);
        state.entries.clear();
        Ok(())
    }

    /// Number of cached keys.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Persistence`] when the cache lock is poisoned.
    pub fn cached_len(&self) -> StoreResult<usize> {
        let state = self.state.read().map_err(StoreError::poisoned)?;
        Ok(state.entries.len())
    }
}

impl<S: KeyValueStore> KeyValueStore for CachedStore<S> {
    fn save(&self, key: &str, value: StoredValue) -> StoreResult<()> {
        self.inner.save(key, value)?;
        self.invalidate(key)
    }

    fn load(&self, key: &str) -> StoreResult<Option<StoredValue>> {
        let observed = {
            let state = self.state.read().map_err(StoreError::poisoned)?;
            if let Some(cached) = state.entries.get(key) {
                debug!(key, "cache hit");
                return Ok(cached.clone());
            }
            state.generation
        };

        debug!(key, "cache miss");
        let loaded = self.inner.load(key)?;

        let mut state = self.state.write().map_err(StoreError::poisoned)?;
        if state.generation == observed {
            state.entries.insert(key.to_owned(), loaded.clone());
        } else {
            debug!(key, "cache invalidated during load, not caching");
        }
        Ok(loaded)
    }

    fn remove(&self, key: &str) -> StoreResult<bool> {
        let removed = self.inner.remove(key)?;
        self.invalidate(key)?;
        Ok(removed)
    }

    fn keys(&self) -> StoreResult<Vec<String>> {
        self.inner.keys()
    }
}
