//! Named store registry.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, RwLock};
use tracing::{debug, info};

use crate::storage::error::{StoreError, StoreResult};

/// Factory used by [`StoreRegistry`] to open a store for a name.
pub type StoreFactory<S> = Box<dyn Fn(&str) -> S + Send + Sync>;

/// Registry mapping store names to shared store instances.
///
/// Callers own the registry and pass it where stores are needed. Nothing is
/// created implicitly: unknown names fail instead of opening a fresh store.
pub struct StoreRegistry<S> {
    factory: StoreFactory<S>,
    stores: RwLock<BTreeMap<String, Arc<S>>>,
}

impl<S> StoreRegistry<S> {
    /// Creates an empty registry that opens stores with `factory`.
    #[must_use]
    pub fn new(factory: impl Fn(&str) -> S + Send + Sync + 'static) -> Self {
        Self {
            factory: Box::new(factory),
            stores: RwLock::new(BTreeMap::new()),
        }
    }

    /// Opens and registers a store under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::AlreadyRegistered`] when `name` is taken.
    pub fn register(&self, name: &str) -> StoreResult<Arc<S>> {
        let mut stores = self.stores.write().map_err(StoreError::poisoned)?;
        if stores.contains_key(name) {
            return Err(StoreError::AlreadyRegistered(name.to_owned()));
        }
        let store = Arc::new((self.factory)(name));
        stores.insert(name.to_owned(), Arc::clone(&store));
        info!(store = name, "registered store");
        Ok(store)
    }

    /// Returns the store registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when `name` was never registered.
    pub fn get(&self, name: &str) -> StoreResult<Arc<S>> {
        let stores = self.stores.read().map_err(StoreError::poisoned)?;
        stores
            .get(name)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(name.to_owned()))
    }

    /// Replaces the store under `name` with a freshly opened one.
    ///
    /// Holders of the previous instance keep it; later lookups see the new
    /// one.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when `name` was never registered.
    pub fn reload(&self, name: &str) -> StoreResult<Arc<S>> {
        let mut stores = self.stores.write().map_err(StoreError::poisoned)?;
        let slot = stores
            .get_mut(name)
            .ok_or_else(|| StoreError::NotFound(name.to_owned()))?;
        let store = Arc::new((self.factory)(name));
        *slot = Arc::clone(&store);
        info!(store = name, "reloaded store");
        Ok(store)
    }

    /// Returns whether a store is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.stores
            .read()
            .is_ok_and(|stores| stores.contains_key(name))
    }

    /// Lists registered names in ascending order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Persistence`] when the registry lock is
    /// poisoned.
    pub fn names(&self) -> StoreResult<Vec<String>> {
        let stores = self.stores.read().map_err(StoreError::poisoned)?;
        debug!(count = stores.len(), "listing registered stores");
        Ok(stores.keys().cloned().collect())
    }
}

impl<S> fmt::Debug for StoreRegistry<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = self
            .stores
            .read()
            .map(|stores| stores.keys().cloned().collect::<Vec<_>>())
            .unwrap_or_default();
        f.debug_struct("StoreRegistry")
            .field("stores", &names)
            .finish_non_exhaustive()
    }
}
