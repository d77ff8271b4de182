//! In-memory store.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::storage::{
    domain::StoredValue,
    error::{StoreError, StoreResult},
    ports::KeyValueStore,
};

/// Thread-safe in-memory store.
///
/// Values are held as encoded JSON documents, so everything saved goes
/// through the same codec a durable backend would use.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    documents: Arc<RwLock<BTreeMap<String, String>>>,
}

impl InMemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for InMemoryStore {
    fn save(&self, key: &str, value: StoredValue) -> StoreResult<()> {
        let document = value.encode()?;
        let mut documents = self.documents.write().map_err(StoreError::poisoned)?;
        documents.insert(key.to_owned(), document);
        Ok(())
    }

    fn load(&self, key: &str) -> StoreResult<Option<StoredValue>> {
        let documents = self.documents.read().map_err(StoreError::poisoned)?;
        documents
            .get(key)
            .map(|document| StoredValue::decode(document))
            .transpose()
    }

    fn remove(&self, key: &str) -> StoreResult<bool> {
        let mut documents = self.documents.write().map_err(StoreError::poisoned)?;
        Ok(documents.remove(key).is_some())
    }

    fn keys(&self) -> StoreResult<Vec<String>> {
        let documents = self.documents.read().map_err(StoreError::poisoned)?;
        Ok(documents.keys().cloned().collect())
    }
}
