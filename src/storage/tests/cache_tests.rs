//! Unit tests for the read-through cache.

use rstest::rstest;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Barrier, Mutex};
use std::thread;

use crate::storage::adapters::memory::InMemoryStore;
use crate::storage::domain::StoredValue;
use crate::storage::error::{StoreError, StoreResult};
use crate::storage::ports::{KeyValueStore, store::MockKeyValueStore};
use crate::storage::services::CachedStore;

#[rstest]
fn repeated_loads_hit_the_backing_store_once() {
    let mut backing = MockKeyValueStore::new();
    backing
        .expect_load()
        .withf(|key| key == "card:1")
        .times(1)
        .returning(|_| Ok(Some(StoredValue::from("欧若可"))));
    let cache = CachedStore::new(backing);

    for _ in 0..3 {
        assert_eq!(
            cache.load("card:1").expect("load should succeed"),
            Some(StoredValue::from("欧若可"))
        );
    }
    assert_eq!(cache.cached_len().expect("cache lock"), 1);
}

#[rstest]
fn misses_are_cached_too() {
    let mut backing = MockKeyValueStore::new();
    backing.expect_load().times(1).returning(|_| Ok(None));
    let cache = CachedStore::new(backing);

    assert_eq!(cache.load("card:2").expect("load should succeed"), None);
    assert_eq!(cache.load("card:2").expect("load should succeed"), None);
}

#[rstest]
fn save_invalidates_the_key() {
    let mut backing = MockKeyValueStore::new();
    backing.expect_load().times(2).returning(|_| Ok(None));
    backing.expect_save().times(1).returning(|_, _| Ok(()));
    let cache = CachedStore::new(backing);

    cache.load("status:1").expect("load should succeed");
    cache
        .save("status:1", StoredValue::from(true))
        .expect("save should succeed");
    cache.load("status:1").expect("load should succeed");
}

#[rstest]
fn remove_invalidates_the_key() {
    let mut backing = MockKeyValueStore::new();
    backing
        .expect_load()
        .times(2)
        .returning(|_| Ok(Some(StoredValue::Int(1))));
    backing.expect_remove().times(1).returning(|_| Ok(true));
    let cache = CachedStore::new(backing);

    cache.load("log:1").expect("load should succeed");
    assert!(cache.remove("log:1").expect("remove should succeed"));
    cache.load("log:1").expect("load should succeed");
}

#[rstest]
fn invalidate_all_clears_every_entry() {
    let mut backing = MockKeyValueStore::new();
    backing.expect_load().times(4).returning(|_| Ok(None));
    let cache = CachedStore::new(backing);

    cache.load("card:1").expect("load should succeed");
    cache.load("card:2").expect("load should succeed");
    cache.invalidate_all().expect("invalidate should succeed");
    assert_eq!(cache.cached_len().expect("cache lock"), 0);

    cache.load("card:1").expect("load should succeed");
    cache.load("card:2").expect("load should succeed");
}

#[rstest]
fn failed_loads_are_not_cached() {
    let mut backing = MockKeyValueStore::new();
    backing
        .expect_load()
        .times(2)
        .returning(|_| Err(StoreError::NotFound("cards".to_owned())));
    let cache = CachedStore::new(backing);

    cache.load("card:1").expect_err("backing failure should surface");
    cache.load("card:1").expect_err("backing failure should surface");
    assert_eq!(cache.cached_len().expect("cache lock"), 0);
}

/// Backing store whose first load pauses after reading, until released.
struct PausingStore {
    inner: InMemoryStore,
    paused: AtomicBool,
    entered: Barrier,
    release: Barrier,
}

impl PausingStore {
    fn new(inner: InMemoryStore) -> Self {
        Self {
            inner,
            paused: AtomicBool::new(false),
            entered: Barrier::new(2),
            release: Barrier::new(2),
        }
    }
}

impl KeyValueStore for PausingStore {
    fn save(&self, key: &str, value: StoredValue) -> StoreResult<()> {
        self.inner.save(key, value)
    }

    fn load(&self, key: &str) -> StoreResult<Option<StoredValue>> {
        let loaded = self.inner.load(key)?;
        if !self.paused.swap(true, Ordering::SeqCst) {
            self.entered.wait();
            self.release.wait();
        }
        Ok(loaded)
    }

    fn remove(&self, key: &str) -> StoreResult<bool> {
        self.inner.remove(key)
    }

    fn keys(&self) -> StoreResult<Vec<String>> {
        self.inner.keys()
    }
}

#[rstest]
fn save_during_a_slow_load_is_not_overwritten_by_the_stale_read() {
    let backing = InMemoryStore::new();
    backing
        .save("card:1", StoredValue::from("old"))
        .expect("seed should succeed");
    let cache = Arc::new(CachedStore::new(PausingStore::new(backing)));
    let stale = Arc::new(Mutex::new(None));

    let reader_cache = Arc::clone(&cache);
    let reader_result = Arc::clone(&stale);
    let reader = thread::spawn(move || {
        let loaded = reader_cache.load("card:1").expect("load should succeed");
        *reader_result.lock().expect("result lock") = loaded;
    });

    cache.inner().entered.wait();
    cache
        .save("card:1", StoredValue::from("new"))
        .expect("save should succeed");
    cache.inner().release.wait();
    reader.join().expect("reader thread should finish");

    assert_eq!(
        *stale.lock().expect("result lock"),
        Some(StoredValue::from("old"))
    );
    assert_eq!(
        cache.load("card:1").expect("load should succeed"),
        Some(StoredValue::from("new"))
    );
}
