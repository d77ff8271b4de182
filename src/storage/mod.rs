//! Key-value persistence contract for cards, session status, and logs.
//!
//! Plugins keep per-user character cards and per-session bot status behind
//! the [`ports::KeyValueStore`] port. Values are restricted to the
//! [`domain::StoredValue`] union and persisted as JSON documents, so stored
//! text is only ever parsed, never executed.
//!
//! - **Domain**: [`domain::StoredValue`], [`domain::StoreKey`]
//! - **Ports**: [`ports::KeyValueStore`]
//! - **Adapters**: [`adapters::memory::InMemoryStore`]
//! - **Services**: [`services::StoreRegistry`] for named stores and
//!   [`services::CachedStore`] for explicit read caching
//!
//! # Example
//!
//! ```
//! use diceutils::storage::adapters::memory::InMemoryStore;
//! use diceutils::storage::domain::{StoreKey, StoredValue};
//! use diceutils::storage::ports::KeyValueStore;
//!
//! let store = InMemoryStore::new();
//! let key = StoreKey::new("card", "1302425");
//! store
//!     .save(key.as_str(), StoredValue::from("欧若可"))
//!     .expect("save succeeds");
//!
//! let loaded = store.load(key.as_str()).expect("load succeeds");
//! assert_eq!(loaded, Some(StoredValue::from("欧若可")));
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
