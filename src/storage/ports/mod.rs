//! Port trait definitions for the storage subsystem.

pub mod store;

pub use store::KeyValueStore;
