//! Orchestration over stores: a named registry and a read cache.

mod cache;
mod registry;

pub use cache::CachedStore;
pub use registry::{StoreFactory, StoreRegistry};
