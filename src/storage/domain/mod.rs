//! Domain types for stored values.

mod key;
mod value;

pub use key::StoreKey;
pub use value::StoredValue;
