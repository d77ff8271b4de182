//! Domain types for command parsing.
//!
//! Schemas are immutable after construction and may be shared across
//! threads; every parse works on its own copy of the token list.

mod bindings;
mod error;
mod schema;
mod spec;
mod value;

pub use bindings::Bindings;
pub use error::{BindError, SchemaError};
pub use schema::{Schema, UnboundPositional};
pub use spec::{ParameterKind, ParameterSpec};
pub use value::{Value, ValueType};
