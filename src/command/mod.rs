//! Chat command parsing for dice-bot plugins.
//!
//! A command is described once as a [`domain::Schema`] of positional,
//! required, optional, and flag parameters, then bound against the token
//! list of each incoming chat message.
//!
//! - **Domain**: parameter specifications, schemas, typed values, and the
//!   binding algorithm ([`domain::Schema::parse`])
//! - **Normalisation**: folding raw chat text into the token lists the
//!   parser consumes ([`normalize::tokenize`])
//!
//! # Example
//!
//! ```
//! use diceutils::command::domain::{ParameterSpec, Schema, Value, ValueType};
//!
//! let schema = Schema::new([
//!     ParameterSpec::positional(["roll"], ValueType::Int).expect("valid spec"),
//!     ParameterSpec::flag(["cache"]).expect("valid spec"),
//!     ParameterSpec::optional(["age"], ValueType::Int).expect("valid spec"),
//! ])
//! .expect("valid schema");
//!
//! let bindings = schema.parse(&["cache", "age", "20", "7"]).expect("binds");
//! assert_eq!(bindings.get("roll"), Some(&Value::Int(7)));
//! assert_eq!(bindings.bool("cache"), Some(true));
//! assert_eq!(bindings.int("age"), Some(20));
//! ```

pub mod domain;
pub mod normalize;

#[cfg(test)]
mod tests;
