//! Chat transcript labeling and export.
//!
//! Session logs are kept as a [`domain::Transcript`] of messages, each an
//! ordered list of text and image elements. Before export every message is
//! passed through the [`services::MessageLabeler`], which drops what the
//! [`domain::ExportConfig`] hides and tags every text span as action,
//! speech, command echo, out-of-character comment, or invalid. A
//! [`ports::Renderer`] then turns the labeled messages into a document.
//!
//! # Example
//!
//! ```
//! use diceutils::transcript::domain::{Element, ExportConfig, Label, Message, Role};
//! use diceutils::transcript::services::MessageLabeler;
//!
//! let message = Message::new(
//!     "1302425",
//!     Role::Pl,
//!     "张三",
//!     "2024-03-01 20:15:03",
//!     vec![Element::text("他笑道：“非常好”")],
//! );
//!
//! let labeled = MessageLabeler::new(ExportConfig::default())
//!     .label(message)
//!     .expect("message is kept");
//! let labels: Vec<_> = labeled
//!     .elements()
//!     .iter()
//!     .filter_map(Element::label)
//!     .collect();
//! assert_eq!(labels, [Label::Action, Label::Speech]);
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
