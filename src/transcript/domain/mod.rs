//! Domain types for chat transcripts.

mod config;
mod element;
mod label;
mod message;
mod role;

pub use config::ExportConfig;
pub use element::{Element, ImageRef, TextSpan};
pub use label::Label;
pub use message::{Message, Transcript};
pub use role::Role;
