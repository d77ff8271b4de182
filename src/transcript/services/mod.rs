//! Transcript services.
//!
//! The labeler classifies message content; the pipeline drives a renderer
//! over every message that survives labeling.

mod labeler;
mod pipeline;

pub use labeler::{MessageLabeler, split_and_label};
pub use pipeline::render_transcript;
