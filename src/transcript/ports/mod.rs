//! Port trait definitions for the transcript subsystem.

pub mod renderer;

pub use renderer::Renderer;
