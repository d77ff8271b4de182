//! Renderer adapters.

pub mod html;

pub use html::HtmlRenderer;
