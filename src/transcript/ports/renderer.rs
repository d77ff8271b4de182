//! Document rendering port.

use std::path::{Path, PathBuf};

use crate::transcript::{domain::Message, error::TranscriptError};

/// Turns labeled messages into an exported document.
///
/// Implementations receive messages one at a time, in transcript order,
/// after they have passed through the
/// [`MessageLabeler`](crate::transcript::services::MessageLabeler). Role
/// based presentation (dice-bot and observer text ignoring span labels) is
/// the renderer's responsibility.
pub trait Renderer {
    /// Appends one labeled message to the document.
    ///
    /// # Errors
    ///
    /// Returns [`TranscriptError`] when the message cannot be rendered.
    fn render_message(&mut self, message: &Message) -> Result<(), TranscriptError>;

    /// Writes the document as `filename` inside `directory`.
    ///
    /// Returns the path of the written file.
    ///
    /// # Errors
    ///
    /// Returns [`TranscriptError`] when the document cannot be produced or
    /// written.
    fn export(&self, directory: &Path, filename: &str) -> Result<PathBuf, TranscriptError>;
}
