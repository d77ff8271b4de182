//! Label-then-render pipeline.

use tracing::info;

use super::MessageLabeler;
use crate::transcript::{
    domain::{ExportConfig, Message},
    error::TranscriptError,
    ports::Renderer,
};

/// Labels each message and feeds the survivors to `renderer`.
///
/// Returns the number of messages rendered.
///
/// # Errors
///
/// Returns the first [`TranscriptError`] reported by the renderer.
pub fn render_transcript<R>(
    messages: impl IntoIterator<Item = Message>,
    renderer: &mut R,
    config: &ExportConfig,
) -> Result<usize, TranscriptError>
where
    R: Renderer + ?Sized,
{
    let labeler = MessageLabeler::new(config.clone());
    let mut total = 0_usize;
    let mut rendered = 0_usize;

    for message in messages {
        total += 1;
        if let Some(labeled) = labeler.label(message) {
            renderer.render_message(&labeled)?;
            rendered += 1;
        }
    }

    info!(total, rendered, "rendered transcript");
    Ok(rendered)
}
