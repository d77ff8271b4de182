//! Export options.

use serde::{Deserialize, Serialize};

use crate::transcript::error::TranscriptError;

/// Options controlling which messages are exported and how they look.
///
/// The three `display_*` filters for images, dice commands, and external
/// comments are applied by the labeler; the remaining options are
/// rendering concerns.
///
/// # Examples
///
/// ```
/// use diceutils::transcript::domain::ExportConfig;
///
/// let config = ExportConfig::from_toml_str("display_image = false").expect("valid toml");
/// assert!(!config.display_image);
/// assert!(config.display_dice_command);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "each flag is an independent user-facing toggle"
)]
pub struct ExportConfig {
    /// Indent the first line of each message.
    pub first_line_indent: bool,
    /// Keep dice commands and dice-bot replies.
    pub display_dice_command: bool,
    /// Keep out-of-character comments.
    pub display_external_comment: bool,
    /// Keep images.
    pub display_image: bool,
    /// Show message timestamps.
    pub display_datetime: bool,
    /// Show the sender's account next to the nickname.
    pub display_account: bool,
    /// Show the date part of timestamps, not only the time.
    pub display_year_month_day: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            first_line_indent: true,
            display_dice_command: true,
            display_external_comment: true,
            display_image: true,
            display_datetime: true,
            display_account: true,
            display_year_month_day: false,
        }
    }
}

impl ExportConfig {
    /// Creates a configuration that keeps only in-character story content.
    ///
    /// Dice commands, dice-bot replies and out-of-character comments are
    /// dropped.
    #[must_use]
    pub fn story_only() -> Self {
        Self {
            display_dice_command: false,
            display_external_comment: false,
            ..Self::default()
        }
    }

    /// Loads a configuration from a TOML document.
    ///
    /// Missing keys take their default values.
    ///
    /// # Errors
    ///
    /// Returns [`TranscriptError::Config`] when the document is not valid
    /// TOML or a key has the wrong type.
    pub fn from_toml_str(document: &str) -> Result<Self, TranscriptError> {
        toml::from_str(document).map_err(|error| TranscriptError::Config(error.to_string()))
    }
}
