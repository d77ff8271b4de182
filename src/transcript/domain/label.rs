//! Semantic labels attached to text spans.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a span of chat text is to be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    /// Narration of what a character does.
    #[serde(rename = "act")]
    Action,
    /// Quoted in-character speech.
    #[serde(rename = "speak")]
    Speech,
    /// Echo of a dice-bot command.
    #[serde(rename = "command")]
    Command,
    /// Out-of-character comment.
    #[serde(rename = "outside")]
    Outside,
    /// Content following a command, which carries no narrative meaning.
    #[serde(rename = "invalid")]
    Invalid,
}

impl Label {
    /// Returns the wire name of the label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Action => "act",
            Self::Speech => "speak",
            Self::Command => "command",
            Self::Outside => "outside",
            Self::Invalid => "invalid",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
