//! Participant roles in a session.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::transcript::error::TranscriptError;

/// The role of a message sender.
///
/// Rendering treats dice-bot and observer text specially regardless of its
/// label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    /// The dice bot itself.
    Dicer,
    /// Game master (keeper).
    Gm,
    /// Player.
    Pl,
    /// Observer.
    Ob,
}

impl Role {
    /// Returns the role as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Dicer => "DICER",
            Self::Gm => "GM",
            Self::Pl => "PL",
            Self::Ob => "OB",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Role {
    type Error = TranscriptError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "DICER" => Ok(Self::Dicer),
            "GM" | "KP" => Ok(Self::Gm),
            "PL" => Ok(Self::Pl),
            "OB" => Ok(Self::Ob),
            _ => Err(TranscriptError::InvalidRole(s.to_owned())),
        }
    }
}
