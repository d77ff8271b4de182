//! Messages and transcripts.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Element, Role};
use crate::transcript::error::TranscriptError;

/// A single chat message in a session log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    user_code: String,
    role: Role,
    nickname: String,
    date: String,
    elements: Vec<Element>,
}

impl Message {
    /// Creates a message.
    #[must_use]
    pub fn new(
        user_code: impl Into<String>,
        role: Role,
        nickname: impl Into<String>,
        date: impl Into<String>,
        elements: Vec<Element>,
    ) -> Self {
        Self {
            user_code: user_code.into(),
            role,
            nickname: nickname.into(),
            date: date.into(),
            elements,
        }
    }

    /// Returns the sender's platform account.
    #[must_use]
    pub fn user_code(&self) -> &str {
        &self.user_code
    }

    /// Returns the sender's role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Returns the sender's display name.
    #[must_use]
    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    /// Returns the timestamp as recorded by the platform.
    #[must_use]
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Returns the message content.
    #[must_use]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Replaces the message content.
    #[must_use]
    pub fn with_elements(mut self, elements: Vec<Element>) -> Self {
        self.elements = elements;
        self
    }

    /// Transforms the message content, keeping the sender details.
    #[must_use]
    pub fn map_elements(mut self, transform: impl FnOnce(Vec<Element>) -> Vec<Element>) -> Self {
        self.elements = transform(std::mem::take(&mut self.elements));
        self
    }

    /// Consumes the message, returning its content.
    #[must_use]
    pub fn into_elements(self) -> Vec<Element> {
        self.elements
    }
}

/// An ordered session log.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    /// Creates an empty transcript.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message.
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Appends a message built from raw chat segments.
    ///
    /// # Errors
    ///
    /// Returns [`TranscriptError`] when a segment is malformed or has an
    /// unsupported type. Nothing is appended in that case.
    pub fn add_message(
        &mut self,
        user_code: impl Into<String>,
        role: Role,
        nickname: impl Into<String>,
        date: impl Into<String>,
        segments: &[Value],
    ) -> Result<(), TranscriptError> {
        let elements = segments
            .iter()
            .map(Element::from_segment)
            .collect::<Result<Vec<_>, _>>()?;
        self.push(Message::new(user_code, role, nickname, date, elements));
        Ok(())
    }

    /// Returns the messages in order.
    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Iterates over the messages in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.messages.iter()
    }

    /// Returns the number of messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns `true` when the transcript holds no messages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl FromIterator<Message> for Transcript {
    fn from_iter<I: IntoIterator<Item = Message>>(iter: I) -> Self {
        Self {
            messages: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Transcript {
    type Item = Message;
    type IntoIter = std::vec::IntoIter<Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.into_iter()
    }
}

impl<'a> IntoIterator for &'a Transcript {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}
