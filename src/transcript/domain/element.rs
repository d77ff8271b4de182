//! Message content elements.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Label;
use crate::transcript::error::TranscriptError;

/// A unit of message content.
///
/// # Serialisation
///
/// Elements are serialised with a `type` tag field:
///
/// ```json
/// { "type": "text", "content": "“你好”", "label": "speak" }
/// { "type": "image", "url": "http://a.com/1.png" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Element {
    /// A run of text.
    Text(TextSpan),
    /// An image reference.
    Image(ImageRef),
}

/// Text content, labeled once it has passed through the labeler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSpan {
    /// The text content.
    pub content: String,
    /// Semantic label; `None` before labeling.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<Label>,
}

impl TextSpan {
    /// Creates an unlabeled span.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            label: None,
        }
    }

    /// Creates a labeled span.
    #[must_use]
    pub fn labeled(content: impl Into<String>, label: Label) -> Self {
        Self {
            content: content.into(),
            label: Some(label),
        }
    }
}

/// An image attached to a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    /// Image location.
    pub url: String,
}

impl Element {
    /// Creates an unlabeled text element.
    #[must_use]
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(TextSpan::new(content))
    }

    /// Creates a labeled text element.
    #[must_use]
    pub fn labeled(content: impl Into<String>, label: Label) -> Self {
        Self::Text(TextSpan::labeled(content, label))
    }

    /// Creates an image element.
    #[must_use]
    pub fn image(url: impl Into<String>) -> Self {
        Self::Image(ImageRef { url: url.into() })
    }

    /// Builds an element from a raw chat segment.
    ///
    /// Segments have the shape `{"type": "text", "data": {"text": "..."}}`
    /// or `{"type": "image", "data": {"url": "..."}}`.
    ///
    /// # Errors
    ///
    /// Returns [`TranscriptError::UnsupportedElementType`] for any other
    /// `type`, and [`TranscriptError::MalformedSegment`] when a field is
    /// missing or not a string.
    pub fn from_segment(segment: &Value) -> Result<Self, TranscriptError> {
        let kind = string_field(segment, "type")?;
        let data = segment
            .get("data")
            .ok_or_else(|| TranscriptError::MalformedSegment("missing key field 'data'".to_owned()))?;

        match kind {
            "text" => Ok(Self::text(string_field(data, "text")?)),
            "image" => Ok(Self::image(string_field(data, "url")?)),
            other => Err(TranscriptError::UnsupportedElementType(other.to_owned())),
        }
    }

    /// Returns the text span, if this is a text element.
    #[must_use]
    pub const fn as_text(&self) -> Option<&TextSpan> {
        match self {
            Self::Text(span) => Some(span),
            Self::Image(_) => None,
        }
    }

    /// Returns the label of a text element.
    #[must_use]
    pub const fn label(&self) -> Option<Label> {
        match self {
            Self::Text(span) => span.label,
            Self::Image(_) => None,
        }
    }

    /// Returns the text content, or the URL of an image.
    #[must_use]
    pub fn content(&self) -> &str {
        match self {
            Self::Text(span) => &span.content,
            Self::Image(image) => &image.url,
        }
    }

    /// Returns `true` for image elements.
    #[must_use]
    pub const fn is_image(&self) -> bool {
        matches!(self, Self::Image(_))
    }
}

fn string_field<'a>(value: &'a Value, key: &str) -> Result<&'a str, TranscriptError> {
    value
        .get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| TranscriptError::MalformedSegment(format!("missing key field '{key}'")))
}
