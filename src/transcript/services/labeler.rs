//! Message classification and quote-aware segmentation.

use tracing::debug;

use crate::transcript::domain::{Element, ExportConfig, Label, Message, Role, TextSpan};

const COMMAND_PREFIXES: [char; 3] = ['.', '。', '/'];
const COMMENT_PREFIXES: [char; 2] = ['(', '（'];
const QUOTES: [char; 3] = ['“', '”', '"'];

/// Splits text into alternating action and speech spans.
///
/// Any of `“`, `”` or `"` toggles between narration and quoted speech.
/// Quote characters are dropped; every other character lands in exactly
/// one span, in order. Text left open by an unterminated quote is speech.
///
/// # Examples
///
/// ```
/// use diceutils::transcript::domain::{Label, TextSpan};
/// use diceutils::transcript::services::split_and_label;
///
/// assert_eq!(
///     split_and_label("他说“走吧”"),
///     [
///         TextSpan::labeled("他说", Label::Action),
///         TextSpan::labeled("走吧", Label::Speech),
///     ]
/// );
/// ```
#[must_use]
pub fn split_and_label(text: &str) -> Vec<TextSpan> {
    let mut spans = Vec::new();
    let mut inside_quote = false;
    let mut current = String::new();

    for character in text.chars() {
        if !QUOTES.contains(&character) {
            current.push(character);
            continue;
        }

        if inside_quote {
            spans.push(TextSpan::labeled(std::mem::take(&mut current), Label::Speech));
        } else if !current.is_empty() {
            spans.push(TextSpan::labeled(std::mem::take(&mut current), Label::Action));
        }
        inside_quote = !inside_quote;
    }

    if !current.is_empty() {
        let label = if inside_quote {
            Label::Speech
        } else {
            Label::Action
        };
        spans.push(TextSpan::labeled(current, label));
    }

    spans
}

/// Labels message content according to an [`ExportConfig`].
#[derive(Debug, Clone, Default)]
pub struct MessageLabeler {
    config: ExportConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MessageKind {
    Command,
    Comment,
    Narrative,
}

impl MessageLabeler {
    /// Creates a labeler.
    #[must_use]
    pub const fn new(config: ExportConfig) -> Self {
        Self { config }
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Labels every text element of `message`.
    ///
    /// Returns `None` when the message is dropped: it is empty, or the
    /// configuration hides dice commands, dice-bot replies,
    /// out-of-character comments, or (for image-only messages) images.
    ///
    /// A message whose first element starts with `.`, `。` or `/` is a
    /// command echo: the first element is labeled [`Label::Command`] and
    /// later text [`Label::Invalid`]. One starting with `(` or `（` is an
    /// out-of-character comment labeled [`Label::Outside`] throughout.
    /// Anything else is trimmed and split by [`split_and_label`]. Images are
    /// kept only when `display_image` is set.
    #[must_use]
    pub fn label(&self, message: Message) -> Option<Message> {
        let kind = classify(message.elements().first()?);
        let config = &self.config;

        if message.role() == Role::Dicer && !config.display_dice_command {
            debug!(user = message.user_code(), "dropping dice-bot reply");
            return None;
        }
        if kind == MessageKind::Comment && !config.display_external_comment {
            debug!(user = message.user_code(), "dropping out-of-character comment");
            return None;
        }
        if kind == MessageKind::Command && !config.display_dice_command {
            debug!(user = message.user_code(), "dropping dice command");
            return None;
        }

        let image_only = matches!(message.elements(), [Element::Image(_)]);
        if image_only {
            if config.display_image {
                return Some(message);
            }
            debug!(user = message.user_code(), "dropping image-only message");
            return None;
        }

        let display_image = config.display_image;
        Some(message.map_elements(|source| match kind {
            MessageKind::Command => {
                label_whole(source, Label::Command, Label::Invalid, display_image)
            }
            MessageKind::Comment => {
                label_whole(source, Label::Outside, Label::Outside, display_image)
            }
            MessageKind::Narrative => segment(source, display_image),
        }))
    }
}

fn classify(first: &Element) -> MessageKind {
    let Some(span) = first.as_text() else {
        return MessageKind::Narrative;
    };
    let content = span.content.trim();
    if content.starts_with(COMMAND_PREFIXES) {
        MessageKind::Command
    } else if content.starts_with(COMMENT_PREFIXES) {
        MessageKind::Comment
    } else {
        MessageKind::Narrative
    }
}

fn label_whole(
    elements: Vec<Element>,
    first_label: Label,
    other_label: Label,
    display_image: bool,
) -> Vec<Element> {
    elements
        .into_iter()
        .enumerate()
        .filter_map(|(index, element)| match element {
            Element::Text(span) => {
                let label = if index == 0 { first_label } else { other_label };
                Some(Element::labeled(span.content, label))
            }
            Element::Image(_) => display_image.then_some(element),
        })
        .collect()
}

fn segment(elements: Vec<Element>, display_image: bool) -> Vec<Element> {
    let mut output = Vec::with_capacity(elements.len());
    for element in elements {
        match element {
            Element::Text(span) => {
                output.extend(
                    split_and_label(span.content.trim())
                        .into_iter()
                        .map(Element::Text),
                );
            }
            Element::Image(_) => {
                if display_image {
                    output.push(element);
                }
            }
        }
    }
    output
}
