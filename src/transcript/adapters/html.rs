//! Standalone HTML export.

use minijinja::{Environment, context};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::transcript::{
    domain::{Element, ExportConfig, Label, Message, Role},
    error::TranscriptError,
    ports::Renderer,
};

const TEMPLATE_NAME: &str = "transcript.html";

const TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="zh-CN">
  <head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width,initial-scale=1">
    <title>{{ title }}</title>
    <style>
      body { margin: 0; width: 100%; color: #3c3c43; background-color: #f6f6f7; }
      img { max-width: 100%; height: auto; }
      hr { width: 100%; }
      p { white-space: pre-wrap; }
      p.indent { text-indent: 2em; }
      .tooltip { position: relative; display: inline-block; }
      .tooltip .tooltiptext { visibility: hidden; position: absolute; z-index: 1; bottom: calc(100% + 5px); padding: 5px; border-radius: 6px; background-color: #555; color: #fff; opacity: 0; transition: opacity 0.3s; }
      .tooltip:hover .tooltiptext { visibility: visible; opacity: 1; }
      .flex { display: flex; }
      .flex-col { flex-direction: column; }
      .flex-row { flex-direction: row; }
      .flex-wrap { flex-wrap: wrap; }
      .items-center { align-items: center; }
      .items-start { align-items: start; }
      .justify-center { justify-content: center; }
      .justify-start { justify-content: start; }
      .w-full { width: 100%; }
      .w-4 { width: 5rem; }
      .m-2 { margin: 2rem; }
      .text-2 { font-size: 0.6rem; }
      .text-coolGray { color: rgb(207, 210, 210); }
      .text-kai { font-family: 楷体, Microsoft Yahei, Arial; font-size: 1.1rem; }
      .text-italic { font-style: italic; }
      .text-simsun { font-family: Cascadia Mono, SimSun, Microsoft Yahei, Arial; }
      .text-cascadia { font-family: Cascadia Mono, Arial; }
    </style>
  </head>
  <body>
    <div class="m-2 flex items-start justify-center flex-col">
      <h1>{{ title }}</h1><hr />
{%- for message in messages %}
      <div class="flex items-center justify-start flex-row w-full flex-wrap">
        <div class="flex items-start justify-center flex-col w-4">
          <span class="text-2">{{ message.role }}</span>
          <span>{{ message.nickname }}</span>
          {%- if message.account %}
          <span class="text-2">{{ message.account }}</span>
          {%- endif %}
        </div>
        <div><p class="tooltip{% if indent %} indent{% endif %}">
          {%- for span in message.spans -%}
            {%- if span.image -%}
              <span><img src="{{ span.image }}"></span>
            {%- else -%}
              <span class="{{ span.class }}">{{ span.text }}</span>
            {%- endif -%}
          {%- endfor -%}
          {%- if message.date -%}
            <span class="tooltiptext">{{ message.date }}</span>
          {%- endif -%}
        </p></div>
      </div>
{%- endfor %}
    </div>
  </body>
</html>
"#;

const ACTION_CLASS: &str = "text-simsun text-italic";
const KEEPER_CLASS: &str = "text-kai";
const SPEECH_CLASS: &str = "text-simsun";
const COMMAND_CLASS: &str = "text-cascadia";
const OUTSIDE_CLASS: &str = "flex items-center justify-center text-coolGray";
const PLAIN_CLASS: &str = "";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct RenderedSpan {
    class: &'static str,
    text: String,
    image: Option<String>,
}

impl RenderedSpan {
    fn text(class: &'static str, text: impl Into<String>) -> Self {
        Self {
            class,
            text: text.into(),
            image: None,
        }
    }

    fn image(url: &str) -> Self {
        Self {
            class: PLAIN_CLASS,
            text: String::new(),
            image: Some(url.to_owned()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct RenderedMessage {
    role: &'static str,
    nickname: String,
    account: Option<String>,
    date: Option<String>,
    spans: Vec<RenderedSpan>,
}

/// Renders labeled messages into a single HTML page.
///
/// Text is escaped. Dice-bot text is shown plain and observer text as
/// out-of-character regardless of label; a game master's narration uses
/// the keeper style.
#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer {
    config: ExportConfig,
    messages: Vec<RenderedMessage>,
}

impl HtmlRenderer {
    /// Creates an empty renderer.
    #[must_use]
    pub const fn new(config: ExportConfig) -> Self {
        Self {
            config,
            messages: Vec::new(),
        }
    }

    /// Returns the number of messages rendered so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns `true` when nothing has been rendered yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Produces the full HTML document.
    ///
    /// # Errors
    ///
    /// Returns [`TranscriptError::Template`] when template rendering fails.
    pub fn document(&self, title: &str) -> Result<String, TranscriptError> {
        let mut environment = Environment::new();
        environment
            .add_template(TEMPLATE_NAME, TEMPLATE)
            .map_err(|error| TranscriptError::Template(error.to_string()))?;
        let template = environment
            .get_template(TEMPLATE_NAME)
            .map_err(|error| TranscriptError::Template(error.to_string()))?;

        template
            .render(context! {
                title => title,
                indent => self.config.first_line_indent,
                messages => &self.messages,
            })
            .map_err(|error| TranscriptError::Template(error.to_string()))
    }

    fn render_date(&self, date: &str) -> Option<String> {
        if !self.config.display_datetime {
            return None;
        }
        if self.config.display_year_month_day {
            return Some(date.to_owned());
        }
        Some(
            date.rsplit_once(' ')
                .map_or(date, |(_, time)| time)
                .to_owned(),
        )
    }
}

impl Renderer for HtmlRenderer {
    fn render_message(&mut self, message: &Message) -> Result<(), TranscriptError> {
        let spans = message
            .elements()
            .iter()
            .enumerate()
            .filter_map(|(index, element)| render_element(message.role(), element, index == 0))
            .collect();

        self.messages.push(RenderedMessage {
            role: message.role().as_str(),
            nickname: message.nickname().to_owned(),
            account: self
                .config
                .display_account
                .then(|| message.user_code().to_owned()),
            date: self.render_date(message.date()),
            spans,
        });
        Ok(())
    }

    fn export(&self, directory: &Path, filename: &str) -> Result<PathBuf, TranscriptError> {
        let document = self.document(filename)?;
        let path = directory.join(format!("{filename}.html"));

        fs::create_dir_all(directory).map_err(|source| TranscriptError::Export {
            path: directory.display().to_string(),
            source,
        })?;
        fs::write(&path, document).map_err(|source| TranscriptError::Export {
            path: path.display().to_string(),
            source,
        })?;

        info!(path = %path.display(), messages = self.messages.len(), "exported html transcript");
        Ok(path)
    }
}

fn render_element(role: Role, element: &Element, is_first: bool) -> Option<RenderedSpan> {
    let span = match element {
        Element::Image(image) => return Some(RenderedSpan::image(&image.url)),
        Element::Text(span) => span,
    };
    let content = span.content.as_str();

    match role {
        Role::Dicer => return Some(RenderedSpan::text(PLAIN_CLASS, content)),
        Role::Ob => return Some(outside(content)),
        Role::Gm | Role::Pl => {}
    }

    match span.label {
        None | Some(Label::Action) if role == Role::Gm => {
            Some(RenderedSpan::text(KEEPER_CLASS, content))
        }
        None | Some(Label::Action) => Some(action(content, is_first)),
        Some(Label::Speech) => Some(RenderedSpan::text(
            SPEECH_CLASS,
            format!("“{}”", content.trim_matches(['"', '“', '”'])),
        )),
        Some(Label::Command) => Some(RenderedSpan::text(COMMAND_CLASS, content)),
        Some(Label::Outside) => Some(outside(content)),
        Some(Label::Invalid) => None,
    }
}

fn action(content: &str, is_first: bool) -> RenderedSpan {
    if is_first {
        RenderedSpan::text(
            ACTION_CLASS,
            format!("#{}", content.trim_matches(['#', '＃'])),
        )
    } else {
        RenderedSpan::text(ACTION_CLASS, content)
    }
}

fn outside(content: &str) -> RenderedSpan {
    RenderedSpan::text(
        OUTSIDE_CLASS,
        format!("（{}）", content.trim_matches(['(', ')', '（', '）'])),
    )
}
