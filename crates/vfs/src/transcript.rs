//! Faux-shell output produced by rendering a node.
//!
//! The core never formats HTML or ANSI text. It returns a [`Rendered`] value
//! made of [`Transcript`] lines, and the presentation layer decides how the
//! prompt, plain text, and links look.

use serde::{Deserialize, Serialize};

use crate::path::VPath;

/// One piece of a transcript line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Segment {
    /// Literal text.
    Text { text: String },
    /// The shell prompt, showing `path` as the working directory.
    Prompt { path: VPath },
    /// A hyperlink.
    Link { label: String, href: String },
}

/// A single output line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Line(pub Vec<Segment>);

impl Line {
    pub fn new() -> Self {
        Self::default()
    }

    /// A line holding only `text`.
    pub fn text(text: impl Into<String>) -> Self {
        Self::new().push_text(text)
    }

    /// A prompt at `cwd` followed by a typed command, e.g. `$ ls -al blog`.
    pub fn command(cwd: VPath, command: impl Into<String>) -> Self {
        Self::new()
            .push(Segment::Prompt { path: cwd })
            .push_text(format!(" {}", command.into()))
    }

    pub fn push(mut self, segment: Segment) -> Self {
        self.0.push(segment);
        self
    }

    /// Append text, merging with a trailing text segment.
    pub fn push_text(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        match self.0.last_mut() {
            Some(Segment::Text { text: last }) => last.push_str(&text),
            _ => self.0.push(Segment::Text { text }),
        }
        self
    }

    pub fn push_link(self, label: impl Into<String>, href: impl Into<String>) -> Self {
        self.push(Segment::Link {
            label: label.into(),
            href: href.into(),
        })
    }

    pub fn segments(&self) -> &[Segment] {
        &self.0
    }

    /// The line with prompts rendered as `$` and links as their labels.
    pub fn plain(&self) -> String {
        let mut out = String::new();
        for segment in &self.0 {
            match segment {
                Segment::Text { text } => out.push_str(text),
                Segment::Prompt { .. } => out.push('$'),
                Segment::Link { label, .. } => out.push_str(label),
            }
        }
        out
    }
}

/// Ordered transcript lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    pub lines: Vec<Line>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(mut self, line: Line) -> Self {
        self.lines.push(line);
        self
    }

    /// Append `content` verbatim, one transcript line per text line.
    pub fn text_block(mut self, content: &str) -> Self {
        self.lines.extend(content.lines().map(Line::text));
        self
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// All links in order of appearance.
    pub fn links(&self) -> impl Iterator<Item = (&str, &str)> {
        self.lines.iter().flat_map(|line| {
            line.0.iter().filter_map(|segment| match segment {
                Segment::Link { label, href } => Some((label.as_str(), href.as_str())),
                _ => None,
            })
        })
    }

    /// Every line in [`Line::plain`] form, newline-joined.
    pub fn plain(&self) -> String {
        self.lines
            .iter()
            .map(Line::plain)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Result of rendering a node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Rendered {
    /// A transcript to display.
    Content(Transcript),
    /// The caller should redirect to this target (site path or external URI).
    Redirect(String),
    /// A transcript header, after which the interactive terminal takes over.
    Interactive(Transcript),
}

/// How a node appears as one line inside its parent's listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub label: String,
    pub href: String,
}
