//! Regular files.

use super::command_for;
use crate::path::VPath;
use crate::transcript::{Line, Transcript};

/// A regular file with inline text content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFile {
    content: String,
}

impl TextFile {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// `cat` transcript: the command line, then the content verbatim.
    pub(crate) fn cat(&self, path: &VPath) -> Transcript {
        Transcript::new()
            .line(Line::command(path.parent(), command_for("cat", path)))
            .text_block(&self.content)
    }
}

/// An opaque file (a key, an archive, ...) with no transcript form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticFile;
