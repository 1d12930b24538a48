//! The interactive terminal node.
//!
//! Rendering only produces the `cd` header. The session itself (command
//! history, the embedded tools) lives in the browser widget the presentation
//! layer mounts after the header.

use super::command_for;
use crate::path::VPath;
use crate::transcript::{Line, Transcript};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Terminal;

impl Terminal {
    pub(crate) fn header(&self, path: &VPath) -> Transcript {
        Transcript::new().line(Line::command(path.parent(), command_for("cd", path)))
    }
}
