//! Request-path resolution against a tree root.
//!
//! Resolution first walks to the parent of the requested path, then looks
//! the leaf name up from there, so the parent node is at hand for the `..`
//! entry of a directory listing.

use crate::error::{Result, VfsError};
use crate::node::Node;
use crate::path::VPath;
use crate::transcript::{Line, Rendered, Transcript};

/// A successfully resolved path.
#[derive(Debug, Clone, Copy)]
pub struct Resolved<'a> {
    /// The node the path names.
    pub node: &'a Node,
    /// The node the parent path names (the root for the root itself).
    pub parent: &'a Node,
    /// The full requested path.
    pub path: &'a VPath,
}

impl<'a> Resolved<'a> {
    /// Render the node with its path and parent.
    pub fn show(&self) -> Result<Rendered> {
        self.node.show(self.path, self.parent)
    }
}

/// Resolve `path` from `root`.
pub fn resolve<'a>(root: &'a Node, path: &'a VPath) -> Result<Resolved<'a>> {
    let not_found = || VfsError::NotFound {
        path: path.to_string(),
    };

    let parent = root.cd(&path.parent(), root).ok_or_else(not_found)?;
    let node = match path.name() {
        Some(name) => parent
            .cd(&VPath::new([name]), root)
            .ok_or_else(not_found)?,
        None => parent,
    };

    Ok(Resolved { node, parent, path })
}

/// The `file` transcript shown when `path` does not resolve.
pub fn not_found(path: &VPath) -> Transcript {
    let name = path.name().unwrap_or_default();
    Transcript::new()
        .line(Line::command(path.parent(), format!("file {name}")))
        .line(Line::text(format!(
            "{name}: cannot open `{name}' (No such file or directory)"
        )))
}
