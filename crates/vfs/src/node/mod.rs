//! Virtual filesystem nodes.
//!
//! Every node carries the same [`Metadata`] plus one of a closed set of
//! variants ([`NodeKind`]). The capability operations (`cd`, `show`,
//! `show_entry`, and the metadata accessors) dispatch on the variant:
//!
//! | Variant      | Type | `cd` past itself          | `show`              |
//! |--------------|------|---------------------------|---------------------|
//! | `Directory`  | `d`  | child lookup              | `ls -al` listing    |
//! | `TextFile`   | `-`  | fails                     | `cat` transcript    |
//! | `StaticFile` | `-`  | fails                     | not renderable      |
//! | `PathLink`   | `l`  | re-resolved from the root | redirect to target  |
//! | `WebLink`    | `l`  | fails                     | redirect to URI     |
//! | `Terminal`   | `d`  | fails                     | interactive session |
//!
//! Internal links hold their target as a path and re-resolve it through the
//! root on every traversal, so the owned tree never contains a cycle.

mod directory;
mod file;
mod link;
mod terminal;

use chrono::{DateTime, Utc};

pub use directory::Directory;
pub use file::{StaticFile, TextFile};
pub use link::{PathLink, WebLink};
pub use terminal::Terminal;

use crate::error::{Result, VfsError};
use crate::metadata::{FileType, Metadata};
use crate::path::VPath;
use crate::perms::Permissions;
use crate::transcript::{Entry, Rendered};

/// Maximum number of internal links followed during one traversal, matching
/// the Linux `ELOOP` limit.
pub const MAX_LINK_HOPS: usize = 40;

/// The node variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Directory(Directory),
    TextFile(TextFile),
    StaticFile(StaticFile),
    PathLink(PathLink),
    WebLink(WebLink),
    Terminal(Terminal),
}

/// One entry of the virtual filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    meta: Metadata,
    kind: NodeKind,
}

impl Node {
    pub fn new(meta: Metadata, kind: NodeKind) -> Self {
        Self { meta, kind }
    }

    /// A directory with the given children, kept in insertion order.
    pub fn directory<I, S>(meta: Metadata, children: I) -> Self
    where
        I: IntoIterator<Item = (S, Node)>,
        S: Into<String>,
    {
        Self::new(meta, NodeKind::Directory(Directory::new(children)))
    }

    /// A regular file whose content is shown inline.
    pub fn text(meta: Metadata, content: impl Into<String>) -> Self {
        Self::new(meta, NodeKind::TextFile(TextFile::new(content)))
    }

    /// An opaque file served out of band (download) rather than rendered.
    pub fn static_file(meta: Metadata) -> Self {
        Self::new(meta, NodeKind::StaticFile(StaticFile))
    }

    /// A link to another path of the same tree.
    pub fn path_link(meta: Metadata, dest: VPath) -> Self {
        Self::new(meta, NodeKind::PathLink(PathLink::new(dest)))
    }

    /// A link to an external URI.
    pub fn web_link(meta: Metadata, href: impl Into<String>) -> Self {
        Self::new(meta, NodeKind::WebLink(WebLink::new(href)))
    }

    /// A directory-like node handing over to the interactive terminal.
    pub fn terminal(meta: Metadata) -> Self {
        Self::new(meta, NodeKind::Terminal(Terminal))
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn metadata(&self) -> &Metadata {
        &self.meta
    }

    pub fn as_directory(&self) -> Option<&Directory> {
        match &self.kind {
            NodeKind::Directory(dir) => Some(dir),
            _ => None,
        }
    }

    pub fn is_static(&self) -> bool {
        matches!(self.kind, NodeKind::StaticFile(_))
    }

    pub fn file_type(&self) -> FileType {
        match self.kind {
            NodeKind::Directory(_) | NodeKind::Terminal(_) => FileType::Directory,
            NodeKind::PathLink(_) | NodeKind::WebLink(_) => FileType::Link,
            NodeKind::TextFile(_) | NodeKind::StaticFile(_) => FileType::Regular,
        }
    }

    pub fn perms(&self) -> Permissions {
        self.meta.perms
    }

    pub fn links(&self) -> u64 {
        self.meta.links
    }

    pub fn user(&self) -> &str {
        &self.meta.user
    }

    pub fn group(&self) -> &str {
        &self.meta.group
    }

    pub fn size(&self) -> u64 {
        self.meta.size
    }

    pub fn modified(&self) -> DateTime<Utc> {
        self.meta.modified
    }

    /// Walk `path` starting at this node.
    ///
    /// Returns `None` as soon as a segment fails to resolve. Internal links
    /// with a remaining path first resolve their target from `root`.
    pub fn cd<'a>(&'a self, path: &VPath, root: &'a Node) -> Option<&'a Node> {
        self.walk(path.segments(), root, 0)
    }

    fn walk<'a>(&'a self, path: &[String], root: &'a Node, hops: usize) -> Option<&'a Node> {
        let Some((first, rest)) = path.split_first() else {
            return Some(self);
        };

        match &self.kind {
            NodeKind::Directory(dir) => dir.child(first)?.walk(rest, root, hops),
            NodeKind::PathLink(link) => {
                if hops >= MAX_LINK_HOPS {
                    return None;
                }
                root.walk(link.dest().segments(), root, hops + 1)?
                    .walk(path, root, hops + 1)
            }
            NodeKind::TextFile(_)
            | NodeKind::StaticFile(_)
            | NodeKind::WebLink(_)
            | NodeKind::Terminal(_) => None,
        }
    }

    /// Render this node as if the visitor had just navigated to `path`.
    ///
    /// `parent` is the node listed as `..` by directories. Static files have
    /// no transcript form and return [`VfsError::NotRenderable`]; callers serve
    /// them as downloads instead.
    pub fn show(&self, path: &VPath, parent: &Node) -> Result<Rendered> {
        match &self.kind {
            NodeKind::Directory(dir) => Ok(Rendered::Content(dir.listing(self, path, parent))),
            NodeKind::TextFile(file) => Ok(Rendered::Content(file.cat(path))),
            NodeKind::StaticFile(_) => Err(VfsError::NotRenderable {
                path: path.to_string(),
            }),
            NodeKind::PathLink(link) => Ok(Rendered::Redirect(link.dest().to_string())),
            NodeKind::WebLink(link) => Ok(Rendered::Redirect(link.href().to_string())),
            NodeKind::Terminal(terminal) => Ok(Rendered::Interactive(terminal.header(path))),
        }
    }

    /// Render this node as one line of its parent's listing.
    pub fn show_entry(&self, path: &VPath) -> Entry {
        let name = path.name().unwrap_or_default();
        match &self.kind {
            NodeKind::Directory(_) | NodeKind::Terminal(_) => Entry {
                label: format!("{name}/"),
                href: path.to_string(),
            },
            NodeKind::PathLink(link) => {
                let dest = link.dest().to_string();
                Entry {
                    label: format!("{name} -> {dest}"),
                    href: dest,
                }
            }
            NodeKind::WebLink(link) => Entry {
                label: format!("{name} -> {}", link.href()),
                href: link.href().to_string(),
            },
            NodeKind::TextFile(_) | NodeKind::StaticFile(_) => Entry {
                label: name.to_string(),
                href: path.to_string(),
            },
        }
    }
}

/// `cmd name`, or just `cmd` at the root.
pub(crate) fn command_for(cmd: &str, path: &VPath) -> String {
    match path.name() {
        Some(name) => format!("{cmd} {name}"),
        None => cmd.to_string(),
    }
}
