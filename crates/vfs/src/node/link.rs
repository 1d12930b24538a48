//! Symbolic-link style nodes.

use crate::path::VPath;

/// A link to another path inside the tree, re-resolved from the root on
/// every traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathLink {
    dest: VPath,
}

impl PathLink {
    pub fn new(dest: VPath) -> Self {
        Self { dest }
    }

    pub fn dest(&self) -> &VPath {
        &self.dest
    }
}

/// A link pointing outside the tree (`https:`, `mailto:`, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebLink {
    href: String,
}

impl WebLink {
    pub fn new(href: impl Into<String>) -> Self {
        Self { href: href.into() }
    }

    pub fn href(&self) -> &str {
        &self.href
    }
}
