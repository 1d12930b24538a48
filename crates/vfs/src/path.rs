//! Slash-delimited virtual paths.
//!
//! A [`VPath`] is an ordered list of non-empty name segments. The empty list
//! is the root. Paths never carry `.` or `..`; those only appear as synthetic
//! entries inside a directory listing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, VfsError};

/// A path inside the virtual tree, relative to whatever node it is applied to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VPath(Vec<String>);

impl VPath {
    /// The empty path, denoting the root.
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Build a path from already-split segments.
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    /// Parse `/a/b/c` style text.
    ///
    /// Empty segments are dropped, so `"/a//b/"` and `"a/b"` both give `[a, b]`.
    pub fn parse(text: &str) -> Result<Self> {
        let mut segments = Vec::new();
        for segment in text.split('/').filter(|s| !s.is_empty()) {
            if segment == "." || segment == ".." {
                return Err(VfsError::InvalidPath {
                    path: text.to_string(),
                    reason: "dot segments are not supported",
                });
            }
            segments.push(segment.to_string());
        }
        Ok(Self(segments))
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// All segments but the last. The root is its own parent.
    pub fn parent(&self) -> VPath {
        match self.0.split_last() {
            Some((_, rest)) => Self(rest.to_vec()),
            None => Self::root(),
        }
    }

    /// The leaf name, or `None` for the root.
    pub fn name(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    /// The first segment and the remaining segments, or `None` for the root.
    pub fn split_first(&self) -> Option<(&str, &[String])> {
        self.0
            .split_first()
            .map(|(first, rest)| (first.as_str(), rest))
    }

    /// A new path with `name` appended.
    pub fn join(&self, name: impl Into<String>) -> VPath {
        let mut segments = self.0.clone();
        segments.push(name.into());
        Self(segments)
    }
}

impl fmt::Display for VPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.0.join("/"))
    }
}

impl FromStr for VPath {
    type Err = VfsError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for VPath {
    type Error = VfsError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<VPath> for String {
    fn from(path: VPath) -> Self {
        path.to_string()
    }
}

impl<S: Into<String>> FromIterator<S> for VPath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}
