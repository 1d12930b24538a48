//! Error types for the vfs crate.

use thiserror::Error;

/// Virtual filesystem error type covering all failure modes of the core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VfsError {
    // Validation errors
    /// Permission text does not match the 9-character `rwx` grammar.
    #[error("invalid permission string: {0:?}")]
    InvalidPermissions(String),

    /// Path text contains a segment that paths cannot carry.
    #[error("invalid path {path:?}: {reason}")]
    InvalidPath {
        /// The offending path text.
        path: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    // Resolution errors
    /// Some segment of the path failed to resolve.
    #[error("file not found: {path}")]
    NotFound {
        /// Display form of the unresolved path.
        path: String,
    },

    /// The node has no transcript form and must be served out of band.
    #[error("node cannot be rendered: {path}")]
    NotRenderable {
        /// Display form of the node's path.
        path: String,
    },
}

/// Result type alias for vfs operations.
pub type Result<T> = std::result::Result<T, VfsError>;
