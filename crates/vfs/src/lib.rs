//! # termfolio virtual filesystem
//!
//! This crate models the small, read-only filesystem a termfolio site is
//! browsed through, and renders its nodes as faux shell output.
//!
//! ## Overview
//!
//! - **Paths**: slash-delimited [`VPath`]s, formatted as `/a/b`
//! - **Permissions**: the 9-character `rwxr-xr-x` codec, including setuid,
//!   setgid and sticky bits
//! - **Nodes**: directories, text files, opaque static files, internal and
//!   external links, and the interactive terminal, all behind [`Node`]
//! - **Tree**: the fixed site hierarchy, built once per process
//! - **Resolution**: request path to node, or a `file` not-found transcript
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────┐
//! │   resolve / not_found        │  request path -> Resolved | NotFound
//! ├──────────────────────────────┤
//! │   tree                       │  fixed hierarchy, process-wide root
//! ├──────────────────────────────┤
//! │   node (cd, show, entry)     │  -> Rendered { Content | Redirect | Interactive }
//! ├──────────────────────────────┤
//! │   path · perms · metadata    │
//! └──────────────────────────────┘
//! ```
//!
//! ## Example Usage
//!
//! ```rust
//! use vfs::{resolve, root, Rendered, VPath};
//!
//! let path: VPath = "/links".parse().unwrap();
//! let resolved = resolve(root(), &path).unwrap();
//!
//! match resolved.show().unwrap() {
//!     Rendered::Content(transcript) => println!("{}", transcript.plain()),
//!     Rendered::Redirect(target) => println!("-> {target}"),
//!     Rendered::Interactive(header) => println!("{}", header.plain()),
//! }
//! ```
//!
//! ## Modules
//!
//! - [`path`]: virtual paths
//! - [`perms`]: permission text codec
//! - [`metadata`]: per-node metadata and file types
//! - [`node`]: node variants and their capability operations
//! - [`listing`]: column alignment and name ordering
//! - [`transcript`]: render results
//! - [`tree`]: the site tree
//! - [`resolve`]: request-path lookup
//! - [`error`]: error types

pub mod error;
pub mod listing;
pub mod metadata;
pub mod node;
pub mod path;
pub mod perms;
pub mod resolve;
pub mod transcript;
pub mod tree;

pub use error::{Result, VfsError};
pub use metadata::{FileType, Metadata};
pub use node::{Node, NodeKind, MAX_LINK_HOPS};
pub use path::VPath;
pub use perms::{Permissions, Triad};
pub use resolve::{not_found, resolve, Resolved};
pub use transcript::{Entry, Line, Rendered, Segment, Transcript};
pub use tree::{build_root, root};
