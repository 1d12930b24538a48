//! # termfolio site
//!
//! This crate puts the [`vfs`] tree on the web. It owns everything outside
//! the filesystem model: configuration, request routing, HTML and terminal
//! presentation, and the HTTP server behind the `termfolio` binary.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                 SiteServer                  │  tiny_http, one request at a time
//! ├─────────────────────────────────────────────┤
//! │  Router                                     │  URL -> VPath -> Response
//! │    Page | Terminal | Redirect | Download    │
//! │    | NotFound                               │
//! ├──────────────────────┬──────────────────────┤
//! │  render::html        │  render::text        │  browser / CLI output
//! ├──────────────────────┴──────────────────────┤
//! │  vfs                                        │  tree, resolve, transcripts
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use site::{Config, SiteServer};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Config::load_default()?;
//!     config.validate()?;
//!
//!     let server = SiteServer::from_config(&config)?;
//!     server.run()
//! }
//! ```

pub mod config;
pub mod logging;
pub mod render;
pub mod router;
pub mod server;

pub use config::{Config, ConfigError};
pub use render::Prompt;
pub use router::{normalize_request_path, Response, Router};
pub use server::SiteServer;
