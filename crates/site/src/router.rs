//! Request router mapping URL paths onto the virtual filesystem.
//!
//! The router is the collaborator the core expects on its outer edge: it
//! normalises the raw request target, resolves it against the tree, and
//! decides what kind of response the node calls for. Lookup failures never
//! escape as errors; they become the `file` not-found page.

use serde::Serialize;
use tracing::{debug, warn};
use url::Url;
use vfs::{not_found, resolve, Node, Rendered, Transcript, VPath, VfsError};

/// What the front end should send back for a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum Response {
    /// A directory listing or file body.
    Page(Transcript),
    /// The interactive terminal, mounted at `cwd` below `header`.
    Terminal { cwd: VPath, header: Transcript },
    /// Redirect to a site path or an external URI.
    Redirect(String),
    /// An opaque static file, served as a download.
    Download { path: VPath },
    /// Nothing lives at the requested path.
    NotFound(Transcript),
}

impl Response {
    /// Short name used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Response::Page(_) => "page",
            Response::Terminal { .. } => "terminal",
            Response::Redirect(_) => "redirect",
            Response::Download { .. } => "download",
            Response::NotFound(_) => "not_found",
        }
    }
}

/// Turn a raw request target into a virtual path.
///
/// The query string and fragment are dropped, `.` and `..` are resolved
/// against the root the way a browser would, and empty segments disappear.
/// Segments are kept in their percent-encoded form.
pub fn normalize_request_path(raw: &str) -> VPath {
    let target = if raw.starts_with('/') {
        format!("http://localhost{raw}")
    } else {
        format!("http://localhost/{raw}")
    };

    match Url::parse(&target) {
        Ok(url) => url
            .path_segments()
            .map(|segments| {
                segments
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default(),
        Err(e) => {
            warn!(raw, error = %e, "Unparsable request target, using root");
            VPath::root()
        }
    }
}

/// Routes request paths against one tree.
#[derive(Debug, Clone)]
pub struct Router {
    root: Node,
}

impl Router {
    /// Create a router serving `root`.
    pub fn new(root: Node) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Route a raw request target.
    pub fn route_raw(&self, raw: &str) -> (VPath, Response) {
        let path = normalize_request_path(raw);
        let response = self.route(&path);
        (path, response)
    }

    /// Route an already normalised path.
    pub fn route(&self, path: &VPath) -> Response {
        let resolved = match resolve(&self.root, path) {
            Ok(resolved) => resolved,
            Err(e) => {
                debug!(path = %path, error = %e, "Path did not resolve");
                return Response::NotFound(not_found(path));
            }
        };

        // Static files have no transcript; the front end streams the bytes.
        if resolved.node.is_static() {
            debug!(path = %path, "Routing static file to download");
            return Response::Download { path: path.clone() };
        }

        let response = match resolved.show() {
            Ok(Rendered::Content(transcript)) => Response::Page(transcript),
            Ok(Rendered::Redirect(target)) => Response::Redirect(target),
            Ok(Rendered::Interactive(header)) => Response::Terminal {
                cwd: path.clone(),
                header,
            },
            Err(VfsError::NotRenderable { .. }) => Response::Download { path: path.clone() },
            Err(e) => {
                warn!(path = %path, error = %e, "Render failed");
                Response::NotFound(not_found(path))
            }
        };

        debug!(path = %path, kind = response.kind(), "Routed request");
        response
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new(vfs::root().clone())
    }
}
