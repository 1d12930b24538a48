//! HTTP front end.
//!
//! A blocking `tiny_http` server that answers one request at a time. Every
//! request is normalised and routed, then answered with an HTML page, a
//! redirect, or a static download.

use std::fs::File;
use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use chrono::Utc;
use tiny_http::{Header, Method, Request, Server};
use tracing::{debug, info, warn};
use vfs::{build_root, not_found, VPath};

use crate::config::Config;
use crate::render::{html, Prompt};
use crate::router::{Response, Router};

const HTML: &str = "text/html; charset=utf-8";

fn header(name: &str, value: &str) -> Result<Header> {
    Header::from_bytes(name.as_bytes(), value.as_bytes())
        .map_err(|_| anyhow!("invalid header {name}: {value}"))
}

/// The site's HTTP server.
pub struct SiteServer {
    server: Server,
    router: Router,
    prompt: Prompt,
    assets: Option<PathBuf>,
}

impl SiteServer {
    /// Bind `addr` and serve `router`.
    pub fn bind(
        addr: &str,
        router: Router,
        prompt: Prompt,
        assets: Option<PathBuf>,
    ) -> Result<Self> {
        let server = Server::http(addr).map_err(|e| anyhow!("Failed to bind {addr}: {e}"))?;
        Ok(Self {
            server,
            router,
            prompt,
            assets,
        })
    }

    /// Bind the configured address and serve a tree built from the
    /// configured metadata.
    pub fn from_config(config: &Config) -> Result<Self> {
        let root = build_root(&config.tree.metadata(Utc::now()));
        Self::bind(
            &config.server.bind,
            Router::new(root),
            Prompt::from(&config.prompt),
            config.assets.dir.clone(),
        )
    }

    /// The address actually bound, useful after binding port 0.
    pub fn local_addr(&self) -> Result<SocketAddr> {
        self.server
            .server_addr()
            .to_ip()
            .context("Server is not listening on an IP socket")
    }

    /// Serve requests until [`SiteServer::shutdown`] is called.
    pub fn run(&self) -> Result<()> {
        info!("Serving on {}", self.local_addr()?);

        for request in self.server.incoming_requests() {
            if let Err(e) = self.handle(request) {
                warn!("Failed to answer request: {:#}", e);
            }
        }

        info!("Server stopped");
        Ok(())
    }

    /// Stop a running [`SiteServer::run`] loop.
    pub fn shutdown(&self) {
        info!("Shutting down server");
        self.server.unblock();
    }

    fn handle(&self, request: Request) -> Result<()> {
        let method = request.method().clone();
        if !matches!(method, Method::Get | Method::Head) {
            debug!(method = %method, url = request.url(), "Rejecting method");
            let response = tiny_http::Response::from_string("method not allowed\n")
                .with_status_code(405)
                .with_header(header("Allow", "GET, HEAD")?);
            return request.respond(response).context("Failed to send 405");
        }

        let (path, routed) = self.router.route_raw(request.url());
        info!(method = %method, path = %path, kind = routed.kind(), "Request");

        match &routed {
            Response::Redirect(target) => {
                let response = tiny_http::Response::from_string(html::page(&routed, &self.prompt))
                    .with_status_code(302)
                    .with_header(header("Content-Type", HTML)?)
                    .with_header(header("Location", target)?);
                request.respond(response).context("Failed to send redirect")
            }
            Response::Download { path } => self.download(request, path),
            Response::NotFound(_) => self.send_page(request, &routed, 404),
            Response::Page(_) | Response::Terminal { .. } => {
                self.send_page(request, &routed, 200)
            }
        }
    }

    fn send_page(&self, request: Request, routed: &Response, status: u16) -> Result<()> {
        let response = tiny_http::Response::from_string(html::page(routed, &self.prompt))
            .with_status_code(status)
            .with_header(header("Content-Type", HTML)?);
        request.respond(response).context("Failed to send page")
    }

    fn download(&self, request: Request, path: &VPath) -> Result<()> {
        let file = self.assets.as_ref().and_then(|dir| {
            let file_path = path
                .segments()
                .iter()
                .fold(dir.clone(), |acc, segment| acc.join(segment));
            match File::open(&file_path) {
                Ok(file) => Some(file),
                Err(e) => {
                    warn!(path = %path, file = ?file_path, error = %e, "Static asset unavailable");
                    None
                }
            }
        });

        let Some(file) = file else {
            if self.assets.is_none() {
                warn!(path = %path, "No assets directory configured");
            }
            return self.send_page(request, &Response::NotFound(not_found(path)), 404);
        };

        let name = path.name().unwrap_or("download");
        let response = tiny_http::Response::from_file(file)
            .with_header(header("Content-Type", "application/octet-stream")?)
            .with_header(header(
                "Content-Disposition",
                &format!("attachment; filename=\"{name}\""),
            )?);
        request.respond(response).context("Failed to send download")
    }
}
