//! Development server.
//!
//! | Route             | Method | Handler                         |
//! |-------------------|--------|---------------------------------|
//! | `/sitemap.xml`    | GET    | [`sitemap::respond`]            |
//! | `/robots.txt`     | GET    | [`robots::respond`]             |
//! | `/api/contact`    | POST   | [`contact::respond`]            |
//!
//! Every sitemap request reloads content from disk, so edits show up on the
//! next request without a rebuild.

mod lifecycle;
mod response;

use crate::{
    config::SiteConfig,
    contact,
    content::ContentSet,
    core::Reply,
    debug,
    generator::{robots, sitemap},
    log,
};
use anyhow::{Context, Result};
use chrono::Utc;
use std::io::Read;
use std::sync::Arc;
use tiny_http::{Method, Request, Server};

/// Path of the contact endpoint.
pub const CONTACT_PATH: &str = "/api/contact";

/// Number of worker threads answering requests.
const REQUEST_THREADS: usize = 4;

/// Largest request body accepted, in bytes.
const MAX_BODY_BYTES: u64 = 64 * 1024;

/// Bound server ready to accept requests
pub struct BoundServer {
    server: Arc<Server>,
}

/// Bind the HTTP server and register it for Ctrl+C shutdown.
pub fn bind_server(config: &SiteConfig) -> Result<BoundServer> {
    let (server, addr) = lifecycle::bind_with_retry(config.serve.interface, config.serve.port)?;
    let server = Arc::new(server);
    lifecycle::register_server_for_shutdown(Arc::clone(&server));

    log!("serve"; "http://{}", addr);
    if config.base_url().is_none() {
        debug!("serve"; "no base URL, sitemap locations are root-relative");
    }

    Ok(BoundServer { server })
}

impl BoundServer {
    /// Start the request loop (blocking until shutdown).
    pub fn run(self, config: Arc<SiteConfig>) -> Result<()> {
        run_request_loop(&self.server, config)
    }
}

/// Serve until Ctrl+C.
pub fn serve_site(config: SiteConfig) -> Result<()> {
    let bound = bind_server(&config)?;
    bound.run(Arc::new(config))
}

fn run_request_loop(server: &Server, config: Arc<SiteConfig>) -> Result<()> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(REQUEST_THREADS)
        .build()
        .context("Failed to create request thread pool")?;

    for request in server.incoming_requests() {
        let config = Arc::clone(&config);
        pool.spawn(move || {
            if let Err(e) = handle_request(request, &config) {
                log!("serve"; "request error: {e}");
            }
        });
    }
    Ok(())
}

/// Handle a single HTTP request
fn handle_request(mut request: Request, config: &SiteConfig) -> Result<()> {
    if crate::core::is_shutdown() {
        return response::respond_unavailable(request);
    }

    let body = if request.method() == &Method::Post {
        read_body(request.as_reader(), MAX_BODY_BYTES)?
    } else {
        Some(Vec::new())
    };

    let reply = match body {
        Some(body) => route(request.method(), request.url(), &body, config),
        None => Reply::text(413, "413 Payload Too Large"),
    };
    debug!("serve"; "{} {} -> {}", request.method(), request.url(), reply.status);
    response::respond_reply(request, reply)
}

/// Read at most `limit` bytes; `None` when the body is larger.
fn read_body(reader: impl Read, limit: u64) -> Result<Option<Vec<u8>>> {
    let mut body = Vec::new();
    reader
        .take(limit + 1)
        .read_to_end(&mut body)
        .context("Failed to read request body")?;

    if body.len() as u64 > limit {
        return Ok(None);
    }
    Ok(Some(body))
}

/// Dispatch a request to its handler.
///
/// The query string is ignored. HEAD is answered like GET (tiny_http drops
/// the body).
pub fn route(method: &Method, url: &str, body: &[u8], config: &SiteConfig) -> Reply {
    let path = url.split(['?', '#']).next().unwrap_or_default();
    let is_get = matches!(method, Method::Get | Method::Head);

    let sitemap_path = format!("/{}", config.sitemap.path.to_string_lossy());
    let robots_path = format!("/{}", config.robots.path.to_string_lossy());

    if config.sitemap.enable && path == sitemap_path {
        if !is_get {
            return method_not_allowed();
        }
        return match ContentSet::load(config.content_dir()) {
            Ok(content) => sitemap::respond(config, &content, Utc::now()),
            Err(err) => {
                log!("error"; "{err}");
                Reply::text(500, err.to_string())
            }
        };
    }

    if config.robots.enable && path == robots_path {
        if !is_get {
            return method_not_allowed();
        }
        return robots::respond(config);
    }

    if path == CONTACT_PATH {
        if method != &Method::Post {
            return method_not_allowed();
        }
        return contact::respond(body);
    }

    Reply::text(404, "404 Not Found")
}

fn method_not_allowed() -> Reply {
    Reply::text(405, "405 Method Not Allowed")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use crate::utils::mime::types::{JSON, XML};
    use std::fs;
    use tempfile::TempDir;

    fn config_with_content(toml: &str) -> (TempDir, SiteConfig) {
        let dir = TempDir::new().unwrap();
        let page = dir.path().join("content/pages/now.md");
        fs::create_dir_all(page.parent().unwrap()).unwrap();
        fs::write(&page, "---\nlang: en\nslug: now\nlastmod: 2024-01-01\n---\n").unwrap();

        let mut config = test_parse_config(toml);
        config.build.content = dir.path().join("content");
        (dir, config)
    }

    #[test]
    fn test_route_sitemap() {
        let (_dir, config) = config_with_content("[site]\nurl = \"https://example.com\"");
        let reply = route(&Method::Get, "/sitemap.xml?utm=1", b"", &config);

        assert_eq!(reply.status, 200);
        assert_eq!(reply.content_type, XML);
        assert!(reply.body.contains("<loc>https://example.com/now</loc>"));
    }

    #[test]
    fn test_route_sitemap_bad_content() {
        let (dir, config) = config_with_content("[site]\nurl = \"https://example.com\"");
        let broken = dir.path().join("content/blog/broken.md");
        fs::create_dir_all(broken.parent().unwrap()).unwrap();
        fs::write(&broken, "---\nlang: en\n---\n").unwrap();

        let reply = route(&Method::Get, "/sitemap.xml", b"", &config);
        assert_eq!(reply.status, 500);
        assert!(reply.body.contains("broken.md"));
    }

    #[test]
    fn test_route_robots() {
        let (_dir, config) = config_with_content("[site]\nurl = \"https://example.com\"");
        let reply = route(&Method::Get, "/robots.txt", b"", &config);
        assert_eq!(reply.status, 200);
        assert!(reply.body.contains("User-agent: *\nAllow: /"));
    }

    #[test]
    fn test_route_contact() {
        let (_dir, config) = config_with_content("");
        let reply = route(&Method::Post, CONTACT_PATH, b"{}", &config);
        assert_eq!(reply.status, 400);
        assert_eq!(reply.content_type, JSON);
    }

    #[test]
    fn test_read_body_limit() {
        let body = read_body(&b"{\"name\": \"Ada\"}"[..], 64).unwrap();
        assert_eq!(body.as_deref(), Some(&b"{\"name\": \"Ada\"}"[..]));

        assert_eq!(read_body(&[b'x'; 64][..], 64).unwrap().map(|b| b.len()), Some(64));
        assert!(read_body(&[b'x'; 65][..], 64).unwrap().is_none());

        let huge = std::io::repeat(b'x');
        assert!(read_body(huge, MAX_BODY_BYTES).unwrap().is_none());
    }

    #[test]
    fn test_route_method_and_missing_paths() {
        let (_dir, config) = config_with_content("");
        assert_eq!(route(&Method::Get, CONTACT_PATH, b"", &config).status, 405);
        assert_eq!(route(&Method::Post, "/sitemap.xml", b"", &config).status, 405);
        assert_eq!(route(&Method::Get, "/nope", b"", &config).status, 404);

        let (_dir, config) = config_with_content("[sitemap]\nenable = false");
        assert_eq!(route(&Method::Get, "/sitemap.xml", b"", &config).status, 404);
    }
}
