//! robots.txt generation.
//!
//! ```text
//! User-agent: AhrefsBot
//! Disallow: /
//!
//! User-agent: curl
//! Disallow: /
//!
//! User-agent: *
//! Allow: /
//!
//! Sitemap: https://example.com/sitemap.xml
//! ```

use super::{MISSING_BASE_URL, report_missing_base_url};
use crate::config::SiteConfig;
use crate::core::Reply;
use crate::log;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use url::Url;

/// Render robots.txt for the given disallowed agents and sitemap location.
pub fn render_robots<S: AsRef<str>>(disallow: &[S], sitemap_url: &str) -> String {
    let excluded = disallow
        .iter()
        .map(|agent| format!("User-agent: {}\nDisallow: /\n", agent.as_ref().trim()))
        .collect::<Vec<_>>()
        .join("\n");

    format!("{excluded}\nUser-agent: *\nAllow: /\n\nSitemap: {sitemap_url}\n")
}

/// Resolve the sitemap location against the base URL.
///
/// Follows URL reference resolution, so a base with a path component
/// (`https://example.com/blog`) resolves to `https://example.com/sitemap.xml`.
/// Without a base the location is root-relative.
pub fn sitemap_url(base_url: Option<&str>, sitemap_path: &Path) -> Result<String> {
    let path = sitemap_path.to_string_lossy().replace('\\', "/");
    match base_url {
        Some(base) => {
            let base = Url::parse(base).with_context(|| format!("Invalid base URL `{base}`"))?;
            let url = base
                .join(&path)
                .with_context(|| format!("Cannot resolve `{path}` against `{base}`"))?;
            Ok(url.to_string())
        }
        None => Ok(format!("/{}", path.trim_start_matches('/'))),
    }
}

/// Serve `robots.txt`, with the same base URL rule as the sitemap.
pub fn respond(config: &SiteConfig) -> Reply {
    let base_url = config.base_url();

    if base_url.is_none() && config.mode.is_production() {
        report_missing_base_url("robots", &config.robots.path);
        return Reply::text(500, MISSING_BASE_URL);
    }

    match sitemap_url(base_url, &config.sitemap.path) {
        Ok(url) => Reply::text(200, render_robots(&config.robots.disallow, &url)),
        Err(err) => {
            log!("error"; "robots: {err:#}");
            Reply::text(500, format!("{err:#}"))
        }
    }
}

/// Build robots.txt if enabled. A missing base URL is logged and skipped.
pub fn build_robots(config: &SiteConfig) -> Result<()> {
    if !config.robots.enable {
        return Ok(());
    }

    let reply = respond(config);
    if !reply.is_success() {
        log!("robots"; "skipped updating {}", config.robots.path.display());
        return Ok(());
    }

    let path = config.output_dir().join(&config.robots.path);
    fs::write(&path, reply.body)
        .with_context(|| format!("Failed to write robots.txt to {}", path.display()))?;

    log!("robots"; "{}", config.robots.path.display());
    Ok(())
}
