//! Sitemap generation.
//!
//! ```text
//! ContentSet ─► collect_pages ─► validate ─► to_routes ─► render_xml
//!                    │                           │
//!                    └──── SitemapReport ◄───────┘
//! ```
//!
//! Generation is a pure function of the loaded content, the site options and
//! the current instant. The classification lists come back in the
//! [`SitemapReport`] instead of living in shared state.

mod collect;
mod error;
mod render;
mod report;
mod route;
mod url;

use collect::{collect_pages, validate};
use error::SitemapError;
use render::render_xml;
use report::SitemapReport;
use route::to_routes;

use super::{MISSING_BASE_URL, minify_xml, report_missing_base_url};
use crate::config::SiteConfig;
use crate::content::{ContentSet, Locale};
use crate::core::Reply;
use crate::{debug_do, log};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::fs;

/// Site-level inputs to sitemap generation.
#[derive(Debug, Clone, PartialEq)]
pub struct SitemapOptions {
    /// Absolute base URL; `None` renders root-relative locations.
    pub base_url: Option<String>,
    pub default_locale: Locale,
    pub locales: Vec<Locale>,
}

impl SitemapOptions {
    pub fn new<I, L>(base_url: Option<&str>, default_locale: &str, locales: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<Locale>,
    {
        Self {
            base_url: base_url.map(str::to_string),
            default_locale: Locale::from(default_locale),
            locales: locales.into_iter().map(Into::into).collect(),
        }
    }

    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(
            config.base_url(),
            &config.site.default_locale,
            config.site.locales.iter().map(String::as_str),
        )
    }

    /// Whether `lang` is a configured locale.
    pub fn is_known(&self, lang: &Locale) -> bool {
        self.locales.contains(lang)
    }
}

/// Run the whole pipeline and return the document with its report.
pub fn generate(
    content: &ContentSet,
    options: &SitemapOptions,
    now: DateTime<Utc>,
) -> Result<(String, SitemapReport), SitemapError> {
    let mut report = SitemapReport::default();

    let pages = collect_pages(content, options, &mut report);
    validate(&pages, options)?;
    let routes = to_routes(&pages, options, now, &mut report)?;
    let xml = render_xml(options.base_url.as_deref(), &routes);

    Ok((xml, report))
}

/// Serve `sitemap.xml`.
///
/// - production without a base URL: 500 `BASE_URL is not defined`
/// - malformed page data: 500 with the error text
/// - otherwise: 200 `application/xml`
pub fn respond(config: &SiteConfig, content: &ContentSet, now: DateTime<Utc>) -> Reply {
    let options = SitemapOptions::from_config(config);

    if options.base_url.is_none() && config.mode.is_production() {
        report_missing_base_url("sitemap", &config.sitemap.path);
        return Reply::text(500, MISSING_BASE_URL);
    }

    match generate(content, &options, now) {
        Ok((xml, report)) => {
            debug_do! { report.print(&options.default_locale); }
            let xml = minify_xml(xml.as_bytes(), config.build.minify);
            Reply::xml(String::from_utf8_lossy(&xml))
        }
        Err(err) => {
            log!("error"; "sitemap: {err}");
            Reply::text(500, err.to_string())
        }
    }
}

/// Build sitemap if enabled.
///
/// A missing base URL or bad page data is logged and skipped; only I/O
/// failures abort the build.
pub fn build_sitemap(config: &SiteConfig, content: &ContentSet, now: DateTime<Utc>) -> Result<()> {
    if !config.sitemap.enable {
        return Ok(());
    }

    let reply = respond(config, content, now);
    if !reply.is_success() {
        log!("sitemap"; "skipped updating {}", config.sitemap.path.display());
        return Ok(());
    }

    let path = config.output_dir().join(&config.sitemap.path);
    fs::write(&path, reply.body)
        .with_context(|| format!("Failed to write sitemap to {}", path.display()))?;

    log!("sitemap"; "{}", config.sitemap.path.display());
    Ok(())
}
