//! Production build: write crawler-facing files to the output directory.
//!
//! Phases:
//! - **Load** - discover pages and collections under the content root
//! - **Generate** - `sitemap.xml` and `robots.txt` in parallel
//! - **Registry** - `slashes.json` when slash pages are declared

use crate::{
    config::SiteConfig,
    content::ContentSet,
    generator::{robots::build_robots, sitemap::build_sitemap},
    log,
    slashes::build_slashes,
    utils::plural::plural_count,
};
use anyhow::{Context, Result};
use chrono::Utc;
use std::fs;

/// Run every generator once.
///
/// A missing base URL skips the sitemap and robots.txt with an error log;
/// the rest of the build still runs.
pub fn build_all(config: &SiteConfig) -> Result<()> {
    let content = ContentSet::load(config.content_dir()).with_context(|| {
        format!("Failed to load content from {}", config.content_dir().display())
    })?;
    if content.is_empty() {
        log!("build"; "no pages found in {}", config.content_dir().display());
    } else {
        log!("build"; "{} discovered", plural_count(content.len(), "page"));
    }

    fs::create_dir_all(config.output_dir()).with_context(|| {
        format!("Failed to create output directory {}", config.output_dir().display())
    })?;

    let now = Utc::now();
    let (sitemap_result, robots_result) = rayon::join(
        || build_sitemap(config, &content, now),
        || build_robots(config),
    );

    sitemap_result?;
    robots_result?;

    build_slashes(config, &content.manifest)?;

    log!("build"; "done");
    Ok(())
}
