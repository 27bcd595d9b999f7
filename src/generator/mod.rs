//! Generators for crawler-facing files.
//!
//! - **Sitemap**: search engine indexing (`sitemap.xml`)
//! - **Robots**: crawler policy (`robots.txt`)
//!
//! Both need an absolute base URL in production. Without one they answer
//! 500 and the surrounding build carries on.

pub mod robots;
pub mod sitemap;

use crate::log;
use std::borrow::Cow;
use std::path::Path;

/// Body returned when a production run has no base URL.
pub const MISSING_BASE_URL: &str = "BASE_URL is not defined";

/// Log the missing base URL error with a hint on how to fix it.
fn report_missing_base_url(module: &str, output: &Path) {
    log!("error"; "{}. Skipped updating {} ({}).", MISSING_BASE_URL, output.display(), module);
    log!("hint"; "set [site] url in pagemap.toml, pass --site-url, or export BASE_URL, then rebuild");
}

/// Minify XML content if enabled.
pub fn minify_xml(content: &[u8], enabled: bool) -> Cow<'_, [u8]> {
    if enabled {
        let xml_str = String::from_utf8_lossy(content);
        let minified = xml_str
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<String>();
        Cow::Owned(minified.into_bytes())
    } else {
        Cow::Borrowed(content)
    }
}
