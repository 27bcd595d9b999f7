//! Slash-page registry.
//!
//! Slash pages are root-level vanity URLs (`/now`, `/uses`, `/colophon`)
//! declared under `[[slashes]]`. An entry is visible only when content
//! discovery found a static page for its path.

use crate::config::{SiteConfig, SlashPageConfig, SlashSitemapRules};
use crate::content::PageManifest;
use crate::log;
use crate::utils::plural::plural_count;
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;

/// File written next to the sitemap by `build`.
pub const SLASHES_FILE: &str = "slashes.json";

/// A registry entry with its computed visibility.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlashPage<'a> {
    pub link: &'a str,
    pub description: &'a str,
    pub is_visible: bool,
    pub nowrap: bool,
    pub sitemap_rules: &'a SlashSitemapRules,
}

/// Resolve visibility for every declared slash page, in declaration order.
pub fn resolve<'a>(slashes: &'a [SlashPageConfig], manifest: &PageManifest) -> Vec<SlashPage<'a>> {
    slashes
        .iter()
        .map(|slash| SlashPage {
            link: &slash.path,
            description: &slash.description,
            is_visible: manifest.contains(&slash.path),
            nowrap: slash.nowrap,
            sitemap_rules: &slash.sitemap,
        })
        .collect()
}

/// Pretty JSON array of resolved slash pages.
pub fn to_json(pages: &[SlashPage<'_>]) -> Result<String> {
    serde_json::to_string_pretty(pages).context("Failed to serialize slash pages")
}

/// Write `slashes.json` when the registry is non-empty.
pub fn build_slashes(config: &SiteConfig, manifest: &PageManifest) -> Result<()> {
    if config.slashes.is_empty() {
        return Ok(());
    }

    let pages = resolve(&config.slashes, manifest);
    let path = config.output_dir().join(SLASHES_FILE);
    fs::write(&path, to_json(&pages)?)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    let visible = pages.iter().filter(|p| p.is_visible).count();
    log!("slashes"; "{} ({} visible)", SLASHES_FILE, plural_count(visible, "page"));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use crate::content::ChangeFreq;
    use tempfile::TempDir;

    const REGISTRY: &str = r#"
[[slashes]]
path = "/now"
description = "what I am working on"
sitemap = { changefreq = "monthly", priority = 0.7 }

[[slashes]]
path = "/blank"
description = "intentionally left blank"
nowrap = true
sitemap = { exclude = true, changefreq = "never", priority = 0.1 }

[[slashes]]
path = "/🍪"
description = "would you like a cookie?"
"#;

    #[test]
    fn test_visibility_follows_manifest() {
        let config = test_parse_config(REGISTRY);
        let manifest: PageManifest = ["now", "🍪", "about"].into_iter().collect();

        let pages = resolve(&config.slashes, &manifest);
        let visible: Vec<_> = pages.iter().map(|p| (p.link, p.is_visible)).collect();
        assert_eq!(visible, vec![("/now", true), ("/blank", false), ("/🍪", true)]);
        assert!(pages[1].nowrap);
        assert_eq!(pages[1].sitemap_rules.changefreq, Some(ChangeFreq::Never));
    }

    #[test]
    fn test_empty_manifest_hides_everything() {
        let config = test_parse_config(REGISTRY);
        let pages = resolve(&config.slashes, &PageManifest::new());
        assert!(pages.iter().all(|p| !p.is_visible));
    }

    #[test]
    fn test_json_shape() {
        let config = test_parse_config(REGISTRY);
        let manifest: PageManifest = ["now"].into_iter().collect();
        let json = to_json(&resolve(&config.slashes, &manifest)).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["link"], "/now");
        assert_eq!(value[0]["isVisible"], true);
        assert_eq!(value[0]["sitemapRules"]["changefreq"], "monthly");
        assert_eq!(value[1]["sitemapRules"]["exclude"], true);
        assert_eq!(value[2]["isVisible"], false);
    }

    #[test]
    fn test_build_slashes() {
        let dir = TempDir::new().unwrap();
        let mut config = test_parse_config(REGISTRY);
        config.build.output = dir.path().to_path_buf();

        build_slashes(&config, &PageManifest::new()).unwrap();
        assert!(dir.path().join(SLASHES_FILE).is_file());

        let empty_dir = TempDir::new().unwrap();
        let mut config = test_parse_config("");
        config.build.output = empty_dir.path().to_path_buf();
        build_slashes(&config, &PageManifest::new()).unwrap();
        assert!(!empty_dir.path().join(SLASHES_FILE).exists());
    }
}
