//! Frontmatter extraction for Markdown/MDX sources.
//!
//! Two fence styles are recognized:
//!
//! ```text
//! ---            +++
//! lang: en       lang = "en"
//! slug: about    slug = "about"
//! ---            +++
//! ```
//!
//! Only the metadata is read; the document body is never rendered.

use super::page::{ChangeFreq, Locale, Page, PageType, SlugTranslations};
use crate::utils::date::parse_lastmod;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

/// Fence style of a detected frontmatter block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontmatterFormat {
    Yaml,
    Toml,
}

/// Split `content` into `(frontmatter, body, format)`.
///
/// Returns `None` when the document has no frontmatter fence.
pub fn detect(content: &str) -> Option<(&str, &str, FrontmatterFormat)> {
    let trimmed = content.trim_start_matches('\u{feff}').trim_start();

    let (fence, format) = if trimmed.starts_with("---") {
        ("\n---", FrontmatterFormat::Yaml)
    } else if trimmed.starts_with("+++") {
        ("\n+++", FrontmatterFormat::Toml)
    } else {
        return None;
    };

    let end = trimmed[3..].find(fence)?;
    let fm = trimmed[3..3 + end].trim();
    let body = trimmed[3 + end + fence.len()..].trim_start_matches(['\r', '\n']);
    Some((fm, body, format))
}

/// Raw page metadata as written by authors (camelCase keys).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageFrontmatter {
    pub lang: Locale,
    pub slug: String,
    #[serde(default)]
    pub exclude_from_index: bool,
    #[serde(deserialize_with = "deserialize_lastmod")]
    pub lastmod: String,
    #[serde(rename = "type", default)]
    pub kind: Option<PageType>,
    #[serde(default)]
    pub slug_translations: SlugTranslations,
    #[serde(default)]
    pub changefreq: Option<ChangeFreq>,
    #[serde(default)]
    pub priority: Option<f32>,
}

/// Accept a quoted string (YAML, TOML) or a bare TOML date/datetime.
fn deserialize_lastmod<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match toml::Value::deserialize(deserializer)? {
        toml::Value::String(s) => Ok(s),
        toml::Value::Datetime(dt) => Ok(dt.to_string()),
        other => Err(D::Error::custom(format!(
            "expected a date for `lastmod`, found {}",
            other.type_str()
        ))),
    }
}

/// Why a frontmatter block could not become a [`Page`].
#[derive(Debug, Clone, PartialEq)]
pub enum FrontmatterError {
    Parse(String),
    InvalidLastmod(String),
}

impl PageFrontmatter {
    /// Parse a frontmatter block in the given format.
    pub fn parse(raw: &str, format: FrontmatterFormat) -> Result<Self, FrontmatterError> {
        match format {
            FrontmatterFormat::Yaml => {
                serde_yaml::from_str(raw).map_err(|e| FrontmatterError::Parse(e.to_string()))
            }
            FrontmatterFormat::Toml => {
                toml::from_str(raw).map_err(|e| FrontmatterError::Parse(e.message().to_string()))
            }
        }
    }

    /// Resolve into a [`Page`], using `fallback` when no `type` is declared.
    pub fn into_page(self, fallback: PageType) -> Result<Page, FrontmatterError> {
        let lastmod =
            parse_lastmod(&self.lastmod).ok_or(FrontmatterError::InvalidLastmod(self.lastmod))?;

        Ok(Page {
            lang: self.lang,
            slug: self.slug,
            exclude_from_index: self.exclude_from_index,
            lastmod,
            kind: self.kind.unwrap_or(fallback),
            changefreq: self.changefreq,
            priority: self.priority,
            slug_translations: self.slug_translations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_detect_yaml() {
        let content = "---\nlang: en\nslug: about\n---\n\n# About\n";
        let (fm, body, format) = detect(content).unwrap();
        assert_eq!(format, FrontmatterFormat::Yaml);
        assert_eq!(fm, "lang: en\nslug: about");
        assert_eq!(body, "# About\n");
    }

    #[test]
    fn test_detect_toml() {
        let content = "+++\nlang = \"en\"\n+++\nBody";
        let (fm, body, format) = detect(content).unwrap();
        assert_eq!(format, FrontmatterFormat::Toml);
        assert_eq!(fm, "lang = \"en\"");
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_detect_none() {
        assert!(detect("# Just markdown").is_none());
        assert!(detect("---\nunterminated: true\n").is_none());
    }

    #[test]
    fn test_parse_yaml_page() {
        let raw = r#"
lang: fr
title: Premier article
slug: premier-article
lastmod: 2024-03-01
type: BLOG
excludeFromIndex: false
slugTranslations:
  en: first-post
  de: erster-artikel
priority: 0.9
"#;
        let fm = PageFrontmatter::parse(raw, FrontmatterFormat::Yaml).unwrap();
        let page = fm.into_page(PageType::Site).unwrap();
        assert_eq!(page.lang, Locale::from("fr"));
        assert_eq!(page.kind, PageType::Blog);
        assert_eq!(page.priority, Some(0.9));
        assert_eq!(page.lastmod.year(), 2024);
        let langs: Vec<_> = page.slug_translations.iter().map(|(l, _)| l.as_str()).collect();
        assert_eq!(langs, vec!["en", "de"]);
    }

    #[test]
    fn test_parse_toml_bare_datetime() {
        let raw = r#"
lang = "en"
slug = "uses"
lastmod = 2024-06-15T14:30:45Z
changefreq = "yearly"
"#;
        let fm = PageFrontmatter::parse(raw, FrontmatterFormat::Toml).unwrap();
        let page = fm.into_page(PageType::Site).unwrap();
        assert_eq!(page.kind, PageType::Site);
        assert_eq!(page.changefreq, Some(ChangeFreq::Yearly));
        assert_eq!(page.lastmod.hour(), 14);
    }

    #[test]
    fn test_missing_type_uses_fallback() {
        let raw = "lang: en\nslug: rust-notes\nlastmod: \"2024-01-01\"";
        let fm = PageFrontmatter::parse(raw, FrontmatterFormat::Yaml).unwrap();
        assert_eq!(fm.into_page(PageType::Project).unwrap().kind, PageType::Project);
    }

    #[test]
    fn test_invalid_lastmod() {
        let raw = "lang: en\nslug: x\nlastmod: yesterday";
        let fm = PageFrontmatter::parse(raw, FrontmatterFormat::Yaml).unwrap();
        assert_eq!(
            fm.into_page(PageType::Site),
            Err(FrontmatterError::InvalidLastmod("yesterday".into()))
        );
    }

    #[test]
    fn test_unknown_type_rejected() {
        let raw = "lang: en\nslug: x\nlastmod: 2024-01-01\ntype: NEWS";
        assert!(matches!(
            PageFrontmatter::parse(raw, FrontmatterFormat::Yaml),
            Err(FrontmatterError::Parse(_))
        ));
    }
}
