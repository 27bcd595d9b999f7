//! Typed content schema shared by static pages and collections.

use chrono::{DateTime, Utc};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// ============================================================================
// Locale
// ============================================================================

/// Locale code such as `en` or `fr`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locale(String);

impl Locale {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Locale {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

// ============================================================================
// ChangeFreq
// ============================================================================

/// Sitemap `<changefreq>` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFreq {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFreq {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Never => "never",
        }
    }
}

impl fmt::Display for ChangeFreq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// PageType
// ============================================================================

/// Kind of page; drives the URL prefix and default sitemap weighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PageType {
    #[serde(rename = "SITE", alias = "site")]
    Site,
    #[serde(rename = "BLOG", alias = "blog")]
    Blog,
    #[serde(rename = "PROJECT", alias = "project")]
    Project,
}

/// Default `<changefreq>` and `<priority>` for a page type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SitemapDefaults {
    pub changefreq: ChangeFreq,
    pub priority: f32,
}

impl PageType {
    /// URL segment placed before the slug.
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Site => "",
            Self::Blog => "blog/",
            Self::Project => "project/",
        }
    }

    /// Weighting used when a page declares no override.
    pub const fn sitemap_defaults(self) -> SitemapDefaults {
        match self {
            Self::Site => SitemapDefaults {
                changefreq: ChangeFreq::Weekly,
                priority: 0.7,
            },
            Self::Blog => SitemapDefaults {
                changefreq: ChangeFreq::Daily,
                priority: 0.8,
            },
            Self::Project => SitemapDefaults {
                changefreq: ChangeFreq::Monthly,
                priority: 0.6,
            },
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Site => "SITE",
            Self::Blog => "BLOG",
            Self::Project => "PROJECT",
        }
    }
}

impl fmt::Display for PageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SlugTranslations
// ============================================================================

/// Locale → slug mapping, kept in declaration order.
///
/// Order matters: sitemap alternates are emitted in the order the content
/// lists its translations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlugTranslations(Vec<(Locale, String)>);

impl SlugTranslations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the slug for `lang`, keeping its position.
    pub fn insert(&mut self, lang: Locale, slug: impl Into<String>) {
        let slug = slug.into();
        match self.0.iter_mut().find(|(l, _)| *l == lang) {
            Some(entry) => entry.1 = slug,
            None => self.0.push((lang, slug)),
        }
    }

    pub fn get(&self, lang: &Locale) -> Option<&str> {
        self.0
            .iter()
            .find(|(l, _)| l == lang)
            .map(|(_, slug)| slug.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Locale, &str)> {
        self.0.iter().map(|(l, s)| (l, s.as_str()))
    }

    /// Copy without the entry for `lang`.
    pub fn without(&self, lang: &Locale) -> Self {
        Self(self.0.iter().filter(|(l, _)| l != lang).cloned().collect())
    }

}

#[cfg(test)]
impl SlugTranslations {
    pub fn contains(&self, lang: &Locale) -> bool {
        self.get(lang).is_some()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<L: Into<Locale>, S: Into<String>> FromIterator<(L, S)> for SlugTranslations {
    fn from_iter<I: IntoIterator<Item = (L, S)>>(iter: I) -> Self {
        let mut translations = Self::new();
        for (lang, slug) in iter {
            translations.insert(lang.into(), slug);
        }
        translations
    }
}

impl Serialize for SlugTranslations {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (lang, slug) in &self.0 {
            map.serialize_entry(lang, slug)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for SlugTranslations {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TranslationsVisitor;

        impl<'de> Visitor<'de> for TranslationsVisitor {
            type Value = SlugTranslations;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of locale to slug")
            }

            fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
                Ok(SlugTranslations::new())
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut translations = SlugTranslations::new();
                while let Some((lang, slug)) = access.next_entry::<Locale, String>()? {
                    translations.insert(lang, slug);
                }
                Ok(translations)
            }
        }

        deserializer.deserialize_any(TranslationsVisitor)
    }
}

// ============================================================================
// Page
// ============================================================================

/// One discoverable document.
///
/// `slug` + `lang` + `kind` identify a page uniquely.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub lang: Locale,
    /// Path segment in the page's own locale.
    pub slug: String,
    pub exclude_from_index: bool,
    pub lastmod: DateTime<Utc>,
    pub kind: PageType,
    pub changefreq: Option<ChangeFreq>,
    pub priority: Option<f32>,
    pub slug_translations: SlugTranslations,
}

impl Page {
    /// Effective change frequency: page override or type default.
    pub fn resolved_changefreq(&self) -> ChangeFreq {
        self.changefreq
            .unwrap_or(self.kind.sitemap_defaults().changefreq)
    }

    /// Effective priority: page override or type default.
    pub fn resolved_priority(&self) -> f32 {
        self.priority.unwrap_or(self.kind.sitemap_defaults().priority)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_type_tags() {
        let kind: PageType = serde_json::from_str("\"BLOG\"").unwrap();
        assert_eq!(kind, PageType::Blog);
        let kind: PageType = serde_json::from_str("\"project\"").unwrap();
        assert_eq!(kind, PageType::Project);
        assert!(serde_json::from_str::<PageType>("\"NEWS\"").is_err());
    }

    #[test]
    fn test_page_type_defaults() {
        let site = PageType::Site.sitemap_defaults();
        assert_eq!((site.changefreq, site.priority), (ChangeFreq::Weekly, 0.7));
        let blog = PageType::Blog.sitemap_defaults();
        assert_eq!((blog.changefreq, blog.priority), (ChangeFreq::Daily, 0.8));
        let project = PageType::Project.sitemap_defaults();
        assert_eq!((project.changefreq, project.priority), (ChangeFreq::Monthly, 0.6));
    }

    #[test]
    fn test_prefixes() {
        assert_eq!(PageType::Site.prefix(), "");
        assert_eq!(PageType::Blog.prefix(), "blog/");
        assert_eq!(PageType::Project.prefix(), "project/");
    }

    #[test]
    fn test_changefreq_serde() {
        let freq: ChangeFreq = serde_json::from_str("\"yearly\"").unwrap();
        assert_eq!(freq, ChangeFreq::Yearly);
        assert_eq!(freq.to_string(), "yearly");
    }

    #[test]
    fn test_translations_keep_declaration_order() {
        let json = r#"{"fr": "premier-article", "de": "erster-artikel", "en": "first-post"}"#;
        let translations: SlugTranslations = serde_json::from_str(json).unwrap();

        let langs: Vec<_> = translations.iter().map(|(l, _)| l.as_str()).collect();
        assert_eq!(langs, vec!["fr", "de", "en"]);

        let without_en = translations.without(&Locale::from("en"));
        assert_eq!(without_en.len(), 2);
        assert!(!without_en.contains(&Locale::from("en")));
        assert_eq!(without_en.get(&Locale::from("fr")), Some("premier-article"));
    }

    #[test]
    fn test_translations_null_is_empty() {
        let translations: SlugTranslations = serde_json::from_str("null").unwrap();
        assert!(translations.is_empty());
    }

    #[test]
    fn test_translations_insert_replaces() {
        let mut translations: SlugTranslations = [("fr", "a"), ("de", "b")].into_iter().collect();
        translations.insert(Locale::from("fr"), "c");
        let entries: Vec<_> = translations.iter().collect();
        assert_eq!(
            entries,
            vec![(&Locale::from("fr"), "c"), (&Locale::from("de"), "b")]
        );
    }
}
