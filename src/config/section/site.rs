//! `[site]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [site]
//! url = "https://www.example.dev"
//! default_locale = "en"
//! locales = ["en", "fr"]
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// Site identity and locale settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    /// Absolute base URL including scheme (e.g., "https://example.com").
    pub url: Option<String>,

    /// Locale whose pages live at the root (no `/{lang}/` prefix).
    pub default_locale: String,

    /// Every locale content may declare.
    pub locales: Vec<String>,
}

impl Default for SiteSectionConfig {
    fn default() -> Self {
        Self {
            url: None,
            default_locale: "en".into(),
            locales: vec!["en".into()],
        }
    }
}

impl SiteSectionConfig {
    pub const URL: FieldPath = FieldPath::new("site.url");
    pub const DEFAULT_LOCALE: FieldPath = FieldPath::new("site.default_locale");
    pub const LOCALES: FieldPath = FieldPath::new("site.locales");

    /// Base URL with surrounding whitespace removed; blank counts as unset.
    pub fn base_url(&self) -> Option<&str> {
        self.url.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    /// Validate site configuration.
    ///
    /// # Checks
    /// - `url`, when set, parses as an http(s) URL with a host
    /// - `default_locale` is listed in `locales`
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(url_str) = self.base_url() {
            match url::Url::parse(url_str) {
                Ok(parsed) => {
                    if !matches!(parsed.scheme(), "http" | "https") {
                        diag.error_with_hint(
                            Self::URL,
                            format!(
                                "scheme '{}' not supported, must be http or https",
                                parsed.scheme()
                            ),
                            "use format like https://example.com",
                        );
                    }
                    if parsed.host_str().is_none() {
                        diag.error_with_hint(
                            Self::URL,
                            "URL must have a valid host",
                            "use format like https://example.com",
                        );
                    }
                }
                Err(e) => {
                    diag.error_with_hint(
                        Self::URL,
                        format!("invalid URL: {}", e),
                        "use format like https://example.com",
                    );
                }
            }
        }

        if self.locales.is_empty() {
            diag.error(Self::LOCALES, "at least one locale is required");
        } else if !self.locales.contains(&self.default_locale) {
            diag.error_with_hint(
                Self::DEFAULT_LOCALE,
                format!("'{}' is not listed in {}", self.default_locale, Self::LOCALES),
                format!("add \"{}\" to {}", self.default_locale, Self::LOCALES),
            );
        }
    }
}
