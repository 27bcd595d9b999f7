//! `[[slashes]]` configuration: the slash-page registry.
//!
//! # Example
//!
//! ```toml
//! [[slashes]]
//! path = "/now"
//! description = "a summary of what I am working on"
//! sitemap = { changefreq = "monthly", priority = 0.7 }
//!
//! [[slashes]]
//! path = "/blank"
//! description = "this page was intentionally left blank"
//! sitemap = { exclude = true, changefreq = "never", priority = 0.1 }
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::content::ChangeFreq;
use serde::{Deserialize, Serialize};

/// One declared slash page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlashPageConfig {
    /// Root-level path, e.g. `/now`.
    pub path: String,
    pub description: String,
    /// Render the description without wrapping.
    #[serde(default)]
    pub nowrap: bool,
    #[serde(default)]
    pub sitemap: SlashSitemapRules,
}

/// Sitemap hints carried alongside a slash page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlashSitemapRules {
    pub exclude: bool,
    pub changefreq: Option<ChangeFreq>,
    pub priority: Option<f32>,
}

pub const SLASHES: FieldPath = FieldPath::new("slashes");

/// Validate the registry as a whole.
///
/// # Checks
/// - every path starts with `/` and has a name after it
/// - no path is declared twice
/// - priorities lie within `0.0..=1.0`
pub fn validate_slashes(slashes: &[SlashPageConfig], diag: &mut ConfigDiagnostics) {
    let mut seen = std::collections::HashSet::new();

    for slash in slashes {
        if !slash.path.starts_with('/') || slash.path.len() < 2 {
            diag.error_with_hint(
                SLASHES,
                format!("invalid slash page path '{}'", slash.path),
                "use a root-level path like \"/now\"",
            );
        }
        if !seen.insert(slash.path.as_str()) {
            diag.error(SLASHES, format!("slash page '{}' declared twice", slash.path));
        }
        if let Some(priority) = slash.sitemap.priority
            && !(0.0..=1.0).contains(&priority)
        {
            diag.error(
                SLASHES,
                format!("priority {} of '{}' must be within 0.0..=1.0", priority, slash.path),
            );
        }
    }
}
