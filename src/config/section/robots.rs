//! `[robots]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [robots]
//! enable = true
//! disallow = ["AhrefsBot", "SemrushBot"]
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Crawlers refused by default.
const DEFAULT_DISALLOWED_AGENTS: &[&str] = &[
    "AhrefsBot",
    "SemrushBot",
    "MJ12bot",
    "DotBot",
    "Baiduspider",
    "YandexBot",
    "Scrapy",
    "Python-urllib",
    "wget",
    "curl",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RobotsConfig {
    /// Enable robots.txt generation.
    pub enable: bool,
    /// Output path for robots file (relative to the output directory).
    pub path: PathBuf,
    /// User agents that are disallowed from the whole site.
    pub disallow: Vec<String>,
}

impl Default for RobotsConfig {
    fn default() -> Self {
        Self {
            enable: true,
            path: "robots.txt".into(),
            disallow: DEFAULT_DISALLOWED_AGENTS
                .iter()
                .map(|agent| (*agent).to_string())
                .collect(),
        }
    }
}

impl RobotsConfig {
    pub const DISALLOW: FieldPath = FieldPath::new("robots.disallow");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.disallow.iter().any(|agent| agent.trim().is_empty()) {
            diag.error(Self::DISALLOW, "user agent names must not be blank");
        }
        if self.disallow.iter().any(|agent| agent.trim() == "*") {
            diag.warn(
                Self::DISALLOW,
                "\"*\" disallows every crawler; the generated `Allow: /` block will be ignored",
            );
        }
    }
}
