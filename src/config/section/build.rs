//! `[build]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [build]
//! content = "content"   # pages/, blog/ and project/ live here
//! output = "dist"       # sitemap.xml, robots.txt, slashes.json
//! minify = false        # collapse generated XML onto one line
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSectionConfig {
    /// Content directory (relative to project root).
    pub content: PathBuf,
    /// Output directory (relative to project root).
    pub output: PathBuf,
    /// Minify generated XML.
    pub minify: bool,
}

impl Default for BuildSectionConfig {
    fn default() -> Self {
        Self {
            content: "content".into(),
            output: "dist".into(),
            minify: false,
        }
    }
}
