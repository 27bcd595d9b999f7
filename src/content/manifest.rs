//! Manifest of discovered static pages.

use std::collections::BTreeSet;

/// Keys of every static page found during discovery.
///
/// A page is keyed by its declared slug, or by its file stem when it has no
/// frontmatter. Keys never carry a leading `/`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageManifest {
    keys: BTreeSet<String>,
}

impl PageManifest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl AsRef<str>) {
        self.keys.insert(key.as_ref().trim_matches('/').to_string());
    }

    /// Whether a page is served at `path` (leading/trailing `/` ignored).
    pub fn contains(&self, path: &str) -> bool {
        self.keys.contains(path.trim_matches('/'))
    }

}

#[cfg(test)]
impl PageManifest {
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for PageManifest {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut manifest = Self::new();
        for key in iter {
            manifest.insert(key);
        }
        manifest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_ignores_slashes() {
        let manifest: PageManifest = ["uses", "/now"].into_iter().collect();
        assert!(manifest.contains("/uses"));
        assert!(manifest.contains("now"));
        assert!(manifest.contains("/now/"));
        assert!(!manifest.contains("/colophon"));
        assert_eq!(manifest.len(), 2);
    }
}
