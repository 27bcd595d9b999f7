//! Classification report for one sitemap run.

use crate::content::Locale;
use crate::debug;
use crate::utils::plural::plural_count;
use std::fmt;

/// A page as shown in diagnostics: `(lang) /path`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRef {
    pub lang: Locale,
    pub path: String,
}

impl PageRef {
    pub fn new(lang: Locale, path: impl Into<String>) -> Self {
        Self {
            lang,
            path: path.into(),
        }
    }
}

impl fmt::Display for PageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}) /{}", self.lang, self.path.trim_start_matches('/'))
    }
}

/// Which pages were included, excluded, and refreshed.
///
/// `dirty` + `clean` always partition the routed pages.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SitemapReport {
    pub indexable: Vec<PageRef>,
    pub excluded: Vec<PageRef>,
    pub dirty: Vec<PageRef>,
    pub clean: Vec<PageRef>,
}

impl SitemapReport {
    pub fn discovered(&self) -> usize {
        self.indexable.len() + self.excluded.len()
    }

    /// Print the classification through `debug!` (verbose runs only).
    pub fn print(&self, default_locale: &Locale) {
        debug!("sitemap"; "default locale: {}", default_locale);
        debug!(
            "sitemap";
            "{} discovered: {} excluded, {} indexed ({} dirty, {} clean)",
            plural_count(self.discovered(), "page"),
            self.excluded.len(),
            self.indexable.len(),
            self.dirty.len(),
            self.clean.len()
        );

        for (label, pages) in [
            ("excluded", &self.excluded),
            ("included", &self.indexable),
            ("dirty", &self.dirty),
            ("clean", &self.clean),
        ] {
            for page in pages {
                debug!("sitemap"; "{:<8} {}", label, page);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ref_display() {
        let page = PageRef::new(Locale::from("fr"), "blog/fr/premier-article");
        assert_eq!(page.to_string(), "(fr) /blog/fr/premier-article");

        let page = PageRef::new(Locale::from("fr"), "/fr/barres-obliques/");
        assert_eq!(page.to_string(), "(fr) /fr/barres-obliques/");
    }

    #[test]
    fn test_discovered_count() {
        let en = Locale::from("en");
        let report = SitemapReport {
            indexable: vec![PageRef::new(en.clone(), "a"), PageRef::new(en.clone(), "b")],
            excluded: vec![PageRef::new(en, "c")],
            ..Default::default()
        };
        assert_eq!(report.discovered(), 3);
    }
}
