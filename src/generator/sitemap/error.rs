//! Sitemap generation errors.

use super::report::PageRef;
use crate::content::{Locale, PageType};
use thiserror::Error;

/// Malformed page data found while building the sitemap.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SitemapError {
    #[error("page {page} has no slug for locale `{lang}`")]
    MissingTranslation { page: PageRef, lang: Locale },

    #[error("page {page} uses locale `{lang}`, which is not in site.locales")]
    UnknownLocale { page: PageRef, lang: Locale },

    #[error("{kind} page {page} has an empty slug")]
    EmptySlug { page: PageRef, kind: PageType },

    #[error("page {page} has priority {priority}, expected 0.0 to 1.0")]
    InvalidPriority { page: PageRef, priority: f32 },

    #[error("page {page} is declared more than once as {kind}")]
    DuplicatePage { page: PageRef, kind: PageType },
}
