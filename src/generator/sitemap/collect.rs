//! Page collection and validation.

use super::SitemapOptions;
use super::error::SitemapError;
use super::report::{PageRef, SitemapReport};
use crate::content::{Collection, ContentSet, Page, PageType};
use std::collections::HashSet;

/// An indexable page together with its diagnostic reference.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectedPage<'a> {
    pub page: &'a Page,
    pub origin: PageRef,
}

/// Gather indexable pages: static pages, then blog, then project.
///
/// Excluded pages only appear in `report.excluded`. Source order is kept.
pub fn collect_pages<'a>(
    content: &'a ContentSet,
    options: &SitemapOptions,
    report: &mut SitemapReport,
) -> Vec<CollectedPage<'a>> {
    let statics = content
        .pages
        .iter()
        .map(|entry| (&entry.page, entry.page.slug.clone()));

    let collections = Collection::ALL.into_iter().flat_map(|collection| {
        content.collection(collection).iter().map(move |entry| {
            let page = &entry.page;
            let path = if page.lang == options.default_locale {
                format!("{}/{}", collection.name(), page.slug)
            } else {
                format!("{}/{}/{}", collection.name(), page.lang, page.slug)
            };
            (page, path)
        })
    });

    let mut pages = Vec::with_capacity(content.len());
    for (page, path) in statics.chain(collections) {
        let origin = PageRef::new(page.lang.clone(), path);
        if page.exclude_from_index {
            report.excluded.push(origin);
        } else {
            report.indexable.push(origin.clone());
            pages.push(CollectedPage { page, origin });
        }
    }
    pages
}

/// Check every page before routing; the first problem wins.
pub fn validate(pages: &[CollectedPage<'_>], options: &SitemapOptions) -> Result<(), SitemapError> {
    let mut seen = HashSet::new();

    for CollectedPage { page, origin } in pages {
        let err_page = || origin.clone();
        // Only the SITE index may keep an empty segment in every locale.
        let is_index = page.kind == PageType::Site && page.slug.trim().is_empty();

        if !options.is_known(&page.lang) {
            return Err(SitemapError::UnknownLocale {
                page: err_page(),
                lang: page.lang.clone(),
            });
        }

        if page.slug.trim().is_empty() && page.kind != PageType::Site {
            return Err(SitemapError::EmptySlug {
                page: err_page(),
                kind: page.kind,
            });
        }

        if let Some(priority) = page.priority
            && !(0.0..=1.0).contains(&priority)
        {
            return Err(SitemapError::InvalidPriority {
                page: err_page(),
                priority,
            });
        }

        for (lang, slug) in page.slug_translations.without(&page.lang).iter() {
            if !options.is_known(lang) {
                return Err(SitemapError::UnknownLocale {
                    page: err_page(),
                    lang: lang.clone(),
                });
            }
            if slug.trim().is_empty() && !is_index {
                return Err(SitemapError::MissingTranslation {
                    page: err_page(),
                    lang: lang.clone(),
                });
            }
        }

        if !seen.insert((&page.lang, page.slug.as_str(), page.kind)) {
            return Err(SitemapError::DuplicatePage {
                page: err_page(),
                kind: page.kind,
            });
        }
    }

    Ok(())
}
