//! Conversion of collected pages into sitemap routes.

use super::SitemapOptions;
use super::collect::CollectedPage;
use super::error::SitemapError;
use super::report::{PageRef, SitemapReport};
use super::url::build_localized_url;
use crate::content::{ChangeFreq, Locale, Page};
use crate::utils::date::same_local_day;
use chrono::{DateTime, Utc};

/// One `<url>` record.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteEntry {
    /// Root-relative URL, not yet joined with the base URL.
    pub url: String,
    pub lang: Locale,
    pub lastmod: DateTime<Utc>,
    pub changefreq: ChangeFreq,
    pub priority: f32,
    /// Sibling URLs in declaration order, never including `lang`.
    pub alternates: Vec<(Locale, String)>,
}

/// Whether `page` was modified on the same local calendar day as `now`.
pub fn is_dirty(page: &Page, now: &DateTime<Utc>) -> bool {
    same_local_day(&page.lastmod, now)
}

/// Map pages to routes in input order.
///
/// Dirty pages get `lastmod = now`; each routed page lands in exactly one
/// of `report.dirty` / `report.clean`.
pub fn to_routes(
    pages: &[CollectedPage<'_>],
    options: &SitemapOptions,
    now: DateTime<Utc>,
    report: &mut SitemapReport,
) -> Result<Vec<RouteEntry>, SitemapError> {
    let default_locale = &options.default_locale;

    pages
        .iter()
        .map(|CollectedPage { page, origin }| {
            let localize = |lang: &Locale| {
                build_localized_url(page, lang, default_locale).ok_or_else(|| {
                    SitemapError::MissingTranslation {
                        page: origin.clone(),
                        lang: lang.clone(),
                    }
                })
            };

            let alternates = page
                .slug_translations
                .without(&page.lang)
                .iter()
                .map(|(lang, _)| Ok((lang.clone(), localize(lang)?)))
                .collect::<Result<Vec<_>, SitemapError>>()?;

            let url = localize(&page.lang)?;

            let visited = PageRef::new(page.lang.clone(), url.clone());
            let lastmod = if is_dirty(page, &now) {
                report.dirty.push(visited);
                now
            } else {
                report.clean.push(visited);
                page.lastmod
            };

            Ok(RouteEntry {
                url,
                lang: page.lang.clone(),
                lastmod,
                changefreq: page.resolved_changefreq(),
                priority: page.resolved_priority(),
                alternates,
            })
        })
        .collect()
}
