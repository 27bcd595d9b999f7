//! Localized URL construction.

use crate::content::{Locale, Page};

/// Collapse every run of two or more `/` into one.
///
/// A run directly preceded by `:` becomes `//`, so `scheme://` survives.
///
/// ```text
/// https://example.com//blog///post  ->  https://example.com/blog/post
/// //fr//barres-obliques/            ->  /fr/barres-obliques/
/// ```
pub fn sanitize_url(url: &str) -> String {
    let mut out = String::with_capacity(url.len());
    let mut prev: Option<char> = None;
    let mut chars = url.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '/' {
            out.push(c);
            prev = Some(c);
            continue;
        }

        let mut run = 1;
        while chars.next_if_eq(&'/').is_some() {
            run += 1;
        }

        if run >= 2 && prev == Some(':') {
            out.push_str("//");
        } else {
            out.push('/');
        }
        prev = Some('/');
    }

    out
}

/// Path segment of `page` in `lang`.
///
/// The page's own locale uses its slug; other locales use `slug_translations`.
pub fn localized_segment<'a>(page: &'a Page, lang: &Locale) -> Option<&'a str> {
    if *lang == page.lang {
        Some(page.slug.as_str())
    } else {
        page.slug_translations.get(lang)
    }
}

/// URL of `page` in `lang`, relative to the site root.
///
/// - default locale: `{prefix}{segment}` (e.g. `blog/first-post`)
/// - other locales: `/{lang}/{prefix}{segment}/` (e.g. `/fr/blog/premier-article/`)
///
/// Returns `None` when the page has no segment for `lang`.
pub fn build_localized_url(page: &Page, lang: &Locale, default_locale: &Locale) -> Option<String> {
    let segment = localized_segment(page, lang)?;
    let prefix = page.kind.prefix();

    let url = if lang == default_locale {
        format!("{prefix}{segment}")
    } else {
        format!("/{lang}/{prefix}{segment}/")
    };

    Some(sanitize_url(&url))
}

/// Join a root-relative URL onto the base URL (root-relative when no base).
pub fn absolute_url(base_url: Option<&str>, url: &str) -> String {
    sanitize_url(&format!("{}/{}", base_url.unwrap_or_default(), url))
}
