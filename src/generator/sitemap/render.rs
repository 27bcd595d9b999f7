//! Sitemap XML rendering.
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9" xmlns:xhtml="..." ...>
//!   <url>
//!     <loc>https://example.com/slashes</loc>
//!     <lastmod>2023-10-01T14:30:00.000Z</lastmod>
//!     <changefreq>weekly</changefreq>
//!     <priority>0.7</priority>
//!     <xhtml:link rel="alternate" hreflang="fr" href="https://example.com/fr/barres-obliques/"/>
//!   </url>
//! </urlset>
//! ```

use super::route::RouteEntry;
use super::url::absolute_url;
use crate::utils::date::to_iso_millis;
use quick_xml::escape::escape;

/// Namespaces declared on `<urlset>`.
pub const URLSET_NAMESPACES: &[(&str, &str)] = &[
    ("xmlns", "http://www.sitemaps.org/schemas/sitemap/0.9"),
    ("xmlns:news", "http://www.google.com/schemas/sitemap-news/0.9"),
    ("xmlns:xhtml", "http://www.w3.org/1999/xhtml"),
    ("xmlns:image", "http://www.google.com/schemas/sitemap-image/1.1"),
    ("xmlns:video", "http://www.google.com/schemas/sitemap-video/1.1"),
];

/// Render routes as a sitemap document.
///
/// Locations are joined onto `base_url`; with `None` they stay root-relative.
pub fn render_xml(base_url: Option<&str>, routes: &[RouteEntry]) -> String {
    let mut xml = String::with_capacity(256 + routes.len() * 256);

    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<urlset");
    for (name, uri) in URLSET_NAMESPACES {
        xml.push_str(&format!(" {name}=\"{uri}\""));
    }
    xml.push_str(">\n");

    for route in routes {
        let loc = absolute_url(base_url, &route.url);

        xml.push_str("  <url>\n");
        xml.push_str(&format!("    <loc>{}</loc>\n", escape(&loc)));
        xml.push_str(&format!(
            "    <lastmod>{}</lastmod>\n",
            to_iso_millis(&route.lastmod)
        ));
        xml.push_str(&format!("    <changefreq>{}</changefreq>\n", route.changefreq));
        xml.push_str(&format!("    <priority>{}</priority>\n", route.priority));

        for (lang, url) in &route.alternates {
            let href = absolute_url(base_url, url);
            xml.push_str(&format!(
                "    <xhtml:link rel=\"alternate\" hreflang=\"{}\" href=\"{}\"/>\n",
                escape(lang.as_str()),
                escape(&href)
            ));
        }

        xml.push_str("  </url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}
