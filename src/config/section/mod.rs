//! Configuration section definitions.
//!
//! Each module corresponds to a section in `pagemap.toml`:
//!
//! | Module     | TOML Section   | Purpose                              |
//! |------------|----------------|--------------------------------------|
//! | `site`     | `[site]`       | Base URL and locales                 |
//! | `build`    | `[build]`      | Content/output paths, minify         |
//! | `serve`    | `[serve]`      | Development server                   |
//! | `sitemap`  | `[sitemap]`    | Sitemap output                       |
//! | `robots`   | `[robots]`     | robots.txt output and crawler list   |
//! | `slashes`  | `[[slashes]]`  | Slash-page registry                  |

mod build;
mod robots;
mod serve;
mod site;
mod sitemap;
mod slashes;

pub use build::BuildSectionConfig;
pub use robots::RobotsConfig;
pub use serve::ServeConfig;
pub use site::SiteSectionConfig;
pub use sitemap::SitemapConfig;
pub use slashes::{SlashPageConfig, SlashSitemapRules, validate_slashes};
