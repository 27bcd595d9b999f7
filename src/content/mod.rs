//! Content schema and discovery.
//!
//! | Module        | Role                                             |
//! |---------------|--------------------------------------------------|
//! | `page`        | `Page`, `PageType`, `Locale`, `ChangeFreq`       |
//! | `frontmatter` | YAML / TOML frontmatter parsing                  |
//! | `collection`  | Walking `pages/`, `blog/`, `project/`            |
//! | `manifest`    | Keys of discovered static pages                  |

mod collection;
mod error;
mod frontmatter;
mod manifest;
mod page;

pub use collection::{Collection, ContentSet};
pub use manifest::PageManifest;
pub use page::{ChangeFreq, Locale, Page, PageType};

#[cfg(test)]
pub use collection::ContentEntry;
#[cfg(test)]
pub use page::SlugTranslations;
