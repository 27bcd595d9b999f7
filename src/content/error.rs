//! Content loading errors.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("`{0}` has no frontmatter")]
    MissingFrontmatter(PathBuf),

    #[error("invalid frontmatter in `{path}`: {message}")]
    Frontmatter { path: PathBuf, message: String },

    #[error("invalid lastmod `{value}` in `{path}` (expected YYYY-MM-DD or RFC 3339)")]
    InvalidLastmod { path: PathBuf, value: String },
}
