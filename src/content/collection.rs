//! Discovery of static pages and content collections.
//!
//! ```text
//! content/
//! ├── pages/      # static pages (not recursive)
//! ├── blog/       # BLOG collection (recursive)
//! └── project/    # PROJECT collection (recursive)
//! ```

use super::error::ContentError;
use super::frontmatter::{self, FrontmatterError, PageFrontmatter};
use super::manifest::PageManifest;
use super::page::{Page, PageType};
use crate::debug;
use jwalk::WalkDir;
use std::fs;
use std::path::{Path, PathBuf};

/// Extensions treated as content sources.
pub const CONTENT_EXTENSIONS: &[&str] = &["md", "mdx"];

/// Directory holding static pages.
pub const PAGES_DIR: &str = "pages";

/// A typed content collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Blog,
    Project,
}

impl Collection {
    pub const ALL: [Self; 2] = [Self::Blog, Self::Project];

    /// Collection name; also its directory under the content root.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Blog => "blog",
            Self::Project => "project",
        }
    }

    /// Type assumed for entries that declare none.
    pub const fn page_type(self) -> PageType {
        match self {
            Self::Blog => PageType::Blog,
            Self::Project => PageType::Project,
        }
    }
}

/// A parsed page and the file it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentEntry {
    pub source: PathBuf,
    pub page: Page,
}

/// Everything discovered under the content root, in path order per source.
#[derive(Debug, Clone, Default)]
pub struct ContentSet {
    pub pages: Vec<ContentEntry>,
    pub blog: Vec<ContentEntry>,
    pub project: Vec<ContentEntry>,
    pub manifest: PageManifest,
}

impl ContentSet {
    /// Load all sources below `root`. Missing directories are empty sources.
    pub fn load(root: &Path) -> Result<Self, ContentError> {
        let mut set = Self::default();

        for path in discover(&root.join(PAGES_DIR), false) {
            match read_entry(&path, PageType::Site)? {
                Some(entry) => {
                    set.manifest.insert(&entry.page.slug);
                    set.pages.push(entry);
                }
                None => {
                    debug!("content"; "skipping {} (no frontmatter)", path.display());
                    if let Some(stem) = path.file_stem() {
                        set.manifest.insert(stem.to_string_lossy());
                    }
                }
            }
        }

        for collection in Collection::ALL {
            let entries = load_collection(root, collection)?;
            match collection {
                Collection::Blog => set.blog = entries,
                Collection::Project => set.project = entries,
            }
        }

        Ok(set)
    }

    pub fn collection(&self, collection: Collection) -> &[ContentEntry] {
        match collection {
            Collection::Blog => &self.blog,
            Collection::Project => &self.project,
        }
    }

    pub fn len(&self) -> usize {
        self.pages.len() + self.blog.len() + self.project.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Load one collection. Every entry must carry frontmatter.
fn load_collection(root: &Path, collection: Collection) -> Result<Vec<ContentEntry>, ContentError> {
    discover(&root.join(collection.name()), true)
        .into_iter()
        .map(|path| {
            read_entry(&path, collection.page_type())?
                .ok_or(ContentError::MissingFrontmatter(path))
        })
        .collect()
}

/// Collect content files under `dir`, sorted by path.
pub fn discover(dir: &Path, recursive: bool) -> Vec<PathBuf> {
    if !dir.is_dir() {
        return Vec::new();
    }

    let walker = WalkDir::new(dir);
    let walker = if recursive { walker } else { walker.max_depth(1) };

    let mut files: Vec<_> = walker
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path())
        .filter(|p| is_content_file(p))
        .collect();
    files.sort();
    files
}

fn is_content_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| CONTENT_EXTENSIONS.contains(&ext))
}

/// Read and parse one file. `Ok(None)` when it has no frontmatter.
fn read_entry(path: &Path, fallback: PageType) -> Result<Option<ContentEntry>, ContentError> {
    let content = fs::read_to_string(path).map_err(|e| ContentError::Io(path.to_path_buf(), e))?;

    let Some((raw, _body, format)) = frontmatter::detect(&content) else {
        return Ok(None);
    };

    let page = PageFrontmatter::parse(raw, format)
        .and_then(|fm| fm.into_page(fallback))
        .map_err(|err| match err {
            FrontmatterError::Parse(message) => ContentError::Frontmatter {
                path: path.to_path_buf(),
                message,
            },
            FrontmatterError::InvalidLastmod(value) => ContentError::InvalidLastmod {
                path: path.to_path_buf(),
                value,
            },
        })?;

    Ok(Some(ContentEntry {
        source: path.to_path_buf(),
        page,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Locale;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn page(lang: &str, slug: &str) -> String {
        format!("---\nlang: {lang}\nslug: \"{slug}\"\nlastmod: 2024-01-01\n---\n\nBody\n")
    }

    #[test]
    fn test_load_empty_root() {
        let dir = TempDir::new().unwrap();
        let set = ContentSet::load(dir.path()).unwrap();
        assert!(set.is_empty());
        assert!(set.manifest.is_empty());
    }

    #[test]
    fn test_load_sources_in_path_order() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        write(root, "pages/uses.md", &page("en", "uses"));
        write(root, "pages/index.mdx", &page("en", ""));
        write(root, "pages/nested/ignored.md", &page("en", "ignored"));
        write(root, "pages/notes.txt", "not content");
        write(root, "blog/fr/premier.md", &page("fr", "premier-article"));
        write(root, "blog/b-post.md", &page("en", "b-post"));
        write(root, "blog/a-post.md", &page("en", "a-post"));
        write(root, "project/pagemap.md", &page("en", "pagemap"));

        let set = ContentSet::load(root).unwrap();

        let slugs = |entries: &[ContentEntry]| -> Vec<String> {
            entries.iter().map(|e| e.page.slug.clone()).collect()
        };
        assert_eq!(slugs(&set.pages), vec!["", "uses"]);
        assert_eq!(slugs(&set.blog), vec!["a-post", "b-post", "premier-article"]);
        assert_eq!(slugs(&set.project), vec!["pagemap"]);

        assert!(set.blog.iter().all(|e| e.page.kind == PageType::Blog));
        assert_eq!(set.project[0].page.kind, PageType::Project);
        assert_eq!(set.blog[2].page.lang, Locale::from("fr"));
        assert_eq!(set.len(), 6);
    }

    #[test]
    fn test_pages_without_frontmatter_are_manifest_only() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "pages/colophon.md", "# Colophon\n");
        write(dir.path(), "pages/about.md", &page("en", "about-me"));

        let set = ContentSet::load(dir.path()).unwrap();
        assert_eq!(set.pages.len(), 1);
        assert!(set.manifest.contains("/colophon"));
        assert!(set.manifest.contains("/about-me"));
        assert!(!set.manifest.contains("/about"));
    }

    #[test]
    fn test_collection_entry_requires_frontmatter() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "blog/draft.md", "no metadata here");

        let err = ContentSet::load(dir.path()).unwrap_err();
        assert!(matches!(err, ContentError::MissingFrontmatter(p) if p.ends_with("draft.md")));
    }

    #[test]
    fn test_invalid_frontmatter_names_file() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "project/broken.md", "---\nlang: [\n---\n");

        let err = ContentSet::load(dir.path()).unwrap_err();
        assert!(err.to_string().contains("broken.md"));
    }

    #[test]
    fn test_invalid_lastmod_names_file() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "blog/old.md",
            "---\nlang: en\nslug: old\nlastmod: someday\n---\n",
        );

        let err = ContentSet::load(dir.path()).unwrap_err();
        assert!(matches!(
            err,
            ContentError::InvalidLastmod { ref value, .. } if value == "someday"
        ));
        assert!(err.to_string().contains("old.md"));
    }
}
