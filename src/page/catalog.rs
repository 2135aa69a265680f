//! Page catalog aggregated from every content mount.
//!
//! The catalog is the only place that touches the content tree. Generators
//! receive plain [`PageRecord`] values and never read files themselves.

use std::path::{Path, PathBuf};

use jwalk::WalkDir;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use serde::Serialize;
use thiserror::Error;

use super::{PageMeta, frontmatter, route};
use crate::config::{ContentMount, SiteConfig};
use crate::core::UrlPath;
use crate::debug;

/// One documentation page as surfaced by the content source.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageRecord {
    /// Site-relative route.
    pub url: UrlPath,
    /// Source file the page was read from.
    pub source: PathBuf,
    /// Front-matter (flattened in JSON output).
    #[serde(flatten)]
    pub meta: PageMeta,
}

impl PageRecord {
    pub fn new(url: impl Into<UrlPath>, meta: PageMeta) -> Self {
        Self {
            url: url.into(),
            source: PathBuf::new(),
            meta,
        }
    }

    /// Get title, falling back to the URL if not set.
    pub fn title(&self) -> &str {
        self.meta.title.as_deref().unwrap_or_else(|| self.url.as_str())
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("content directory `{0}` does not exist")]
    MissingDir(PathBuf),

    #[error("failed to read `{0}`")]
    Read(PathBuf, #[source] std::io::Error),

    #[error("failed to walk content directory `{0}`")]
    Walk(PathBuf, #[source] jwalk::Error),

    #[error("failed to parse front-matter in `{0}`")]
    FrontMatter(PathBuf, #[source] frontmatter::FrontMatterError),

    #[error("`{first}` and `{second}` both resolve to `{url}`")]
    Conflict {
        url: UrlPath,
        first: PathBuf,
        second: PathBuf,
    },
}

/// Read access to the ordered set of documentation pages.
pub trait PageSource {
    /// All pages, in source order. Finite and fully materialized.
    fn pages(&self) -> Result<Vec<PageRecord>, CatalogError>;
}

impl PageSource for [PageRecord] {
    fn pages(&self) -> Result<Vec<PageRecord>, CatalogError> {
        Ok(self.to_vec())
    }
}

/// Filesystem-backed catalog over the configured `[[build.content]]` mounts.
pub struct ContentCatalog<'a> {
    mounts: &'a [ContentMount],
    include_drafts: bool,
}

impl<'a> ContentCatalog<'a> {
    pub fn new(config: &'a SiteConfig) -> Self {
        Self {
            mounts: &config.build.content,
            include_drafts: config.build.drafts,
        }
    }

    /// Source files of one mount, in sorted path order.
    fn collect_sources(mount: &ContentMount) -> Result<Vec<PathBuf>, CatalogError> {
        if !mount.dir.is_dir() {
            return Err(CatalogError::MissingDir(mount.dir.clone()));
        }

        let mut sources = Vec::new();
        for entry in WalkDir::new(&mount.dir).sort(true) {
            let entry = entry.map_err(|e| CatalogError::Walk(mount.dir.clone(), e))?;
            let path = entry.path();
            if entry.file_type().is_file() && route::is_page_source(&path) {
                sources.push(path);
            }
        }

        // Component-wise order, independent of walker scheduling
        sources.sort();
        Ok(sources)
    }

    fn load_page(mount: &ContentMount, path: &Path) -> Result<PageRecord, CatalogError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| CatalogError::Read(path.to_path_buf(), e))?;

        let meta = frontmatter::extract(&content)
            .map_err(|e| CatalogError::FrontMatter(path.to_path_buf(), e))?
            .map(|(meta, _body)| meta)
            .unwrap_or_default();

        let rel = path.strip_prefix(&mount.dir).unwrap_or(path);
        let url = route::url_for(rel, &mount.prefix);

        Ok(PageRecord {
            url,
            source: path.to_path_buf(),
            meta,
        })
    }
}

impl PageSource for ContentCatalog<'_> {
    fn pages(&self) -> Result<Vec<PageRecord>, CatalogError> {
        let mut pages = Vec::new();
        let mut seen: FxHashMap<UrlPath, PathBuf> = FxHashMap::default();

        for mount in self.mounts {
            let sources = Self::collect_sources(mount)?;
            debug!("catalog"; "{}: {} source files", mount.dir.display(), sources.len());

            // Parallel read, order preserved by the indexed collect
            let loaded: Vec<PageRecord> = sources
                .par_iter()
                .map(|path| Self::load_page(mount, path))
                .collect::<Result<_, _>>()?;

            for page in loaded {
                if page.meta.draft && !self.include_drafts {
                    debug!("catalog"; "skipping draft {}", page.url);
                    continue;
                }
                if let Some(first) = seen.get(&page.url) {
                    return Err(CatalogError::Conflict {
                        url: page.url,
                        first: first.clone(),
                        second: page.source,
                    });
                }
                debug!("catalog"; "{} ({})", page.url, page.title());
                seen.insert(page.url.clone(), page.source.clone());
                pages.push(page);
            }
        }

        Ok(pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &Path, rel: &str, content: &str) {
        let path = dir.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn mount(dir: PathBuf, prefix: &str) -> ContentMount {
        ContentMount {
            dir,
            prefix: UrlPath::from_page(prefix),
        }
    }

    fn urls(pages: &[PageRecord]) -> Vec<&str> {
        pages.iter().map(|p| p.url.as_str()).collect()
    }

    #[test]
    fn test_aggregates_mounts_in_order() {
        let tmp = TempDir::new().unwrap();
        let docs = tmp.path().join("docs");
        let dev = tmp.path().join("development");
        write(&docs, "index.mdx", "---\ntitle: Home\n---\n");
        write(&docs, "deploystack/mail.mdx", "---\ntitle: Mail\n---\n");
        write(&dev, "backend/api.mdx", "---\nlastModified: 2024-01-01\n---\n");
        write(&dev, "backend/_shared.mdx", "partial");
        write(&dev, "meta.json", "{}");

        let mounts = vec![mount(docs, "/"), mount(dev, "/development")];
        let catalog = ContentCatalog {
            mounts: &mounts,
            include_drafts: false,
        };
        let pages = catalog.pages().unwrap();

        assert_eq!(
            urls(&pages),
            vec!["/deploystack/mail", "/", "/development/backend/api"]
        );
        assert_eq!(pages[1].title(), "Home");
        assert_eq!(pages[2].meta.last_modified.as_deref(), Some("2024-01-01"));
    }

    #[test]
    fn test_drafts_excluded_by_default() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "a.mdx", "---\ndraft: true\n---\n");
        write(tmp.path(), "b.mdx", "# no front-matter");

        let mounts = vec![mount(tmp.path().to_path_buf(), "/")];
        let catalog = ContentCatalog {
            mounts: &mounts,
            include_drafts: false,
        };
        assert_eq!(urls(&catalog.pages().unwrap()), vec!["/b"]);

        let catalog = ContentCatalog {
            mounts: &mounts,
            include_drafts: true,
        };
        assert_eq!(urls(&catalog.pages().unwrap()), vec!["/a", "/b"]);
    }

    #[test]
    fn test_url_conflict_is_reported() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "guide.mdx", "");
        write(tmp.path(), "guide/index.mdx", "");

        let mounts = vec![mount(tmp.path().to_path_buf(), "/")];
        let catalog = ContentCatalog {
            mounts: &mounts,
            include_drafts: false,
        };
        let err = catalog.pages().unwrap_err();
        assert!(matches!(err, CatalogError::Conflict { ref url, .. } if url == "/guide"));
    }

    #[test]
    fn test_malformed_front_matter_names_file() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "broken.mdx", "+++\ntitle = \n+++\n");

        let mounts = vec![mount(tmp.path().to_path_buf(), "/")];
        let catalog = ContentCatalog {
            mounts: &mounts,
            include_drafts: false,
        };
        let err = catalog.pages().unwrap_err();
        assert!(matches!(err, CatalogError::FrontMatter(ref p, _) if p.ends_with("broken.mdx")));
    }

    #[test]
    fn test_missing_mount_dir() {
        let tmp = TempDir::new().unwrap();
        let mounts = vec![mount(tmp.path().join("nope"), "/")];
        let catalog = ContentCatalog {
            mounts: &mounts,
            include_drafts: false,
        };
        assert!(matches!(catalog.pages(), Err(CatalogError::MissingDir(_))));
    }

    /// Revoke read access to `dir`; `false` when the process ignores it (root).
    #[cfg(unix)]
    fn lock_dir(dir: &Path) -> bool {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(dir, fs::Permissions::from_mode(0o000)).unwrap();
        fs::read_dir(dir).is_err()
    }

    #[cfg(unix)]
    fn unlock_dir(dir: &Path) {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(dir, fs::Permissions::from_mode(0o755)).unwrap();
    }

    #[test]
    #[cfg(unix)]
    fn test_unreadable_subdir_fails_load() {
        let tmp = TempDir::new().unwrap();
        let docs = tmp.path().join("docs");
        write(&docs, "index.mdx", "# Home");
        write(&docs, "self-hosted/docker.mdx", "# Docker");

        let locked = docs.join("self-hosted");
        if !lock_dir(&locked) {
            unlock_dir(&locked);
            return;
        }

        let mounts = vec![mount(docs, "/")];
        let catalog = ContentCatalog {
            mounts: &mounts,
            include_drafts: false,
        };
        let result = catalog.pages();
        unlock_dir(&locked);

        assert!(matches!(result, Err(CatalogError::Walk(..))), "{result:?}");
    }

    #[test]
    fn test_slice_source_preserves_order() {
        let records = vec![
            PageRecord::new("/b", PageMeta::default()),
            PageRecord::new("/a", PageMeta::default()),
        ];
        assert_eq!(urls(&records.pages().unwrap()), vec!["/b", "/a"]);
    }
}
