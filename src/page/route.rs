//! Source path to page URL mapping.
//!
//! ```text
//! content/docs/index.mdx                  -> /
//! content/docs/deploystack/mail.mdx       -> /deploystack/mail
//! content/development/backend/index.mdx   -> /development/backend
//! content/docs/(guides)/quick-start.mdx   -> /quick-start
//! ```

use std::path::Path;

use crate::core::UrlPath;

/// Extensions recognized as documentation pages.
pub const PAGE_EXTENSIONS: &[&str] = &["mdx", "md"];

/// Whether `path` is a page source (`.md`/`.mdx`, not `_partial` or hidden).
pub fn is_page_source(path: &Path) -> bool {
    let has_page_ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| PAGE_EXTENSIONS.contains(&ext));

    let visible = path
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| !name.starts_with(['_', '.']));

    has_page_ext && visible
}

/// Compute the page URL for a source file relative to its mount directory.
///
/// - the extension is stripped
/// - a trailing `index` segment is dropped
/// - folder groups written as `(name)` do not contribute a segment
pub fn url_for(rel_path: &Path, prefix: &UrlPath) -> UrlPath {
    let stem = rel_path.with_extension("");

    let mut segments: Vec<String> = stem
        .components()
        .filter_map(|c| c.as_os_str().to_str())
        .filter(|s| !is_group(s))
        .map(str::to_string)
        .collect();

    if segments.last().is_some_and(|s| s == "index") {
        segments.pop();
    }

    let route = UrlPath::from_segments(segments.iter().map(String::as_str));
    prefix.join(&route)
}

/// Folder groups organize files without changing URLs.
fn is_group(segment: &str) -> bool {
    segment.len() > 2 && segment.starts_with('(') && segment.ends_with(')')
}
