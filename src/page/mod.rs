//! Page catalog: content mounts, front-matter and routes.
//!
//! - `catalog`: `PageSource` trait and the filesystem `ContentCatalog`
//! - `frontmatter`: `---` / `+++` block extraction
//! - `meta`: `PageMeta` front-matter fields
//! - `route`: source path to URL mapping

mod catalog;
mod frontmatter;
mod meta;
mod route;

pub use catalog::{CatalogError, ContentCatalog, PageRecord, PageSource};
pub use meta::PageMeta;

/// JSON object map for free-form front-matter fields.
pub type JsonMap = serde_json::Map<String, serde_json::Value>;
