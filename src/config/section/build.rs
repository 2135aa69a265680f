//! `[build]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [build]
//! output = "out"                          # Output directory (relative to site root)
//! minify = false                          # Minify sitemap XML
//! drafts = false                          # Include `draft: true` pages
//! structured_data = "structured-data.json" # JSON-LD output (relative to output)
//!
//! [[build.content]]
//! dir = "content/docs"
//! prefix = "/"
//!
//! [[build.content]]
//! dir = "content/development"
//! prefix = "/development"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::core::UrlPath;
use crate::utils::normalize_path;

/// A content directory mounted under a URL prefix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentMount {
    /// Directory holding `.md`/`.mdx` sources.
    pub dir: PathBuf,

    /// Route prefix for every page in `dir`.
    #[serde(default)]
    pub prefix: UrlPath,
}

impl ContentMount {
    pub fn new(dir: impl Into<PathBuf>, prefix: &str) -> Self {
        Self {
            dir: dir.into(),
            prefix: UrlPath::from_page(prefix),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Output directory for generated files.
    pub output: PathBuf,

    /// Minify XML output.
    pub minify: bool,

    /// Include draft pages.
    pub drafts: bool,

    /// JSON-LD payload path, relative to `output`.
    pub structured_data: PathBuf,

    /// Content mounts, visited in order.
    pub content: Vec<ContentMount>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output: "out".into(),
            minify: false,
            drafts: false,
            structured_data: "structured-data.json".into(),
            content: vec![ContentMount::new("content/docs", "/")],
        }
    }
}

pub struct BuildFields {
    pub output: FieldPath,
    pub structured_data: FieldPath,
    pub content: FieldPath,
}

impl BuildConfig {
    pub const FIELDS: BuildFields = BuildFields {
        output: FieldPath::new("build.output"),
        structured_data: FieldPath::new("build.structured_data"),
        content: FieldPath::new("build.content"),
    };

    /// Resolve output and content directories against the site root.
    pub fn normalize(&mut self, root: &Path) {
        self.output = normalize_path(&root.join(&self.output));
        for mount in &mut self.content {
            mount.dir = normalize_path(&root.join(&mount.dir));
        }
    }

    /// Absolute path of the JSON-LD output file.
    pub fn structured_data_path(&self) -> PathBuf {
        self.output.join(&self.structured_data)
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.content.is_empty() {
            diag.error_with_hint(
                Self::FIELDS.content,
                "no content directories configured",
                "add a [[build.content]] entry with `dir` and `prefix`",
            );
        }

        for mount in &self.content {
            if !mount.dir.is_dir() {
                diag.error(
                    Self::FIELDS.content,
                    format!("content directory `{}` does not exist", mount.dir.display()),
                );
            }
        }

        if self.structured_data.is_absolute() {
            diag.error(
                Self::FIELDS.structured_data,
                "must be relative to the output directory",
            );
        }

        if self.output.is_file() {
            diag.error(
                Self::FIELDS.output,
                format!("`{}` is a file, not a directory", self.output.display()),
            );
        }
    }
}
