//! `[sitemap]` section configuration.
//!
//! ```toml
//! [sitemap]
//! enable = true
//! path = "sitemap.xml"
//! low_priority_prefixes = ["/development", "/self-hosted"]
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SitemapConfig {
    /// Enable sitemap generation.
    pub enable: bool,

    /// Output path for sitemap file, relative to `build.output`.
    pub path: PathBuf,

    /// Route prefixes whose pages get the lower 0.7 priority.
    pub low_priority_prefixes: Vec<String>,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            enable: true,
            path: "sitemap.xml".into(),
            low_priority_prefixes: vec!["/development".into(), "/self-hosted".into()],
        }
    }
}

pub struct SitemapFields {
    pub path: FieldPath,
    pub low_priority_prefixes: FieldPath,
}

impl SitemapConfig {
    pub const FIELDS: SitemapFields = SitemapFields {
        path: FieldPath::new("sitemap.path"),
        low_priority_prefixes: FieldPath::new("sitemap.low_priority_prefixes"),
    };

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.path.is_absolute() {
            diag.error(Self::FIELDS.path, "must be relative to the output directory");
        }

        for prefix in &self.low_priority_prefixes {
            if !prefix.starts_with('/') {
                diag.error_with_hint(
                    Self::FIELDS.low_priority_prefixes,
                    format!("prefix `{prefix}` does not start with `/`"),
                    format!("use \"/{}\"", prefix.trim_start_matches('/')),
                );
            } else if prefix == "/" {
                diag.warn(
                    Self::FIELDS.low_priority_prefixes,
                    "`/` matches every page except the root",
                );
            }
        }
    }
}
