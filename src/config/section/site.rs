//! `[site]` section configuration.
//!
//! Display name and canonical URL of the documentation portal. These feed
//! the WebSite schema and the absolute URLs in `sitemap.xml`.
//!
//! ```toml
//! [site]
//! title = "DeployStack Docs"
//! description = "Documentation for DeployStack"
//! url = "https://docs.deploystack.io"
//! language = "en"
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfoConfig {
    /// Site display name.
    pub title: String,

    /// Site description.
    pub description: String,

    /// Canonical site URL; any path component is kept as a prefix.
    pub url: Option<String>,

    /// Language code (e.g., "en", "de").
    pub language: String,
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            url: None,
            language: "en".into(),
        }
    }
}

pub struct SiteInfoFields {
    pub title: FieldPath,
    pub url: FieldPath,
    pub language: FieldPath,
}

impl SiteInfoConfig {
    pub const FIELDS: SiteInfoFields = SiteInfoFields {
        title: FieldPath::new("site.title"),
        url: FieldPath::new("site.url"),
        language: FieldPath::new("site.language"),
    };

    /// Base URL for absolute links (empty if unset; validation rejects that).
    pub fn base_url(&self) -> &str {
        self.url.as_deref().unwrap_or_default()
    }

    /// Validate site configuration.
    ///
    /// # Checks
    /// - `url` is set, http(s), with a host
    /// - `title` is set (warning only)
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let Some(url_str) = &self.url else {
            diag.error_with_hint(
                Self::FIELDS.url,
                "site URL is required for sitemap and structured data",
                format!("set {}, e.g.: \"https://docs.example.com\"", Self::FIELDS.url),
            );
            return;
        };

        match url::Url::parse(url_str) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like https://docs.example.com",
                    );
                }
                if parsed.host_str().is_none() {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        "URL must have a valid host",
                        "use format like https://docs.example.com",
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    Self::FIELDS.url,
                    format!("invalid URL: {}", e),
                    "use format like https://docs.example.com",
                );
            }
        }

        if self.title.trim().is_empty() {
            diag.warn(Self::FIELDS.title, "empty title, WebSite schema will have no name");
        }
        if self.language.trim().is_empty() {
            diag.warn(Self::FIELDS.language, "empty language code");
        }
    }
}
