//! Sitemap generation.
//!
//! Maps every catalog page to a sitemap entry and writes `sitemap.xml`.
//!
//! # Priority
//!
//! | Route                                   | Priority |
//! |-----------------------------------------|----------|
//! | `/`                                     | 1.0      |
//! | starts with `/development`, `/self-hosted` | 0.7   |
//! | anything else                           | 0.8      |
//!
//! The prefix list comes from `[sitemap] low_priority_prefixes`.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://docs.example.com/</loc>
//!     <lastmod>2025-01-01</lastmod>
//!     <changefreq>weekly</changefreq>
//!     <priority>1.0</priority>
//!   </url>
//! </urlset>
//! ```

use crate::{
    config::{SiteConfig, SitemapConfig},
    generator::{escape_xml, minify_xml},
    log,
    page::PageRecord,
    utils::date::{DateError, DateTimeUtc},
};
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use thiserror::Error;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

#[derive(Debug, Error)]
pub enum SitemapError {
    #[error("page `{url}` has an invalid lastModified value `{value}`")]
    InvalidLastModified {
        url: String,
        value: String,
        #[source]
        source: DateError,
    },
}

/// Sitemap `<changefreq>`. Documentation pages are always revisited weekly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Weekly,
}

impl ChangeFrequency {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
        }
    }
}

/// Sitemap `<priority>` in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Priority(f32);

impl Priority {
    /// The site root.
    pub const ROOT: Self = Self(1.0);
    /// Regular documentation pages.
    pub const DEFAULT: Self = Self(0.8);
    /// Pages under a low-priority prefix.
    pub const LOW: Self = Self(0.7);
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

/// Route prefixes that lower a page's priority.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriorityRules {
    low_prefixes: Vec<String>,
}

impl Default for PriorityRules {
    fn default() -> Self {
        Self::new(["/development", "/self-hosted"])
    }
}

impl PriorityRules {
    pub fn new<S: Into<String>>(low_prefixes: impl IntoIterator<Item = S>) -> Self {
        Self {
            low_prefixes: low_prefixes.into_iter().map(Into::into).collect(),
        }
    }

    pub fn from_config(config: &SitemapConfig) -> Self {
        Self::new(config.low_priority_prefixes.iter().cloned())
    }

    /// Priority for a site-relative route. Total over all strings.
    ///
    /// The root check comes first, so a `/` prefix never demotes the root.
    pub fn priority_for(&self, url: &str) -> Priority {
        if url == "/" {
            Priority::ROOT
        } else if self.low_prefixes.iter().any(|p| url.starts_with(p.as_str())) {
            Priority::LOW
        } else {
            Priority::DEFAULT
        }
    }
}

/// One `<url>` of the sitemap.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapEntry {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTimeUtc>,
    pub change_frequency: ChangeFrequency,
    pub priority: Priority,
}

/// Map pages to sitemap entries, one per page, in input order.
///
/// A missing `lastModified` stays absent; a malformed one is an error.
pub fn build_sitemap(
    pages: &[PageRecord],
    base_url: &str,
    rules: &PriorityRules,
) -> Result<Vec<SitemapEntry>, SitemapError> {
    pages
        .iter()
        .map(|page| {
            let last_modified = page
                .meta
                .last_modified
                .as_deref()
                .map(|value| {
                    DateTimeUtc::parse(value).map_err(|source| SitemapError::InvalidLastModified {
                        url: page.url.to_string(),
                        value: value.to_string(),
                        source,
                    })
                })
                .transpose()?;

            Ok(SitemapEntry {
                url: page.url.absolute(base_url),
                last_modified,
                change_frequency: ChangeFrequency::Weekly,
                priority: rules.priority_for(page.url.as_str()),
            })
        })
        .collect()
}

/// Serializable sitemap document.
pub struct Sitemap {
    urls: Vec<SitemapEntry>,
}

impl Sitemap {
    pub fn new(urls: Vec<SitemapEntry>) -> Self {
        Self { urls }
    }

    /// Build from catalog pages using the site's base URL and priority rules.
    pub fn from_pages(pages: &[PageRecord], config: &SiteConfig) -> Result<Self, SitemapError> {
        let rules = PriorityRules::from_config(&config.sitemap);
        Ok(Self::new(build_sitemap(pages, config.base_url(), &rules)?))
    }

    pub fn entries(&self) -> &[SitemapEntry] {
        &self.urls
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn into_xml(self) -> String {
        let mut xml = String::with_capacity(128 + self.urls.len() * 160);

        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<urlset xmlns=\"");
        xml.push_str(SITEMAP_NS);
        xml.push_str("\">\n");

        for entry in self.urls {
            xml.push_str("  <url>\n    <loc>");
            xml.push_str(&escape_xml(&entry.url));
            xml.push_str("</loc>\n");
            if let Some(lastmod) = entry.last_modified {
                xml.push_str("    <lastmod>");
                xml.push_str(&lastmod.to_w3c());
                xml.push_str("</lastmod>\n");
            }
            xml.push_str("    <changefreq>");
            xml.push_str(entry.change_frequency.as_str());
            xml.push_str("</changefreq>\n    <priority>");
            xml.push_str(&entry.priority.to_string());
            xml.push_str("</priority>\n  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }

    /// Write to `<output>/<sitemap.path>`.
    pub fn write(self, config: &SiteConfig) -> Result<()> {
        let sitemap_path = config.sitemap_path();
        if let Some(parent) = sitemap_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let count = self.len();
        let xml = self.into_xml();
        let xml = minify_xml(xml.as_bytes(), config.build.minify);

        fs::write(&sitemap_path, &*xml)
            .with_context(|| format!("Failed to write sitemap to {}", sitemap_path.display()))?;

        log!("sitemap"; "{}", written_summary(&sitemap_path, count));
        Ok(())
    }
}

/// `sitemap.xml (3 URLs)`
fn written_summary(path: &std::path::Path, count: usize) -> String {
    format!(
        "{} ({})",
        path.file_name().unwrap_or_default().to_string_lossy(),
        crate::utils::plural_count(count, "URL")
    )
}

/// Build sitemap from catalog pages and write it, if enabled.
pub fn build_sitemap_file(pages: &[PageRecord], config: &SiteConfig) -> Result<()> {
    if config.sitemap.enable {
        Sitemap::from_pages(pages, config)?.write(config)?;
    }
    Ok(())
}
