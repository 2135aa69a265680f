//! `[organization]` section configuration.
//!
//! Identity of the publisher, emitted as the Organization schema.
//!
//! ```toml
//! [organization]
//! name = "DeployStack"
//! url = "https://deploystack.io"
//! logo = "/logo.png"               # relative paths resolve against site.url
//! same_as = [
//!     "https://github.com/deploystackio",
//!     "https://twitter.com/deploystack",
//! ]
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrganizationConfig {
    /// Organization name.
    pub name: String,

    /// Organization homepage (falls back to `site.url`).
    pub url: Option<String>,

    /// Logo URL, absolute or site-relative.
    pub logo: Option<String>,

    /// Social profile URLs (`sameAs`).
    pub same_as: Vec<String>,
}

pub struct OrganizationFields {
    pub name: FieldPath,
    pub url: FieldPath,
    pub logo: FieldPath,
    pub same_as: FieldPath,
}

impl OrganizationConfig {
    pub const FIELDS: OrganizationFields = OrganizationFields {
        name: FieldPath::new("organization.name"),
        url: FieldPath::new("organization.url"),
        logo: FieldPath::new("organization.logo"),
        same_as: FieldPath::new("organization.same_as"),
    };

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.name.trim().is_empty() && (self.logo.is_some() || !self.same_as.is_empty()) {
            diag.error_with_hint(
                Self::FIELDS.name,
                "organization identity is configured but has no name",
                format!("set {}", Self::FIELDS.name),
            );
        }

        if let Some(url) = &self.url
            && url::Url::parse(url).is_err()
        {
            diag.error(Self::FIELDS.url, format!("invalid URL: {url}"));
        }

        if let Some(logo) = &self.logo
            && !logo.starts_with('/')
            && url::Url::parse(logo).is_err()
        {
            diag.error_with_hint(
                Self::FIELDS.logo,
                format!("invalid logo URL: {logo}"),
                "use an absolute URL or a site-relative path like /logo.png",
            );
        }

        for profile in &self.same_as {
            if url::Url::parse(profile).is_err() {
                diag.error(
                    Self::FIELDS.same_as,
                    format!("invalid profile URL: {profile}"),
                );
            }
        }
    }
}
