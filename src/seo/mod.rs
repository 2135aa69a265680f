//! Search engine metadata.
//!
//! - `schema`: schema.org JSON-LD objects and the combined payload
//! - `inject`: `<script>` injection into rendered HTML

pub mod inject;
pub mod schema;

use crate::config::{OrganizationConfig, SiteConfig};
use crate::core::UrlPath;
use schema::SchemaObject;

/// Schemas for the configured site, in payload order.
///
/// The organization is included only when it has a name. Its `url` falls
/// back to `site.url` and a root-relative `logo` is made absolute.
pub fn site_schemas(config: &SiteConfig) -> Vec<SchemaObject> {
    let mut schemas = vec![schema::website_schema(&config.site)];
    if !config.organization.name.trim().is_empty() {
        let org = resolve_organization(&config.organization, config.base_url());
        schemas.push(schema::organization_schema(&org));
    }
    schemas
}

fn resolve_organization(org: &OrganizationConfig, base_url: &str) -> OrganizationConfig {
    let url = org
        .url
        .clone()
        .or_else(|| (!base_url.is_empty()).then(|| UrlPath::root().absolute(base_url)));
    let logo = org.logo.as_deref().map(|logo| {
        if logo.starts_with('/') {
            UrlPath::from_page(logo).absolute(base_url)
        } else {
            logo.to_string()
        }
    });

    OrganizationConfig {
        url,
        logo,
        ..org.clone()
    }
}
