//! Configuration section definitions.
//!
//! Each module corresponds to a section in `docmeta.toml`:
//!
//! | Module         | TOML Section     | Purpose                              |
//! |----------------|------------------|--------------------------------------|
//! | `site`         | `[site]`         | Site name, description, canonical URL|
//! | `organization` | `[organization]` | Publisher identity for JSON-LD       |
//! | `build`        | `[build]`        | Content mounts, output, drafts       |
//! | `sitemap`      | `[sitemap]`      | Sitemap output and priority prefixes |

mod build;
mod organization;
mod site;
mod sitemap;

pub use build::{BuildConfig, ContentMount};
pub use organization::OrganizationConfig;
pub use site::SiteInfoConfig;
pub use sitemap::SitemapConfig;
