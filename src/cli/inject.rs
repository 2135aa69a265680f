//! `docmeta inject`: add the JSON-LD script to rendered pages.

use anyhow::Result;

use crate::{
    config::SiteConfig,
    log,
    seo::{self, inject, schema},
    utils::plural_count,
};

pub fn run_inject(config: &SiteConfig) -> Result<()> {
    let payload = schema::combine_schemas(&seo::site_schemas(config))?;
    let tag = inject::script_tag(&payload);

    let report = inject::inject_dir(&config.build.output, &tag)?;
    log!("inject"; "{} updated, {} skipped",
        plural_count(report.injected, "page"), report.skipped);
    Ok(())
}
