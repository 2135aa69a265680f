//! Build orchestration.
//!
//! Phases:
//! - **Collect** - Read the page catalog from every content mount
//! - **Generate** - Sitemap and structured data, in parallel
//! - **Finalize** - Summary logging

use std::fs;
use std::time::Instant;

use anyhow::{Context, Result};

use crate::{
    config::SiteConfig,
    generator::sitemap::{self, Sitemap},
    log,
    page::{PageRecord, PageSource},
    seo::{self, schema},
    utils::plural_count,
};

/// Build every output: sitemap (if enabled) and the JSON-LD payload.
pub fn build_all<S: PageSource + ?Sized>(source: &S, config: &SiteConfig) -> Result<()> {
    let start = Instant::now();
    let pages = collect_pages(source)?;

    fs::create_dir_all(&config.build.output).with_context(|| {
        format!(
            "Failed to create output directory {}",
            config.build.output.display()
        )
    })?;

    let (sitemap_result, schema_result) = rayon::join(
        || sitemap::build_sitemap_file(&pages, config),
        || write_structured_data(config),
    );
    sitemap_result?;
    schema_result?;

    log!("build"; "done in {:.2?} ({})", start.elapsed(), plural_count(pages.len(), "page"));
    Ok(())
}

/// `docmeta sitemap`: write the sitemap, or print it as XML or JSON.
pub fn run_sitemap<S: PageSource + ?Sized>(
    source: &S,
    config: &SiteConfig,
    stdout: bool,
    json: bool,
) -> Result<()> {
    let pages = collect_pages(source)?;
    let sitemap = Sitemap::from_pages(&pages, config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(sitemap.entries())?);
    } else if stdout {
        print!("{}", sitemap.into_xml());
    } else {
        sitemap.write(config)?;
    }
    Ok(())
}

/// Collect pages, logging the total.
pub fn collect_pages<S: PageSource + ?Sized>(source: &S) -> Result<Vec<PageRecord>> {
    let pages = source.pages().context("Failed to read page catalog")?;
    log!("catalog"; "{}", plural_count(pages.len(), "page"));
    Ok(pages)
}

/// Write the combined JSON-LD payload to `build.structured_data`.
fn write_structured_data(config: &SiteConfig) -> Result<()> {
    let payload = schema::combine_schemas(&seo::site_schemas(config))?;
    let path = config.build.structured_data_path();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(&path, payload)
        .with_context(|| format!("Failed to write structured data to {}", path.display()))?;

    log!("schema"; "{}", path.file_name().unwrap_or_default().to_string_lossy());
    Ok(())
}
