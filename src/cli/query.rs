//! Read-only commands that print JSON to stdout.

use anyhow::Result;
use serde::Serialize;

use super::build::collect_pages;
use crate::{
    config::SiteConfig,
    page::PageSource,
    seo::{self, schema},
};

/// `docmeta pages`: print the page catalog.
pub fn run_pages<S: PageSource + ?Sized>(source: &S, pretty: bool) -> Result<()> {
    let pages = collect_pages(source)?;
    println!("{}", to_json(&pages, pretty)?);
    Ok(())
}

/// `docmeta schema`: print the combined JSON-LD payload.
pub fn run_schema(config: &SiteConfig, pretty: bool) -> Result<()> {
    let schemas = seo::site_schemas(config);
    let payload = if pretty {
        schema::combine_schemas_pretty(&schemas)?
    } else {
        schema::combine_schemas(&schemas)?
    };
    println!("{payload}");
    Ok(())
}

fn to_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}
