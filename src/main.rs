//! docmeta - sitemap and JSON-LD generation for documentation sites.

mod cli;
mod config;
mod core;
mod generator;
mod logger;
mod page;
mod seo;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;
use page::ContentCatalog;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = SiteConfig::load(&cli.config, cli.command.build_args())?;
    let catalog = ContentCatalog::new(&config);

    match &cli.command {
        Commands::Build { .. } => cli::build::build_all(&catalog, &config),
        Commands::Sitemap { stdout, json, .. } => {
            cli::build::run_sitemap(&catalog, &config, *stdout, *json)
        }
        Commands::Schema { pretty, .. } => cli::query::run_schema(&config, *pretty),
        Commands::Inject { .. } => cli::inject::run_inject(&config),
        Commands::Pages { pretty, .. } => cli::query::run_pages(&catalog, *pretty),
    }
}
