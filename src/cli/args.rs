//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Sitemap and JSON-LD generator for documentation sites
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: docmeta.toml)
    #[arg(short = 'C', long, global = true, default_value = "docmeta.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write the sitemap and structured data to the output directory
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        build_args: BuildArgs,
    },

    /// Generate only the sitemap
    Sitemap {
        #[command(flatten)]
        build_args: BuildArgs,

        /// Print the sitemap to stdout instead of writing it
        #[arg(long)]
        stdout: bool,

        /// Print entries as JSON instead of XML (implies --stdout)
        #[arg(long)]
        json: bool,
    },

    /// Print the combined JSON-LD payload
    Schema {
        #[command(flatten)]
        build_args: BuildArgs,

        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Inject the JSON-LD script into rendered HTML under the output directory
    #[command(visible_alias = "i")]
    Inject {
        #[command(flatten)]
        build_args: BuildArgs,
    },

    /// Print the page catalog as JSON
    #[command(visible_alias = "p")]
    Pages {
        #[command(flatten)]
        build_args: BuildArgs,

        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,
    },
}

impl Commands {
    /// Config overrides shared by every subcommand.
    pub fn build_args(&self) -> &BuildArgs {
        match self {
            Self::Build { build_args }
            | Self::Sitemap { build_args, .. }
            | Self::Schema { build_args, .. }
            | Self::Inject { build_args }
            | Self::Pages { build_args, .. } => build_args,
        }
    }
}

/// Config overrides shared by all commands
#[derive(clap::Args, Debug, Clone, Default)]
pub struct BuildArgs {
    /// Output directory path (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Minify the sitemap XML
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub minify: Option<bool>,

    /// Include draft pages
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub drafts: Option<bool>,

    /// Override site URL for deployment.
    ///
    /// Useful for preview deployments where the public URL differs from the
    /// one in docmeta.toml. A path component is kept as a prefix.
    ///
    /// Example:
    ///   docmeta build --site-url "https://preview.example.com/docs"
    #[arg(short = 'U', long = "site-url", value_hint = clap::ValueHint::Url)]
    pub site_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_build_overrides() {
        let cli = Cli::parse_from([
            "docmeta",
            "build",
            "--output",
            "public",
            "--minify",
            "--drafts=false",
            "--site-url",
            "https://preview.example.com",
        ]);
        let args = cli.command.build_args();
        assert_eq!(args.output, Some(PathBuf::from("public")));
        assert_eq!(args.minify, Some(true));
        assert_eq!(args.drafts, Some(false));
        assert_eq!(args.site_url.as_deref(), Some("https://preview.example.com"));
        assert_eq!(cli.config, PathBuf::from("docmeta.toml"));
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["docmeta", "schema", "--pretty", "-v", "-C", "site.toml"]);
        assert!(cli.verbose);
        assert_eq!(cli.config, PathBuf::from("site.toml"));
        assert!(matches!(cli.command, Commands::Schema { pretty: true, .. }));
    }

    #[test]
    fn test_parse_sitemap_flags() {
        let cli = Cli::parse_from(["docmeta", "sitemap", "--json"]);
        assert!(matches!(
            cli.command,
            Commands::Sitemap {
                json: true,
                stdout: false,
                ..
            }
        ));
        assert_eq!(cli.command.build_args().minify, None);
    }
}
