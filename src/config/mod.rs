//! Site configuration management for `docmeta.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── build      # [build] and [[build.content]]
//! │   ├── organization # [organization]
//! │   ├── site       # [site]
//! │   └── sitemap    # [sitemap]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section          | Purpose                                         |
//! |------------------|-------------------------------------------------|
//! | `[site]`         | Site title, description, url, language          |
//! | `[organization]` | Publisher name, url, logo, social profiles      |
//! | `[build]`        | Content mounts, output dir, minify, drafts      |
//! | `[sitemap]`      | Sitemap toggle, path, low-priority prefixes     |

pub mod section;
pub mod types;
mod util;

pub use section::{BuildConfig, ContentMount, OrganizationConfig, SiteInfoConfig, SitemapConfig};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::{cli::BuildArgs, log};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing docmeta.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Site identity
    #[serde(default)]
    pub site: SiteInfoConfig,

    /// Publishing organization
    #[serde(default)]
    pub organization: OrganizationConfig,

    /// Build settings
    #[serde(default)]
    pub build: BuildConfig,

    /// Sitemap settings
    #[serde(default)]
    pub sitemap: SitemapConfig,
}

impl SiteConfig {
    /// Load configuration for a command.
    ///
    /// Searches upward from cwd for `config_name`; the project root is the
    /// config file's parent directory.
    pub fn load(config_name: &Path, args: &BuildArgs) -> Result<Self, ConfigError> {
        let config_path = util::find_config_file(config_name)
            .ok_or_else(|| ConfigError::NotFound(config_name.to_path_buf()))?;

        let mut config = Self::from_path(&config_path)?;
        config.finalize(config_path, args);
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {} are ignored:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Set paths and apply CLI overrides.
    fn finalize(&mut self, config_path: PathBuf, args: &BuildArgs) {
        let root = config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        self.config_path = config_path;
        self.apply_build_args(args);
        self.root = crate::utils::normalize_path(&root);
        self.build.normalize(&self.root);
    }

    /// Base URL for absolute links.
    pub fn base_url(&self) -> &str {
        self.site.base_url()
    }

    /// Absolute path of the sitemap output file.
    pub fn sitemap_path(&self) -> PathBuf {
        self.build.output.join(&self.sitemap.path)
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply build arguments from CLI.
    pub fn apply_build_args(&mut self, args: &BuildArgs) {
        Self::update_option(&mut self.build.output, args.output.as_ref());
        Self::update_option(&mut self.build.minify, args.minify.as_ref());
        Self::update_option(&mut self.build.drafts, args.drafts.as_ref());

        // CI deployments often differ from the URL in docmeta.toml
        if let Some(ref url) = args.site_url {
            self.site.url = Some(url.clone());
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);
        self.organization.validate(&mut diag);
        self.build.validate(&mut diag);
        self.sitemap.validate(&mut diag);

        diag.print_warnings();
        diag.into_result().map_err(ConfigError::Diagnostics)
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with a minimal valid `[site]` section.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!(
        "[site]\ntitle = \"Test Docs\"\nurl = \"https://docs.example.com\"\n{extra}"
    );
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_from_str_invalid_toml() {
        let result = SiteConfig::from_str("[site\ntitle = \"Docs\"");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_site_config_default() {
        let config = SiteConfig::default();

        assert_eq!(config.config_path, PathBuf::new());
        assert_eq!(config.site.title, "");
        assert_eq!(config.site.language, "en");
        assert!(config.sitemap.enable);
        assert!(!config.build.minify);
    }

    #[test]
    fn test_parse_full_config() {
        let config = test_parse_config(
            r#"
[organization]
name = "DeployStack"
logo = "/logo.png"
same_as = ["https://github.com/deploystackio"]

[build]
output = "dist"
drafts = true

[[build.content]]
dir = "content/docs"

[[build.content]]
dir = "content/development"
prefix = "/development"

[sitemap]
low_priority_prefixes = ["/development"]
"#,
        );

        assert_eq!(config.base_url(), "https://docs.example.com");
        assert_eq!(config.organization.name, "DeployStack");
        assert_eq!(config.build.output, PathBuf::from("dist"));
        assert!(config.build.drafts);
        assert_eq!(config.build.content.len(), 2);
        assert_eq!(config.build.content[0].prefix, "/");
        assert_eq!(config.build.content[1].prefix, "/development");
        assert_eq!(config.sitemap.low_priority_prefixes, vec!["/development"]);
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[site]\ntitle = \"Test\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();

        assert_eq!(config.site.title, "Test");
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let content = "[site]\ntitle = \"Test\"";
        let (_, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_cli_overrides() {
        let mut config = test_parse_config("");
        let args = BuildArgs {
            output: Some(PathBuf::from("public")),
            site_url: Some("https://preview.example.com".into()),
            minify: Some(true),
            drafts: None,
        };
        config.apply_build_args(&args);

        assert_eq!(config.build.output, PathBuf::from("public"));
        assert_eq!(config.base_url(), "https://preview.example.com");
        assert!(config.build.minify);
        assert!(!config.build.drafts);
    }

    #[test]
    fn test_finalize_resolves_paths_and_validates() {
        let tmp = TempDir::new().unwrap();
        std::fs::create_dir_all(tmp.path().join("content/docs")).unwrap();
        let config_path = tmp.path().join("docmeta.toml");

        let mut config = test_parse_config("");
        config.finalize(config_path.clone(), &BuildArgs::default());

        assert_eq!(config.config_path, config_path);
        assert!(config.build.output.ends_with("out"));
        assert!(config.build.content[0].dir.is_absolute());
        assert!(config.sitemap_path().ends_with("out/sitemap.xml"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let mut config = SiteConfig::default();
        config.build.content = vec![ContentMount::new("/definitely/not/here", "/")];
        config.sitemap.low_priority_prefixes = vec!["development".into()];

        match config.validate() {
            Err(ConfigError::Diagnostics(diag)) => assert_eq!(diag.len(), 3),
            other => panic!("expected diagnostics, got {other:?}"),
        }
    }
}
