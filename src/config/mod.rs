//! Site configuration management for `pagemap.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! ├── types/         # ConfigError, ConfigDiagnostics, FieldPath
//! ├── util.rs        # Config file discovery
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section        | Purpose                                      |
//! |----------------|----------------------------------------------|
//! | `[site]`       | Base URL, default locale, locale set         |
//! | `[build]`      | Content/output directories, minify           |
//! | `[serve]`      | Development server (interface, port)         |
//! | `[sitemap]`    | Sitemap output                               |
//! | `[robots]`     | robots.txt output and disallowed crawlers    |
//! | `[[slashes]]`  | Slash-page registry                          |
//!
//! A missing config file is not an error: every section has defaults and the
//! base URL can come from `--site-url` or `BASE_URL`.

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{
    BuildSectionConfig, RobotsConfig, ServeConfig, SitemapConfig, SiteSectionConfig,
    SlashPageConfig, SlashSitemapRules,
};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::{
    cli::{BuildArgs, Cli, Commands},
    core::BuildMode,
    debug, log,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing pagemap.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Production or development run, decided by the command (internal use only)
    #[serde(skip, default = "default_mode")]
    pub mode: BuildMode,

    #[serde(default)]
    pub site: SiteSectionConfig,

    #[serde(default)]
    pub build: BuildSectionConfig,

    #[serde(default)]
    pub serve: ServeConfig,

    #[serde(default)]
    pub sitemap: SitemapConfig,

    #[serde(default)]
    pub robots: RobotsConfig,

    #[serde(default)]
    pub slashes: Vec<SlashPageConfig>,
}

const fn default_mode() -> BuildMode {
    BuildMode::DEVELOPMENT
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            config_path: PathBuf::new(),
            root: PathBuf::new(),
            mode: default_mode(),
            site: SiteSectionConfig::default(),
            build: BuildSectionConfig::default(),
            serve: ServeConfig::default(),
            sitemap: SitemapConfig::default(),
            robots: RobotsConfig::default(),
            slashes: Vec::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd to find the config file. The project root is
    /// the config file's parent directory, or cwd when no file exists.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let mut config = match find_config_file(&cli.config) {
            Some(path) => {
                let mut config = Self::from_path(&path)?;
                config.root = path.parent().map(Path::to_path_buf).unwrap_or(cwd);
                config.config_path = path;
                config
            }
            None => {
                debug!("config"; "{} not found, using defaults", cli.config.display());
                Self {
                    config_path: cwd.join(&cli.config),
                    root: cwd,
                    ..Self::default()
                }
            }
        };

        config.finalize(cli);
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring: {}", display_path, fields.join(", "));
    }

    /// Content directory (absolute after loading).
    pub fn content_dir(&self) -> &Path {
        &self.build.content
    }

    /// Output directory (absolute after loading).
    pub fn output_dir(&self) -> &Path {
        &self.build.output
    }

    /// Base URL if configured and non-blank.
    pub fn base_url(&self) -> Option<&str> {
        self.site.base_url()
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Finalize configuration after loading.
    fn finalize(&mut self, cli: &Cli) {
        Self::update_option(&mut self.build.content, cli.content.as_ref());
        Self::update_option(&mut self.build.output, cli.output.as_ref());
        self.normalize_paths();
        self.apply_command_options(cli);
    }

    /// Apply command-specific configuration options.
    fn apply_command_options(&mut self, cli: &Cli) {
        match &cli.command {
            Commands::Build { build_args } => {
                self.mode = BuildMode::PRODUCTION;
                self.apply_build_args(build_args);
            }
            Commands::Serve {
                build_args,
                interface,
                port,
                production,
            } => {
                self.mode = if *production {
                    BuildMode::PRODUCTION
                } else {
                    BuildMode::DEVELOPMENT
                };
                self.apply_build_args(build_args);
                Self::update_option(&mut self.serve.interface, interface.as_ref());
                Self::update_option(&mut self.serve.port, port.as_ref());
            }
            Commands::Slashes { .. } => {}
        }
    }

    /// Apply build arguments from CLI.
    fn apply_build_args(&mut self, args: &BuildArgs) {
        crate::logger::set_verbose(args.verbose);

        Self::update_option(&mut self.build.minify, args.minify.as_ref());

        // --site-url (or BASE_URL) overrides [site] url
        if let Some(url) = args.site_url.as_deref().map(str::trim)
            && !url.is_empty()
        {
            self.site.url = Some(url.to_string());
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Resolve content/output directories against the project root.
    fn normalize_paths(&mut self) {
        let root = crate::utils::path::normalize_path(&self.root);
        self.build.content = crate::utils::path::normalize_path(&root.join(&self.build.content));
        self.build.output = crate::utils::path::normalize_path(&root.join(&self.build.output));
        self.root = root;
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration, collecting all errors before failing.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);
        self.robots.validate(&mut diag);
        section::validate_slashes(&self.slashes, &mut diag);

        diag.print_warnings();
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config from a TOML snippet.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> SiteConfig {
    let (parsed, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
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
