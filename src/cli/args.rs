//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Sitemap, robots.txt and contact endpoint for a personal site
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Output directory path (relative to project root)
    #[arg(short, long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Content directory path (relative to project root)
    #[arg(short, long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub content: Option<PathBuf>,

    /// Config file path (default: pagemap.toml)
    #[arg(short = 'C', long, global = true, default_value = "pagemap.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write sitemap.xml, robots.txt and slashes.json for production
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        build_args: BuildArgs,
    },

    /// Serve sitemap.xml, robots.txt and /api/contact locally
    #[command(visible_alias = "s")]
    Serve {
        #[command(flatten)]
        build_args: BuildArgs,

        /// Network interface to bind (e.g., 127.0.0.1, 0.0.0.0)
        #[arg(short, long)]
        interface: Option<std::net::IpAddr>,

        /// Port number to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Behave like a production build (base URL required)
        #[arg(long)]
        production: bool,
    },

    /// List slash pages and whether each one is visible
    Slashes {
        /// Print JSON instead of a table
        #[arg(short, long)]
        json: bool,
    },
}

/// Shared build arguments for Build and Serve commands
#[derive(clap::Args, Debug, Clone)]
pub struct BuildArgs {
    /// Minify the generated XML
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub minify: Option<bool>,

    /// Override the site base URL.
    ///
    /// Takes precedence over `[site] url` in pagemap.toml. Falls back to the
    /// `BASE_URL` environment variable when the flag is absent.
    ///
    /// Example:
    ///   pagemap build --site-url "https://www.example.dev"
    #[arg(short = 'U', long = "site-url", env = "BASE_URL", value_hint = clap::ValueHint::Url)]
    pub site_url: Option<String>,

    /// Print the page classification report
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

#[allow(unused)]
impl Cli {
    pub const fn is_build(&self) -> bool {
        matches!(self.command, Commands::Build { .. })
    }
    pub const fn is_serve(&self) -> bool {
        matches!(self.command, Commands::Serve { .. })
    }
    pub const fn is_slashes(&self) -> bool {
        matches!(self.command, Commands::Slashes { .. })
    }
}
