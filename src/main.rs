//! pagemap - sitemap, robots.txt and contact endpoint for a personal site.

mod cli;
mod config;
mod contact;
mod content;
mod core;
mod generator;
mod logger;
mod slashes;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> Result<()> {
    // Setup global Ctrl+C handler (before any blocking operations)
    core::setup_shutdown_handler()?;

    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::Build { .. } => cli::build::build_all(&config),
        Commands::Serve { .. } => cli::serve::serve_site(config),
        Commands::Slashes { json } => cli::slashes::list_slashes(&config, *json),
    }
}
