//! `pagemap slashes`: print the slash-page registry.

use crate::{
    config::SiteConfig,
    content::ContentSet,
    slashes::{self, SlashPage},
};
use anyhow::{Context, Result};
use owo_colors::OwoColorize;

/// Print every declared slash page with its visibility.
pub fn list_slashes(config: &SiteConfig, json: bool) -> Result<()> {
    let content = ContentSet::load(config.content_dir()).with_context(|| {
        format!("Failed to load content from {}", config.content_dir().display())
    })?;
    let pages = slashes::resolve(&config.slashes, &content.manifest);

    if json {
        println!("{}", slashes::to_json(&pages)?);
    } else {
        print!("{}", render_table(&pages));
    }
    Ok(())
}

/// One line per page: marker, link, description.
fn render_table(pages: &[SlashPage<'_>]) -> String {
    let width = pages.iter().map(|p| p.link.chars().count()).max().unwrap_or(0);

    pages
        .iter()
        .map(|page| {
            let marker = if page.is_visible {
                "●".green().to_string()
            } else {
                "○".dimmed().to_string()
            };
            let pad = width - page.link.chars().count();
            format!(
                "{} {}{}  {}\n",
                marker,
                page.link.bold(),
                " ".repeat(pad),
                page.description
            )
        })
        .collect()
}
