//! Build orchestration.
//!
//! Runs the whole pipeline in a fixed sequence: wipe and recreate the
//! output root, stage assets, convert and render every Markdown document,
//! emit the highlight stylesheet, write the search index, write the feed.
//! Each step runs exactly once; nothing is retried and nothing rolls back,
//! so an aborted build can leave a partial output tree behind. The next
//! build starts from a clean slate anyway.

use crate::config::SiteConfig;
use crate::markdown::MarkdownConverter;
use crate::render::{RenderError, TemplateEngine};
use crate::types::PageSummary;
use crate::{assets, feed, search, theme, walk};
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Asset error: {0}")]
    Asset(#[from] assets::AssetError),
    #[error("Template error: {0}")]
    Render(#[from] RenderError),
    #[error("Walk error: {0}")]
    Walk(#[from] walk::WalkError),
    #[error("Theme error: {0}")]
    Theme(#[from] theme::ThemeError),
    #[error("Search index error: {0}")]
    Search(#[from] search::SearchError),
    #[error("Feed error: {0}")]
    Feed(#[from] feed::FeedError),
}

/// What one build produced, for CLI reporting.
#[derive(Debug)]
pub struct BuildReport {
    /// One summary per rendered page, in discovery order.
    pub summaries: Vec<PageSummary>,
    /// Number of asset files staged.
    pub assets_copied: usize,
    /// Auxiliary artifacts written at the output root.
    pub artifacts: Vec<String>,
}

/// Run the full build pipeline.
///
/// The output root is fully destroyed and rebuilt: there is no incremental
/// state between runs other than the output directory itself.
pub fn build(source: &Path, output: &Path, config: &SiteConfig) -> Result<BuildReport, BuildError> {
    match fs::remove_dir_all(output) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(e.into()),
    }
    fs::create_dir_all(output)?;

    let assets_copied = assets::stage(
        &source.join(&config.assets.dir),
        &output.join(&config.assets.dir),
        config.assets.minify,
    )?;

    let converter = MarkdownConverter::new();
    let templates = TemplateEngine::new(&source.join(&config.templates.dir), &config.templates.page)?;
    let summaries = walk::walk(source, output, config, &converter, &templates)?;

    theme::emit(output, &config.highlight)?;
    search::write_index(&summaries, &output.join(&config.search.file))?;
    feed::write_feed(&summaries, &config.site, &output.join(&config.feed.file))?;

    Ok(BuildReport {
        summaries,
        assets_copied,
        artifacts: vec![
            config.highlight.stylesheet.clone(),
            config.search.file.clone(),
            config.feed.file.clone(),
        ],
    })
}
