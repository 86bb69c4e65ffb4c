//! Source tree walking and per-page rendering.
//!
//! Discovers every Markdown file under the docs root, mirrors the
//! directory structure into the output root with `.md` swapped for
//! `.html`, and accumulates one [`PageSummary`] per page for the search
//! index and feed writers.
//!
//! Directory entries are walked in lexical order so the summary sequence,
//! and therefore the search index and feed, are deterministic across
//! platforms and runs. Two sources mapping to the same output path (case
//! differences on case-insensitive filesystems) resolve last-write-wins
//! with no warning.

use crate::config::SiteConfig;
use crate::markdown::{self, MarkdownConverter};
use crate::render::{PageContext, RenderError, TemplateEngine};
use crate::types::PageSummary;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

#[derive(Error, Debug)]
pub enum WalkError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}

/// A discovered Markdown source document with its derived identity.
#[derive(Debug, Clone)]
pub struct SourceDoc {
    /// Absolute path of the source file.
    pub source_path: PathBuf,
    /// Output path relative to the output root (`.md` → `.html`).
    pub rel_html: PathBuf,
    /// Forward-slash URL form of `rel_html`.
    pub url: String,
    /// Display title derived from the filename.
    pub title: String,
}

/// Enumerate all Markdown files under the docs root, lexically sorted.
///
/// Hidden entries, `config.toml`, and the named top-level directories
/// (assets and templates) are skipped.
pub fn discover(source: &Path, skip_dirs: &[&str]) -> Result<Vec<SourceDoc>, WalkError> {
    let mut docs = Vec::new();

    let walker = WalkDir::new(source)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| keep_entry(e, skip_dirs));

    for entry in walker {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let is_md = path
            .extension()
            .map(|e| e.eq_ignore_ascii_case("md"))
            .unwrap_or(false);
        if !is_md {
            continue;
        }

        let rel = path.strip_prefix(source).unwrap_or(path);
        let rel_html = rel.with_extension("html");
        let url = rel_html
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();

        docs.push(SourceDoc {
            source_path: path.to_path_buf(),
            rel_html,
            url,
            title: derive_title(&stem),
        });
    }

    Ok(docs)
}

/// Convert, render and write every discovered page, returning the summary
/// list in discovery order.
pub fn walk(
    source: &Path,
    output: &Path,
    config: &SiteConfig,
    converter: &MarkdownConverter,
    templates: &TemplateEngine,
) -> Result<Vec<PageSummary>, WalkError> {
    let skip = [config.assets.dir.as_str(), config.templates.dir.as_str()];
    let docs = discover(source, &skip)?;

    let mut summaries = Vec::with_capacity(docs.len());
    for doc in &docs {
        let body = fs::read_to_string(&doc.source_path)?;
        let fragment = converter.convert(&body);

        let breadcrumbs: Vec<String> = doc.url.split('/').map(str::to_string).collect();
        let rendered = templates.render_page(&PageContext {
            title: &doc.title,
            content: &fragment,
            breadcrumbs: &breadcrumbs,
            site_title: &config.site.title,
            stylesheet: &config.highlight.stylesheet,
        })?;

        let out_path = output.join(&doc.rel_html);
        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&out_path, rendered)?;

        summaries.push(PageSummary {
            title: doc.title.clone(),
            url: doc.url.clone(),
            content: markdown::excerpt(&fragment, config.search.excerpt_length),
        });
    }

    Ok(summaries)
}

/// Filter applied while walking the docs root.
///
/// Drops hidden entries, `config.toml`, and the skip-listed top-level
/// directories. The root itself (depth 0) always passes.
fn keep_entry(entry: &DirEntry, skip_dirs: &[&str]) -> bool {
    if entry.depth() == 0 {
        return true;
    }
    let name = entry.file_name().to_string_lossy();
    if name.starts_with('.') || name == "config.toml" {
        return false;
    }
    if entry.depth() == 1 && entry.file_type().is_dir() && skip_dirs.contains(&name.as_ref()) {
        return false;
    }
    true
}

/// Derive the display title from a filename stem.
///
/// Underscores become spaces and each word is capitalized:
/// `getting_started` → "Getting Started".
pub fn derive_title(stem: &str) -> String {
    stem.replace('_', " ")
        .split(' ')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn fixture_tree() -> TempDir {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("intro.md"), "# Hello\n\nWorld").unwrap();
        fs::create_dir_all(tmp.path().join("guide")).unwrap();
        fs::write(tmp.path().join("guide/setup.md"), "# Setup").unwrap();
        fs::write(tmp.path().join("notes.txt"), "not markdown").unwrap();
        tmp
    }

    fn engine(tmp: &TempDir) -> TemplateEngine {
        TemplateEngine::new(&tmp.path().join("templates"), "base.html").unwrap()
    }

    #[test]
    fn discover_finds_only_markdown() {
        let tmp = fixture_tree();
        let docs = discover(tmp.path(), &[]).unwrap();

        let urls: Vec<&str> = docs.iter().map(|d| d.url.as_str()).collect();
        assert_eq!(urls, vec!["guide/setup.html", "intro.html"]);
    }

    #[test]
    fn discover_is_lexically_ordered() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("zebra.md"), "z").unwrap();
        fs::write(tmp.path().join("alpha.md"), "a").unwrap();
        fs::write(tmp.path().join("middle.md"), "m").unwrap();

        let docs = discover(tmp.path(), &[]).unwrap();
        let urls: Vec<&str> = docs.iter().map(|d| d.url.as_str()).collect();
        assert_eq!(urls, vec!["alpha.html", "middle.html", "zebra.html"]);
    }

    #[test]
    fn discover_skips_named_directories_and_hidden_files() {
        let tmp = fixture_tree();
        fs::create_dir_all(tmp.path().join("assets")).unwrap();
        fs::write(tmp.path().join("assets/readme.md"), "asset notes").unwrap();
        fs::write(tmp.path().join(".draft.md"), "hidden").unwrap();

        let docs = discover(tmp.path(), &["assets", "templates"]).unwrap();
        let urls: Vec<&str> = docs.iter().map(|d| d.url.as_str()).collect();
        assert_eq!(urls, vec!["guide/setup.html", "intro.html"]);
    }

    #[test]
    fn walk_mirrors_tree_and_returns_summaries() {
        let tmp = fixture_tree();
        let out = TempDir::new().unwrap();
        let config = SiteConfig::default();
        let converter = MarkdownConverter::new();
        let templates = engine(&tmp);

        let summaries = walk(tmp.path(), out.path(), &config, &converter, &templates).unwrap();

        assert_eq!(summaries.len(), 2);
        assert!(out.path().join("intro.html").is_file());
        assert!(out.path().join("guide/setup.html").is_file());

        let intro = summaries.iter().find(|s| s.url == "intro.html").unwrap();
        assert_eq!(intro.title, "Intro");
        assert!(intro.content.contains("<h1>Hello</h1>"));
    }

    #[test]
    fn walk_renders_through_template() {
        let tmp = fixture_tree();
        let out = TempDir::new().unwrap();
        let config = SiteConfig::default();
        let converter = MarkdownConverter::new();
        let templates = engine(&tmp);

        walk(tmp.path(), out.path(), &config, &converter, &templates).unwrap();

        let page = fs::read_to_string(out.path().join("intro.html")).unwrap();
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<h1>Hello</h1>"));
        assert!(page.contains("<p>World</p>"));
    }

    #[test]
    fn nested_page_breadcrumbs_root_to_leaf() {
        let tmp = fixture_tree();
        let out = TempDir::new().unwrap();
        let config = SiteConfig::default();
        let converter = MarkdownConverter::new();
        let templates = engine(&tmp);

        walk(tmp.path(), out.path(), &config, &converter, &templates).unwrap();

        let page = fs::read_to_string(out.path().join("guide/setup.html")).unwrap();
        let guide = page.find(">guide<").unwrap();
        let leaf = page.find(">setup.html<").unwrap();
        assert!(guide < leaf);
    }

    #[test]
    fn excerpts_respect_configured_cap() {
        let tmp = TempDir::new().unwrap();
        let long_body = format!("# Title\n\n{}", "word ".repeat(400));
        fs::write(tmp.path().join("long.md"), long_body).unwrap();
        let out = TempDir::new().unwrap();
        let config = SiteConfig::default();
        let converter = MarkdownConverter::new();
        let templates = engine(&tmp);

        let summaries = walk(tmp.path(), out.path(), &config, &converter, &templates).unwrap();

        assert_eq!(summaries[0].content.chars().count(), 500);
    }

    #[test]
    fn title_derivation() {
        assert_eq!(derive_title("intro"), "Intro");
        assert_eq!(derive_title("getting_started"), "Getting Started");
        assert_eq!(derive_title("API_notes"), "Api Notes");
    }
}
