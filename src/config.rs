//! Site configuration module.
//!
//! Handles loading and validating the `config.toml` placed at the documents
//! root. Configuration is sparse: stock defaults are overridden by whatever
//! keys the user's file provides, and unknown keys are rejected to catch
//! typos early.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [site]
//! title = "Markdown Site Feed"   # RSS channel title
//! link = "/"                     # RSS channel link
//! description = "Site updates"   # RSS channel description
//!
//! [assets]
//! dir = "assets"                 # Static assets dir, relative to the docs root
//! minify = false                 # Minify copied .css/.js files in place
//!
//! [templates]
//! dir = "templates"              # Template search dir, relative to the docs root
//! page = "base.html"             # Page template name (built-in default if absent)
//!
//! [search]
//! file = "search_index.json"     # Search index path, relative to the output root
//! excerpt_length = 500           # Character cap for search excerpts
//!
//! [feed]
//! file = "feed.xml"              # RSS feed path, relative to the output root
//!
//! [highlight]
//! theme = "InspiredGitHub"       # Syntect theme for code blocks
//! stylesheet = "pygments.css"    # Emitted stylesheet, relative to the output root
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Channel metadata for the RSS feed.
    pub site: SiteInfo,
    /// Static asset staging settings.
    pub assets: AssetsConfig,
    /// Page template resolution settings.
    pub templates: TemplatesConfig,
    /// Search index settings.
    pub search: SearchConfig,
    /// RSS feed output settings.
    pub feed: FeedConfig,
    /// Code highlighting settings.
    pub highlight: HighlightConfig,
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search.excerpt_length == 0 {
            return Err(ConfigError::Validation(
                "search.excerpt_length must be greater than zero".into(),
            ));
        }
        if self.assets.dir.is_empty() {
            return Err(ConfigError::Validation("assets.dir must not be empty".into()));
        }
        if self.templates.page.is_empty() {
            return Err(ConfigError::Validation(
                "templates.page must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Channel metadata for the RSS feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteInfo {
    /// Site/feed title, also shown by the default page template.
    pub title: String,
    /// Feed channel link.
    pub link: String,
    /// Feed channel description.
    pub description: String,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            title: "Markdown Site Feed".to_string(),
            link: "/".to_string(),
            description: "Site updates".to_string(),
        }
    }
}

/// Static asset staging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AssetsConfig {
    /// Assets directory name, relative to the docs root. The same name is
    /// used for the mirrored directory under the output root.
    pub dir: String,
    /// When true, copied `.css` and `.js` files are minified in place.
    pub minify: bool,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            dir: "assets".to_string(),
            minify: false,
        }
    }
}

/// Page template resolution settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TemplatesConfig {
    /// Template search directory, relative to the docs root.
    pub dir: String,
    /// Template name resolved inside the search directory. Falls back to
    /// the built-in page template when the file does not exist.
    pub page: String,
}

impl Default for TemplatesConfig {
    fn default() -> Self {
        Self {
            dir: "templates".to_string(),
            page: "base.html".to_string(),
        }
    }
}

/// Search index settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    /// Index filename, relative to the output root.
    pub file: String,
    /// Maximum excerpt length in characters.
    pub excerpt_length: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            file: "search_index.json".to_string(),
            excerpt_length: 500,
        }
    }
}

/// RSS feed output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FeedConfig {
    /// Feed filename, relative to the output root.
    pub file: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            file: "feed.xml".to_string(),
        }
    }
}

/// Code highlighting settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HighlightConfig {
    /// Syntect theme name used to render the highlight stylesheet.
    pub theme: String,
    /// Stylesheet filename, relative to the output root.
    pub stylesheet: String,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            theme: "InspiredGitHub".to_string(),
            stylesheet: "pygments.css".to_string(),
        }
    }
}

// =============================================================================
// Config loading and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the canonical representation of all default values, used as the
/// base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Load config from `config.toml` in the docs root.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let merged = match load_raw_config(root)? {
        Some(overlay) => merge_toml(base, overlay),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# mdsite Configuration
# ====================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Site / feed metadata
# ---------------------------------------------------------------------------
[site]
# Site title, used as the RSS channel title and by the default page template.
title = "Markdown Site Feed"

# RSS channel link.
link = "/"

# RSS channel description.
description = "Site updates"

# ---------------------------------------------------------------------------
# Static assets
# ---------------------------------------------------------------------------
[assets]
# Assets directory, relative to the docs root. Copied verbatim to the same
# name under the output root. Missing directory is fine - nothing is staged.
dir = "assets"

# Minify copied .css and .js files in place. Malformed files abort the build.
minify = false

# ---------------------------------------------------------------------------
# Page template
# ---------------------------------------------------------------------------
[templates]
# Template search directory, relative to the docs root.
dir = "templates"

# Page template name. When <docs root>/<dir>/<page> does not exist, a
# built-in template is used instead. Templates receive `title`, `content`
# (pre-rendered HTML) and `breadcrumbs` (list of path segments).
page = "base.html"

# ---------------------------------------------------------------------------
# Search index
# ---------------------------------------------------------------------------
[search]
# Index filename, relative to the output root.
file = "search_index.json"

# Maximum search excerpt length in characters.
excerpt_length = 500

# ---------------------------------------------------------------------------
# RSS feed
# ---------------------------------------------------------------------------
[feed]
# Feed filename, relative to the output root.
file = "feed.xml"

# ---------------------------------------------------------------------------
# Code highlighting
# ---------------------------------------------------------------------------
[highlight]
# Syntect theme used for fenced code blocks. Available themes include
# "InspiredGitHub", "Solarized (dark)", "Solarized (light)",
# "base16-ocean.dark" and "base16-ocean.light".
theme = "InspiredGitHub"

# Highlight stylesheet filename, relative to the output root.
stylesheet = "pygments.css"
"##
}
