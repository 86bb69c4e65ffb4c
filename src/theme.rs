//! Highlight stylesheet emission.
//!
//! Writes the single static stylesheet that styles the classes produced by
//! the code-block renderer in [`markdown`](crate::markdown). The stylesheet
//! depends only on the configured theme, never on page content, so it is
//! identical across builds until the theme changes.

use crate::config::HighlightConfig;
use crate::markdown::HIGHLIGHT_CLASS_STYLE;
use std::fs;
use std::path::Path;
use syntect::highlighting::ThemeSet;
use syntect::html::css_for_theme_with_class_style;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Unknown highlight theme: {0}")]
    UnknownTheme(String),
    #[error("Stylesheet generation failed: {0}")]
    Css(#[from] syntect::Error),
}

/// Write the highlight stylesheet into the output root.
pub fn emit(output_root: &Path, config: &HighlightConfig) -> Result<(), ThemeError> {
    let css = stylesheet(config)?;
    fs::write(output_root.join(&config.stylesheet), css)?;
    Ok(())
}

/// Render the configured theme as class-based CSS.
///
/// The class style must match the one the code-block renderer emits.
pub fn stylesheet(config: &HighlightConfig) -> Result<String, ThemeError> {
    let themes = ThemeSet::load_defaults();
    let theme = themes
        .themes
        .get(&config.theme)
        .ok_or_else(|| ThemeError::UnknownTheme(config.theme.clone()))?;
    Ok(css_for_theme_with_class_style(theme, HIGHLIGHT_CLASS_STYLE)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_theme_produces_css() {
        let css = stylesheet(&HighlightConfig::default()).unwrap();
        assert!(css.contains('{'));
        assert!(!css.is_empty());
    }

    #[test]
    fn unknown_theme_is_an_error() {
        let config = HighlightConfig {
            theme: "no-such-theme".to_string(),
            ..HighlightConfig::default()
        };
        assert!(matches!(
            stylesheet(&config),
            Err(ThemeError::UnknownTheme(_))
        ));
    }

    #[test]
    fn emit_writes_configured_filename() {
        let tmp = TempDir::new().unwrap();
        emit(tmp.path(), &HighlightConfig::default()).unwrap();
        assert!(tmp.path().join("pygments.css").is_file());
    }

    #[test]
    fn stylesheet_is_deterministic() {
        let config = HighlightConfig::default();
        assert_eq!(stylesheet(&config).unwrap(), stylesheet(&config).unwrap());
    }
}
