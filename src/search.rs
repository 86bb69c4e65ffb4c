//! Search index serialization.
//!
//! Writes the accumulated page summaries as one pretty-printed JSON array
//! of `{title, url, content}` objects, in discovery order. serde_json
//! leaves non-ASCII characters unescaped, so index entries stay readable
//! for any client-side search consuming the file.

use crate::types::PageSummary;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Serialize the summary list to `path`, overwriting any existing file.
pub fn write_index(summaries: &[PageSummary], path: &Path) -> Result<(), SearchError> {
    let json = serde_json::to_string_pretty(summaries)?;
    fs::write(path, json)?;
    Ok(())
}
