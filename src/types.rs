//! Shared types passed between pipeline steps.
//!
//! The summary list produced by the site walker is consumed by both the
//! search index writer and the feed writer, so its shape lives here.

use serde::{Deserialize, Serialize};

/// Per-document record feeding the search index and the RSS feed.
///
/// Created once per discovered Markdown file, in discovery order, and never
/// mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageSummary {
    /// Display title derived from the filename (underscores → spaces,
    /// each word capitalized).
    pub title: String,
    /// Output-relative URL, forward slashes, `.md` swapped for `.html`.
    pub url: String,
    /// Excerpt of the rendered HTML fragment, capped at the configured
    /// character length. Plain character truncation — may cut mid-tag.
    pub content: String,
}
