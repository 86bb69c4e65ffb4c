//! # mdsite
//!
//! A minimal static site generator for Markdown documentation trees.
//! Your filesystem is the data source: a directory tree of `.md` files is
//! mirrored into a deployable tree of `.html` pages, with a search index
//! and an RSS feed emitted alongside.
//!
//! # Architecture: One-Pass Batch Pipeline
//!
//! A build is a strictly sequential pipeline over the docs root:
//!
//! ```text
//! 1. Wipe      dist/ removed and recreated
//! 2. Assets    docs/assets/ → dist/assets/   (optionally minified)
//! 3. Pages     docs/**/*.md → dist/**/*.html (template-wrapped)
//! 4. Theme     dist/pygments.css             (highlight stylesheet)
//! 5. Index     dist/search_index.json        (page summaries as JSON)
//! 6. Feed      dist/feed.xml                 (RSS 2.0, title + link)
//! ```
//!
//! Nothing runs concurrently, nothing is cached between runs, and no step
//! is retried: the first unhandled failure aborts the build. That keeps
//! the model trivial to reason about - the output directory is always
//! either complete or about to be rebuilt from scratch.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`build`] | Orchestrates the pipeline steps in order |
//! | [`assets`] | Copies the static assets tree, minifies `.css`/`.js` in minify mode |
//! | [`walk`] | Discovers Markdown sources and drives per-page conversion and rendering |
//! | [`markdown`] | Markdown → HTML fragments with syntax-highlighted code blocks |
//! | [`render`] | Wraps fragments into full documents via the shared minijinja template |
//! | [`theme`] | Emits the stylesheet matching the highlighter's CSS classes |
//! | [`search`] | Serializes page summaries to the JSON search index |
//! | [`feed`] | Serializes page summaries to the RSS feed |
//! | [`config`] | `config.toml` loading, validation, stock defaults |
//! | [`types`] | The [`PageSummary`](types::PageSummary) record shared by index and feed |
//! | [`output`] | CLI output formatting for build and check |
//!
//! # Design Decisions
//!
//! ## Class-Based Highlighting
//!
//! Fenced code blocks are rendered as class-annotated spans (syntect,
//! spaced class style) with the colors in a single generated stylesheet,
//! rather than inlining style attributes into every block. Pages stay
//! small and the whole site re-themes by regenerating one CSS file.
//!
//! ## Templates Are Optional Files
//!
//! Rendering goes through minijinja. A site that ships
//! `templates/base.html` gets full control over page markup; a site that
//! ships nothing gets the built-in template. Either way the template sees
//! the same three inputs: `title`, `content`, `breadcrumbs`.
//!
//! ## Summaries Flow By Value
//!
//! The walker returns the per-page summary list; the index and feed
//! writers take it as a parameter. No shared mutable accumulator, no
//! ordering surprises - the list is born in lexical discovery order and
//! stays that way.

pub mod assets;
pub mod build;
pub mod config;
pub mod feed;
pub mod markdown;
pub mod output;
pub mod render;
pub mod search;
pub mod theme;
pub mod types;
pub mod walk;
