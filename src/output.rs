//! CLI output formatting.
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure - no I/O, no side effects.
//!
//! Pages are shown information-first: positional index and title, with the
//! output-relative URL as the trailing context.
//!
//! ```text
//! Pages
//! 001 Intro → intro.html
//! 002 Setup → guide/setup.html
//!
//! Assets
//! 3 files staged
//!
//! Artifacts
//! pygments.css
//! search_index.json
//! feed.xml
//! ```

use crate::build::BuildReport;
use crate::walk::SourceDoc;

/// Header line for one page entity: `NNN Title → url`.
fn page_line(index: usize, title: &str, url: &str) -> String {
    format!("{:03} {} → {}", index + 1, title, url)
}

/// Format the build report.
pub fn format_build_output(report: &BuildReport) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Pages".to_string());
    for (idx, summary) in report.summaries.iter().enumerate() {
        lines.push(page_line(idx, &summary.title, &summary.url));
    }

    lines.push(String::new());
    lines.push("Assets".to_string());
    lines.push(match report.assets_copied {
        0 => "none staged".to_string(),
        1 => "1 file staged".to_string(),
        n => format!("{} files staged", n),
    });

    lines.push(String::new());
    lines.push("Artifacts".to_string());
    for artifact in &report.artifacts {
        lines.push(artifact.clone());
    }

    lines
}

/// Format the check listing: discovered documents, no build.
pub fn format_check_output(docs: &[SourceDoc]) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push("Documents".to_string());
    for (idx, doc) in docs.iter().enumerate() {
        lines.push(page_line(idx, &doc.title, &doc.url));
    }
    lines.push(String::new());
    lines.push(format!("{} markdown file(s) discovered", docs.len()));
    lines
}

pub fn print_build_output(report: &BuildReport) {
    for line in format_build_output(report) {
        println!("{}", line);
    }
}

pub fn print_check_output(docs: &[SourceDoc]) {
    for line in format_check_output(docs) {
        println!("{}", line);
    }
}
