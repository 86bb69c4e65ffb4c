//! Static asset staging.
//!
//! Copies the assets directory into the output tree verbatim. In minify
//! mode the copied tree is walked a second time and every `.css`/`.js`
//! file is rewritten in place with a minified version - CSS through
//! lightningcss, JS through minify-js. Both are real parsers, so malformed
//! input aborts the build rather than shipping broken assets; there is no
//! fallback to the unminified copy.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("CSS minify error in {}: {message}", path.display())]
    CssMinify { path: PathBuf, message: String },
    #[error("JS minify error in {}: {message}", path.display())]
    JsMinify { path: PathBuf, message: String },
}

/// Stage the assets directory into the output tree.
///
/// A missing `assets_root` is a no-op, not an error. Returns the number of
/// files copied.
pub fn stage(assets_root: &Path, dest: &Path, minify: bool) -> Result<usize, AssetError> {
    if !assets_root.exists() {
        return Ok(0);
    }

    fs::create_dir_all(dest)?;
    let copied = copy_dir_recursive(assets_root, dest)?;

    if minify {
        minify_tree(dest)?;
    }

    Ok(copied)
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<usize> {
    let mut copied = 0;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            fs::create_dir_all(&dst_path)?;
            copied += copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            fs::copy(&src_path, &dst_path)?;
            copied += 1;
        }
    }
    Ok(copied)
}

/// Rewrite every `.css` and `.js` file under `root` with its minified form.
fn minify_tree(root: &Path) -> Result<(), AssetError> {
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "css" => {
                let content = fs::read_to_string(path)?;
                let minified = minify_css(&content).map_err(|message| AssetError::CssMinify {
                    path: path.to_path_buf(),
                    message,
                })?;
                fs::write(path, minified)?;
            }
            "js" => {
                let content = fs::read_to_string(path)?;
                let minified = minify_js(&content).map_err(|message| AssetError::JsMinify {
                    path: path.to_path_buf(),
                    message,
                })?;
                fs::write(path, minified)?;
            }
            _ => {}
        }
    }
    Ok(())
}

/// Minify CSS using lightningcss.
pub fn minify_css(css: &str) -> Result<String, String> {
    use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

    let stylesheet = StyleSheet::parse(css, ParserOptions::default())
        .map_err(|e| format!("CSS parse error: {}", e))?;

    let minified = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..Default::default()
        })
        .map_err(|e| format!("CSS minify error: {}", e))?;

    Ok(minified.code)
}

/// Minify JavaScript using minify-js.
pub fn minify_js(js: &str) -> Result<String, String> {
    use minify_js::{minify, Session, TopLevelMode};

    let session = Session::new();
    let mut output = Vec::new();
    minify(&session, TopLevelMode::Global, js.as_bytes(), &mut output)
        .map_err(|e| format!("JS parse error: {:?}", e))?;

    String::from_utf8(output).map_err(|e| format!("JS minify produced invalid UTF-8: {}", e))
}
