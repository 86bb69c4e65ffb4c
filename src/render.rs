//! Page rendering through the shared template.
//!
//! One template wraps every converted fragment into a complete HTML
//! document. Rendering uses [minijinja](https://docs.rs/minijinja): when
//! `<docs root>/templates/base.html` exists it is loaded from disk, so
//! sites can bring their own markup; otherwise a built-in template is used.
//!
//! Templates receive three named inputs: `title`, `content` (pre-rendered
//! HTML, interpolate with `| safe`) and `breadcrumbs` (the output-relative
//! URL split into path segments), plus `site_title` and `stylesheet` for
//! the document head. Undefined variables are a hard error rather than
//! silently rendering empty, and `.html` templates auto-escape
//! interpolated values.

use minijinja::{context, path_loader, Environment, UndefinedBehavior};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),
}

/// Named inputs handed to the page template.
#[derive(Debug)]
pub struct PageContext<'a> {
    /// Display title of the page.
    pub title: &'a str,
    /// Converted HTML fragment.
    pub content: &'a str,
    /// Path segments of the output-relative URL, root to leaf.
    pub breadcrumbs: &'a [String],
    /// Site title from config.
    pub site_title: &'a str,
    /// Highlight stylesheet filename at the output root.
    pub stylesheet: &'a str,
}

/// Template engine wrapping a minijinja environment.
pub struct TemplateEngine {
    env: Environment<'static>,
    template_name: String,
}

impl TemplateEngine {
    /// Create an engine resolving `template_name` in `templates_dir`.
    ///
    /// Falls back to the built-in template when the file does not exist.
    pub fn new(templates_dir: &Path, template_name: &str) -> Result<Self, RenderError> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);

        if templates_dir.join(template_name).is_file() {
            env.set_loader(path_loader(templates_dir));
        } else {
            env.add_template_owned(template_name.to_string(), DEFAULT_TEMPLATE.to_string())?;
        }

        Ok(Self {
            env,
            template_name: template_name.to_string(),
        })
    }

    /// Render one complete page document.
    pub fn render_page(&self, page: &PageContext) -> Result<String, RenderError> {
        let tmpl = self.env.get_template(&self.template_name)?;
        let html = tmpl.render(context! {
            title => page.title,
            content => page.content,
            breadcrumbs => page.breadcrumbs,
            site_title => page.site_title,
            stylesheet => page.stylesheet,
        })?;
        Ok(html)
    }
}

const DEFAULT_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{ title }} - {{ site_title }}</title>
  <link rel="stylesheet" href="/{{ stylesheet }}">
</head>
<body>
  <header class="site-header">
    <nav class="breadcrumbs">
      <a href="/">{{ site_title }}</a>
      {%- for crumb in breadcrumbs %}
      <span class="separator">/</span><span class="crumb">{{ crumb }}</span>
      {%- endfor %}
    </nav>
  </header>
  <main class="content">
{{ content | safe }}
  </main>
</body>
</html>
"##;

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn page<'a>(breadcrumbs: &'a [String]) -> PageContext<'a> {
        PageContext {
            title: "Intro",
            content: "<h1>Hello</h1>\n<p>World</p>",
            breadcrumbs,
            site_title: "Docs",
            stylesheet: "pygments.css",
        }
    }

    #[test]
    fn builtin_template_wraps_content() {
        let tmp = TempDir::new().unwrap();
        let engine = TemplateEngine::new(tmp.path(), "base.html").unwrap();
        let crumbs = vec!["intro.html".to_string()];

        let html = engine.render_page(&page(&crumbs)).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Intro - Docs</title>"));
        // Content is pre-rendered HTML and must not be escaped
        assert!(html.contains("<h1>Hello</h1>"));
        assert!(html.contains("pygments.css"));
    }

    #[test]
    fn breadcrumbs_rendered_in_order() {
        let tmp = TempDir::new().unwrap();
        let engine = TemplateEngine::new(tmp.path(), "base.html").unwrap();
        let crumbs = vec!["guide".to_string(), "setup.html".to_string()];

        let html = engine.render_page(&page(&crumbs)).unwrap();

        let guide = html.find("guide").unwrap();
        let setup = html.find("setup.html").unwrap();
        assert!(guide < setup);
    }

    #[test]
    fn title_is_escaped() {
        let tmp = TempDir::new().unwrap();
        let engine = TemplateEngine::new(tmp.path(), "base.html").unwrap();
        let crumbs = vec![];
        let context = PageContext {
            title: "<script>alert(1)</script>",
            ..page(&crumbs)
        };

        let html = engine.render_page(&context).unwrap();

        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn template_file_overrides_builtin() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("base.html"), "CUSTOM: {{ title }}").unwrap();
        let engine = TemplateEngine::new(tmp.path(), "base.html").unwrap();
        let crumbs = vec![];

        let html = engine.render_page(&page(&crumbs)).unwrap();
        assert_eq!(html, "CUSTOM: Intro");
    }

    #[test]
    fn undefined_variable_is_fatal() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("base.html"), "{{ not_a_thing }}").unwrap();
        let engine = TemplateEngine::new(tmp.path(), "base.html").unwrap();
        let crumbs = vec![];

        assert!(engine.render_page(&page(&crumbs)).is_err());
    }
}
