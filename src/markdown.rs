//! Markdown to HTML conversion.
//!
//! Converts one document body into an HTML fragment using
//! [pulldown-cmark](https://docs.rs/pulldown-cmark). Fenced code blocks are
//! intercepted from the event stream and re-emitted as class-annotated HTML
//! via syntect, so the emitted classes line up with the stylesheet written
//! by [`theme::emit`](crate::theme::emit).
//!
//! No front-matter parsing happens here: the whole document body becomes
//! the fragment. Markdown has no invalid-document concept, so conversion
//! is infallible; a fenced block the highlighter cannot handle degrades to
//! an escaped `<pre><code>` block instead of failing the build.

use pulldown_cmark::{html, CodeBlockKind, Event, Options, Parser, Tag, TagEnd};
use syntect::html::{ClassedHTMLGenerator, ClassStyle};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

/// Class style shared between the code-block renderer and the theme
/// stylesheet. Both sides must agree or the highlighting CSS has no effect.
pub const HIGHLIGHT_CLASS_STYLE: ClassStyle = ClassStyle::Spaced;

/// Markdown converter with syntax-highlighting-aware code block rendering.
///
/// Holds the loaded syntax set so repeated conversions in one build share
/// the grammar tables.
pub struct MarkdownConverter {
    syntax_set: SyntaxSet,
}

impl Default for MarkdownConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownConverter {
    pub fn new() -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
        }
    }

    /// Convert one document body to an HTML fragment.
    ///
    /// The fragment is not a full document - the page renderer wraps it in
    /// the shared template.
    pub fn convert(&self, source: &str) -> String {
        let parser = Parser::new_ext(source, Options::empty());

        let mut events: Vec<Event> = Vec::new();
        let mut code_lang: Option<String> = None;
        let mut code_buf = String::new();
        let mut in_fenced = false;

        for event in parser {
            match event {
                Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(info))) => {
                    in_fenced = true;
                    code_lang = parse_fence_language(&info);
                    code_buf.clear();
                }
                Event::Text(text) if in_fenced => {
                    code_buf.push_str(&text);
                }
                Event::End(TagEnd::CodeBlock) if in_fenced => {
                    in_fenced = false;
                    let block = self.highlight_block(&code_buf, code_lang.as_deref());
                    events.push(Event::Html(block.into()));
                }
                other => events.push(other),
            }
        }

        let mut fragment = String::new();
        html::push_html(&mut fragment, events.into_iter());
        fragment
    }

    /// Render one fenced code block as class-annotated HTML.
    fn highlight_block(&self, code: &str, lang: Option<&str>) -> String {
        let syntax = lang
            .and_then(|l| self.syntax_set.find_syntax_by_token(l))
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        let mut generator = ClassedHTMLGenerator::new_with_class_style(
            syntax,
            &self.syntax_set,
            HIGHLIGHT_CLASS_STYLE,
        );
        for line in LinesWithEndings::from(code) {
            if generator
                .parse_html_for_line_which_includes_newline(line)
                .is_err()
            {
                return fallback_block(code, lang);
            }
        }

        format!(
            "<pre class=\"highlight\"><code>{}</code></pre>\n",
            generator.finalize()
        )
    }
}

/// Extract the language token from a fence info string.
///
/// Info strings can carry extra flags (`rust,ignore`); only the first token
/// names the language.
fn parse_fence_language(info: &str) -> Option<String> {
    let lang = info
        .split(|c: char| c == ',' || c.is_whitespace())
        .next()
        .unwrap_or("");
    if lang.is_empty() {
        None
    } else {
        Some(lang.to_string())
    }
}

/// Plain escaped block for code the highlighter cannot handle.
fn fallback_block(code: &str, lang: Option<&str>) -> String {
    let lang_class = lang
        .map(|l| format!(" class=\"language-{l}\""))
        .unwrap_or_default();
    format!(
        "<pre><code{lang_class}>{}</code></pre>\n",
        html_escape(code)
    )
}

/// Truncate a rendered fragment to at most `max_chars` characters.
///
/// Character truncation, not tag-aware: the excerpt may cut mid-tag. The
/// search index treats excerpts as preview text, not markup to re-render.
pub fn excerpt(html: &str, max_chars: usize) -> String {
    html.chars().take(max_chars).collect()
}

/// Escape HTML special characters.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
