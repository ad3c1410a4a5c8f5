//! Markdown rendering with syntax highlighting

use anyhow::{anyhow, Result};
use pulldown_cmark::{html, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

use crate::helpers::html_escape;

/// Stands in for raw HTML found in post markdown
const RAW_HTML_OMITTED: &str = "<!-- raw HTML omitted -->";

/// Markdown renderer with syntax highlighting for fenced code blocks
pub struct MarkdownRenderer {
    syntax_set: SyntaxSet,
    theme: Theme,
}

impl MarkdownRenderer {
    /// Create a renderer highlighting with the named syntect theme
    pub fn new(theme_name: &str) -> Result<Self> {
        let mut theme_set = ThemeSet::load_defaults();
        let theme = theme_set
            .themes
            .remove(theme_name)
            .ok_or_else(|| anyhow!("Unknown highlight theme: {}", theme_name))?;

        Ok(Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme,
        })
    }

    /// Render markdown to an HTML fragment
    pub fn render(&self, markdown: &str) -> Result<String> {
        // Frontmatter is stripped before rendering, so no metadata block option
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_HEADING_ATTRIBUTES;
        let parser = Parser::new_ext(markdown, options);

        let mut events: Vec<Event> = Vec::new();
        // (lang, source) while inside a fenced block that names a language
        let mut code_block: Option<(String, String)> = None;

        for event in parser {
            if let Some((lang, code)) = code_block.as_mut() {
                match event {
                    Event::Text(text) => code.push_str(&text),
                    Event::End(TagEnd::CodeBlock) => {
                        let highlighted = self.highlight_code(code, lang);
                        events.push(Event::Html(CowStr::from(highlighted)));
                        code_block = None;
                    }
                    _ => {}
                }
                continue;
            }

            match event {
                Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(lang))) if !lang.is_empty() => {
                    code_block = Some((lang.to_string(), String::new()));
                }
                Event::Start(Tag::HtmlBlock) => {
                    events.push(Event::Html(CowStr::from(format!("{}\n", RAW_HTML_OMITTED))));
                }
                Event::InlineHtml(_) => {
                    events.push(Event::InlineHtml(CowStr::Borrowed(RAW_HTML_OMITTED)));
                }
                // Lines of a raw HTML block, already replaced above
                Event::Html(_) | Event::End(TagEnd::HtmlBlock) => {}
                event => events.push(event),
            }
        }

        let mut html_output = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut html_output, events.into_iter());

        Ok(html_output)
    }

    /// Highlight a code block, falling back to an escaped plain block
    fn highlight_code(&self, code: &str, lang: &str) -> String {
        let syntax = self
            .syntax_set
            .find_syntax_by_token(lang)
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        match highlighted_html_for_string(code, &self.syntax_set, syntax, &self.theme) {
            Ok(highlighted) => format!(
                r#"<figure class="highlight {}">{}</figure>"#,
                html_escape(lang),
                highlighted
            ),
            Err(e) => {
                tracing::debug!("Falling back to plain code block for {}: {}", lang, e);
                format!(
                    r#"<pre><code class="language-{}">{}</code></pre>"#,
                    html_escape(lang),
                    html_escape(code)
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn renderer() -> MarkdownRenderer {
        MarkdownRenderer::new("base16-ocean.dark").unwrap()
    }

    #[test]
    fn test_render_basic_markdown() {
        let html = renderer().render("# Hello World\n\nThis is a test.").unwrap();
        assert!(html.contains("<h1>Hello World</h1>"));
        assert!(html.contains("<p>This is a test.</p>"));
    }

    #[test]
    fn test_render_code_block() {
        let html = renderer().render("```rust\nfn main() {}\n```").unwrap();
        assert!(html.contains(r#"<figure class="highlight rust">"#));
        assert!(html.contains("main"));
    }

    #[test]
    fn test_plain_code_block_is_escaped() {
        let html = renderer().render("```\n<b>bold</b>\n```").unwrap();
        assert!(html.contains("&lt;b&gt;bold&lt;/b&gt;"));
        assert!(!html.contains("highlight"));
    }

    #[test]
    fn test_render_table() {
        let html = renderer().render("| a | b |\n|---|---|\n| 1 | 2 |").unwrap();
        assert!(html.contains("<table>"));
    }

    #[test]
    fn test_raw_html_block_is_omitted() {
        let html = renderer()
            .render("Hello\n\n<script>alert(1)</script>\n\nBye")
            .unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("<!-- raw HTML omitted -->"));
        assert!(html.contains("<p>Hello</p>"));
        assert!(html.contains("<p>Bye</p>"));
    }

    #[test]
    fn test_inline_html_is_omitted() {
        let html = renderer()
            .render("Click <a href=\"javascript:alert(1)\">here</a> now")
            .unwrap();
        assert!(!html.contains("<a "));
        assert!(!html.contains("</a>"));
        assert!(html.contains("here"));
        assert!(html.contains("<!-- raw HTML omitted -->"));
    }

    #[test]
    fn test_unknown_theme() {
        assert!(MarkdownRenderer::new("no-such-theme").is_err());
    }
}
