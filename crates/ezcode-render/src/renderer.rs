//! Markdown document renderer.

use ezcode_mdx::{rewrite, HighlightConfig, Highlighter, Highlighting, RewriteError, Stash};
use pulldown_cmark::{html, Parser};

use crate::config::RenderConfig;

/// A rendered document.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedDoc {
    /// Final HTML with all listings restored
    pub html: String,

    /// Number of code examples rewritten
    pub examples: usize,
}

/// Errors that can occur while rendering a document.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Rewrite error: {0}")]
    Rewrite(#[from] RewriteError),
}

/// Renders markdown documents containing code examples to HTML.
pub struct Renderer {
    config: RenderConfig,
    highlighter: Option<Box<dyn Highlighter>>,
}

impl Renderer {
    /// Create a renderer that emits escaped listings.
    pub fn new(config: RenderConfig) -> Self {
        Self {
            config,
            highlighter: None,
        }
    }

    /// Attach a syntax highlighter for code example listings.
    pub fn with_highlighter(mut self, highlighter: Box<dyn Highlighter>) -> Self {
        self.highlighter = Some(highlighter);
        self
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render one document.
    ///
    /// Each call uses its own stash, so a renderer can be shared between documents.
    pub fn render(&self, source: &str) -> Result<RenderedDoc, RenderError> {
        let default_highlight = HighlightConfig::default();
        let highlighting = match &self.highlighter {
            Some(highlighter) => Some(Highlighting::new(
                highlighter.as_ref(),
                self.config.highlight.as_ref().unwrap_or(&default_highlight),
            )),
            None => {
                if self.config.highlight.is_some() {
                    tracing::warn!("[highlight] is configured but no highlighter is attached");
                }
                None
            }
        };

        let mut stash = Stash::new();
        let content = rewrite(source, &mut stash, highlighting)?;

        let parser = Parser::new_ext(&content, self.config.markdown.options());
        let mut html_output = String::with_capacity(content.len());
        html::push_html(&mut html_output, parser);

        Ok(RenderedDoc {
            html: stash.restore(&html_output),
            examples: stash.len(),
        })
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(RenderConfig::default())
    }
}

impl std::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer")
            .field("config", &self.config)
            .field("highlighter", &self.highlighter.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ezcode_mdx::{escape_html, HighlightError, HighlightRequest};

    /// Wraps code in the configured container without tokenizing it.
    struct Plain;

    impl Highlighter for Plain {
        fn highlight(&self, request: &HighlightRequest<'_>) -> Result<String, HighlightError> {
            Ok(format!(
                r#"<div class="{}" data-lang="{}"><pre>{}</pre></div>"#,
                request.config.css_class,
                request.lang.unwrap_or("text"),
                escape_html(request.code)
            ))
        }
    }

    struct Broken;

    impl Highlighter for Broken {
        fn highlight(&self, _request: &HighlightRequest<'_>) -> Result<String, HighlightError> {
            Err(HighlightError::Failed("lexer crashed".to_string()))
        }
    }

    const BUTTON_DOC: &str = r#"# Buttons

[[code_example]] {html}
<button class="btn">Go</button>
[code_example]]

Done.
"#;

    #[test]
    fn renders_preview_and_escaped_listing() {
        let doc = Renderer::default().render(BUTTON_DOC).unwrap();

        assert_eq!(doc.examples, 1);
        assert!(doc.html.contains("<h1>Buttons</h1>"));
        assert!(doc
            .html
            .contains(r#"<div class="ez-code-example"><button class="btn">Go</button>"#));
        assert!(doc.html.contains(
            "<pre><code class=\"html\">&lt;button class=&quot;btn&quot;&gt;Go&lt;/button&gt;\n</code></pre>"
        ));
        assert!(doc.html.contains("<p>Done.</p>"));
        assert!(!doc.html.contains('\u{2}'));
        assert!(!doc.html.contains("code_example]]"));
    }

    #[test]
    fn renders_plain_markdown_unchanged_by_examples() {
        let doc = Renderer::default().render("Some *text*.\n").unwrap();

        assert_eq!(doc.examples, 0);
        assert_eq!(doc.html, "<p>Some <em>text</em>.</p>\n");
    }

    #[test]
    fn restores_listing_after_blank_lines_in_code() {
        let source = "[[code_example]]\n<p>a</p>\n\n<p>b</p>\n[code_example]]\n";

        let doc = Renderer::default().render(source).unwrap();

        assert_eq!(doc.examples, 1);
        assert!(doc
            .html
            .contains("<pre><code>&lt;p&gt;a&lt;/p&gt;\n\n&lt;p&gt;b&lt;/p&gt;\n</code></pre>"));
        assert!(!doc.html.contains('\u{2}'));
    }

    #[test]
    fn uses_attached_highlighter_with_configured_options() {
        let config = RenderConfig::from_toml_str("[highlight]\ncss_class = \"syntax\"\n").unwrap();
        let renderer = Renderer::new(config).with_highlighter(Box::new(Plain));

        let doc = renderer.render(BUTTON_DOC).unwrap();

        assert!(doc.html.contains(
            r#"<div class="syntax" data-lang="html"><pre>&lt;button class=&quot;btn&quot;&gt;Go&lt;/button&gt;"#
        ));
        assert!(!doc.html.contains("<pre><code"));
    }

    #[test]
    fn highlighter_without_section_uses_default_options() {
        let renderer = Renderer::default().with_highlighter(Box::new(Plain));

        let doc = renderer.render(BUTTON_DOC).unwrap();

        assert!(doc.html.contains(r#"<div class="codehilite" data-lang="html">"#));
    }

    #[test]
    fn highlight_section_without_highlighter_falls_back_to_escaping() {
        let config = RenderConfig::from_toml_str("[highlight]\nlinenums = true\n").unwrap();

        let doc = Renderer::new(config).render(BUTTON_DOC).unwrap();

        assert!(doc.html.contains(r#"<pre><code class="html">"#));
    }

    #[test]
    fn highlighter_failure_aborts_document() {
        let renderer = Renderer::default().with_highlighter(Box::new(Broken));

        let result = renderer.render(BUTTON_DOC);

        assert!(matches!(
            result,
            Err(RenderError::Rewrite(RewriteError::Highlight { .. }))
        ));
    }

    #[test]
    fn renders_each_document_with_fresh_stash() {
        let renderer = Renderer::default();

        let first = renderer.render(BUTTON_DOC).unwrap();
        let second = renderer.render(BUTTON_DOC).unwrap();

        assert_eq!(first, second);
    }
}
