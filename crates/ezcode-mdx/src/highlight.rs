//! Syntax highlighter contract and its configuration.

use serde::Deserialize;

/// Options forwarded to the highlighter for every code example.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct HighlightConfig {
    /// Emit line numbers
    #[serde(default)]
    pub linenums: bool,

    /// Let the highlighter guess the language when none is given
    #[serde(default = "default_true")]
    pub guess_lang: bool,

    /// CSS class of the highlighter's wrapping element
    #[serde(default = "default_css_class")]
    pub css_class: String,

    /// Style theme name
    #[serde(default = "default_style")]
    pub pygments_style: String,

    /// Use inline styles instead of CSS classes
    #[serde(default)]
    pub noclasses: bool,
}

fn default_true() -> bool {
    true
}

fn default_css_class() -> String {
    "codehilite".to_string()
}

fn default_style() -> String {
    "default".to_string()
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            linenums: false,
            guess_lang: true,
            css_class: default_css_class(),
            pygments_style: default_style(),
            noclasses: false,
        }
    }
}

/// A single highlight call.
#[derive(Debug, Clone, Copy)]
pub struct HighlightRequest<'a> {
    /// Raw code text, trailing newline included
    pub code: &'a str,

    /// Language annotation from the block, `None` if unset
    pub lang: Option<&'a str>,

    /// Configured options
    pub config: &'a HighlightConfig,
}

/// Errors a highlighter may report.
#[derive(Debug, thiserror::Error)]
pub enum HighlightError {
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("Highlight failed: {0}")]
    Failed(String),
}

/// Trait for syntax highlighters.
pub trait Highlighter: Send + Sync {
    /// Render code as a complete HTML fragment, including its own wrapping element.
    ///
    /// The returned fragment is stored verbatim; it is not escaped again.
    fn highlight(&self, request: &HighlightRequest<'_>) -> Result<String, HighlightError>;
}

/// An active highlighter together with the options to call it with.
///
/// Passing `None` where a `Highlighting` is expected selects the built-in
/// escaped `<pre><code>` listing.
#[derive(Clone, Copy)]
pub struct Highlighting<'a> {
    pub highlighter: &'a dyn Highlighter,
    pub config: &'a HighlightConfig,
}

impl<'a> Highlighting<'a> {
    pub fn new(highlighter: &'a dyn Highlighter, config: &'a HighlightConfig) -> Self {
        Self {
            highlighter,
            config,
        }
    }

    /// Highlight `code` with the configured options.
    pub fn highlight(&self, code: &str, lang: Option<&str>) -> Result<String, HighlightError> {
        self.highlighter.highlight(&HighlightRequest {
            code,
            lang,
            config: self.config,
        })
    }
}

impl std::fmt::Debug for Highlighting<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Highlighting")
            .field("config", self.config)
            .finish_non_exhaustive()
    }
}
