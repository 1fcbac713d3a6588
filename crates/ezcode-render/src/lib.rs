//! Markdown to HTML rendering with live code examples.
//!
//! Runs the `ezcode-mdx` rewrite pass, renders the result with pulldown-cmark and
//! resolves the stashed listings back into the final HTML.

pub mod config;
pub mod renderer;

pub use config::{ConfigError, MarkdownConfig, RenderConfig};
pub use renderer::{RenderError, RenderedDoc, Renderer};
