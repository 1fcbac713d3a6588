//! Markdown preprocessor for code example blocks.
//!
//! This crate finds `[[code_example]]` fenced regions in a markdown document and
//! replaces each one with a raw live-preview `<div>` followed by a stash placeholder
//! that later resolves to a highlighted (or escaped) source listing.

pub mod escape;
pub mod fence;
pub mod highlight;
pub mod rewriter;
pub mod stash;

pub use escape::escape_html;
pub use fence::{find_block, find_blocks, ExampleBlock};
pub use highlight::{HighlightConfig, HighlightError, HighlightRequest, Highlighter, Highlighting};
pub use rewriter::{rewrite, rewrite_lines, RewriteError};
pub use stash::{HtmlStash, Stash, StashedHtml};
