//! Code example rewriting.
//!
//! Each `[[code_example]]` block is replaced by two siblings:
//!
//! ```text
//! <div class="ez-code-example">RAW_CODE</div>
//! PLACEHOLDER
//! ```
//!
//! The raw code is left unescaped so the page renders it as a live preview. The
//! placeholder resolves to the highlighted or escaped listing once markdown
//! rendering is done.

use crate::escape::escape_html;
use crate::fence::{find_blocks, ExampleBlock};
use crate::highlight::{HighlightError, Highlighting};
use crate::stash::HtmlStash;

/// Opening tag of the live preview container.
pub const PREVIEW_OPEN: &str = r#"<div class="ez-code-example">"#;

/// Closing tag of the live preview container.
pub const PREVIEW_CLOSE: &str = "</div>";

/// Errors that can occur while rewriting a document.
#[derive(Debug, thiserror::Error)]
pub enum RewriteError {
    #[error("Failed to highlight code example at byte {offset}: {source}")]
    Highlight {
        offset: usize,
        #[source]
        source: HighlightError,
    },
}

/// Rewrite every code example block in `text`.
///
/// Listings are stored in `stash` as safe HTML. Text outside the blocks, including
/// unterminated or malformed markers, is copied through unchanged.
pub fn rewrite(
    text: &str,
    stash: &mut dyn HtmlStash,
    highlighting: Option<Highlighting<'_>>,
) -> Result<String, RewriteError> {
    let mut output = String::with_capacity(text.len());
    let mut cursor = 0;
    let mut count = 0;

    for block in find_blocks(text) {
        let listing = render_listing(&block, highlighting)?;
        let placeholder = stash.store(listing, true);

        tracing::debug!(
            "Rewrote code example at byte {} (lang: {})",
            block.start,
            block.lang.unwrap_or("none")
        );

        output.push_str(&text[cursor..block.start]);
        output.push('\n');
        output.push_str(PREVIEW_OPEN);
        output.push_str(block.code);
        output.push_str(PREVIEW_CLOSE);
        output.push_str(" \n");
        output.push_str(&placeholder);
        output.push('\n');

        cursor = block.end;
        count += 1;
    }

    output.push_str(&text[cursor..]);

    if count > 0 {
        tracing::debug!("Rewrote {} code examples", count);
    }

    Ok(output)
}

/// Line-oriented form of [`rewrite`]: lines are joined with `\n` and split again.
pub fn rewrite_lines(
    lines: &[String],
    stash: &mut dyn HtmlStash,
    highlighting: Option<Highlighting<'_>>,
) -> Result<Vec<String>, RewriteError> {
    let text = lines.join("\n");
    let rewritten = rewrite(&text, stash, highlighting)?;

    Ok(rewritten.split('\n').map(str::to_string).collect())
}

/// Build the source listing for a block.
fn render_listing(
    block: &ExampleBlock<'_>,
    highlighting: Option<Highlighting<'_>>,
) -> Result<String, RewriteError> {
    match highlighting {
        Some(highlighting) => highlighting
            .highlight(block.code, block.lang)
            .map_err(|source| RewriteError::Highlight {
                offset: block.start,
                source,
            }),
        None => Ok(wrap_code(block.lang, block.code)),
    }
}

/// Escaped `<pre><code>` listing used when no highlighter is configured.
fn wrap_code(lang: Option<&str>, code: &str) -> String {
    let class = lang
        .map(|lang| format!(r#" class="{lang}""#))
        .unwrap_or_default();

    format!("<pre><code{class}>{}</code></pre>", escape_html(code))
}
