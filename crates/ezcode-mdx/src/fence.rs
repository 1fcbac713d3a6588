//! Code example block detection.
//!
//! A code example is written as:
//!
//! ```text
//! [[code_example]] {html}
//! <button>Click me</button>
//! [code_example]]
//! ```
//!
//! The language annotation is optional and may be bare (`html`), braced
//! (`{html}`) or dotted (`{.html}`).

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Pattern for a whole example block, from the start marker line through the end marker.
///
/// The body is lazy so the first end marker after a start marker closes it.
static FENCED_BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?ms)^\[\[code_example\]\][ ]*(?:\{?\.?(?P<lang>[a-zA-Z0-9_+-]*)\}?)?[ ]*\n(?P<code>(?:.*?\n)??)\[code_example\]\][ ]*$",
    )
    .expect("Invalid code example regex")
});

/// A code example block found in a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExampleBlock<'a> {
    /// Language annotation, if one was written
    pub lang: Option<&'a str>,

    /// Body text between the markers, including its trailing newline
    pub code: &'a str,

    /// Byte offset of the start marker
    pub start: usize,

    /// Byte offset just past the end marker (and any trailing spaces)
    pub end: usize,
}

impl<'a> ExampleBlock<'a> {
    fn from_captures(caps: &Captures<'a>) -> Option<Self> {
        let whole = caps.get(0)?;
        let lang = caps
            .name("lang")
            .map(|m| m.as_str())
            .filter(|lang| !lang.is_empty());
        let code = caps.name("code").map(|m| m.as_str()).unwrap_or("");

        Some(Self {
            lang,
            code,
            start: whole.start(),
            end: whole.end(),
        })
    }
}

/// Find the first code example block in `text`.
pub fn find_block(text: &str) -> Option<ExampleBlock<'_>> {
    let caps = FENCED_BLOCK_RE.captures(text)?;
    ExampleBlock::from_captures(&caps)
}

/// Iterate over all code example blocks in `text`, in document order.
///
/// Matches never overlap. An unterminated start marker swallows everything up to
/// the next end marker, including any start markers in between.
pub fn find_blocks(text: &str) -> impl Iterator<Item = ExampleBlock<'_>> {
    FENCED_BLOCK_RE
        .captures_iter(text)
        .filter_map(|caps| ExampleBlock::from_captures(&caps))
}
