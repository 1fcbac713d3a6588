//! Placeholder store for HTML that must survive markdown rendering untouched.

use crate::escape::escape_html;

/// Store that swaps HTML fragments for opaque placeholder tokens.
pub trait HtmlStash {
    /// Store a fragment and return the token that stands in for it.
    ///
    /// `safe` fragments are restored as-is; others are escaped on restore.
    fn store(&mut self, html: String, safe: bool) -> String;
}

/// A fragment held by a [`Stash`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StashedHtml {
    pub html: String,
    pub safe: bool,
}

/// In-memory [`HtmlStash`] with index-based tokens.
#[derive(Debug, Default)]
pub struct Stash {
    items: Vec<StashedHtml>,
}

impl Stash {
    /// Create an empty stash.
    pub fn new() -> Self {
        Self::default()
    }

    /// Token for the fragment at `index`.
    pub fn placeholder(index: usize) -> String {
        format!("\u{2}ezcode-stash:{index}\u{3}")
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&StashedHtml> {
        self.items.get(index)
    }

    /// Replace every placeholder in rendered `html` with its fragment.
    ///
    /// A placeholder that the renderer wrapped in its own paragraph is replaced
    /// together with the `<p>` tags.
    pub fn restore(&self, html: &str) -> String {
        let mut output = html.to_string();

        for (index, item) in self.items.iter().enumerate() {
            let placeholder = Self::placeholder(index);
            if !output.contains(&placeholder) {
                tracing::warn!("Stash placeholder {} missing from rendered output", index);
                continue;
            }

            let fragment = if item.safe {
                item.html.clone()
            } else {
                escape_html(&item.html)
            };

            output = output
                .replace(&format!("<p>{placeholder}</p>"), &fragment)
                .replace(&placeholder, &fragment);
        }

        output
    }
}

impl HtmlStash for Stash {
    fn store(&mut self, html: String, safe: bool) -> String {
        let placeholder = Self::placeholder(self.items.len());
        self.items.push(StashedHtml { html, safe });
        placeholder
    }
}
