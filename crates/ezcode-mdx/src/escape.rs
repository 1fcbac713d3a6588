//! HTML escaping for code listings.

/// Escape text for use inside an HTML element or a double-quoted attribute.
///
/// `&` is replaced first so entities already present in the source come out
/// as literal text (`&amp;` becomes `&amp;amp;`).
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&lt;/a&gt;"
        );
    }

    #[test]
    fn escapes_existing_entities_again() {
        assert_eq!(escape_html("&amp;"), "&amp;amp;");
        assert_eq!(escape_html("&lt;b&gt;"), "&amp;lt;b&amp;gt;");
    }

    #[test]
    fn leaves_single_quotes_and_plain_text() {
        assert_eq!(escape_html("it's plain\n"), "it's plain\n");
        assert_eq!(escape_html(""), "");
    }
}
