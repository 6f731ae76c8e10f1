//! Turns converter output into the line sequence the strategies work on.

use regex::{Captures, Regex};
use std::sync::LazyLock;

// Tags that end a visual line in converted documents.
static BLOCK_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)</?(?:p|br|div|tr|td|th|li|h[1-6]|table)\b[^>]*>").expect("Invalid block tag regex")
});

static ANY_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("Invalid tag regex"));

static ENTITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&(nbsp|amp|lt|gt);").expect("Invalid entity regex"));

/// Trimmed, non-empty lines of `text`, in order.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split(['\n', '\r'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Decodes `&nbsp;`, `&amp;`, `&lt;` and `&gt;` in a single pass, so `&amp;lt;`
/// becomes `&lt;` and not `<`.
pub fn decode_entities(text: &str) -> String {
    ENTITY
        .replace_all(text, |caps: &Captures| match &caps[1] {
            "nbsp" => " ",
            "amp" => "&",
            "lt" => "<",
            _ => ">",
        })
        .into_owned()
}

/// Plain text of a markup fragment. Block-level tags become line breaks,
/// every other tag is dropped.
pub fn strip_markup(markup: &str) -> String {
    let with_breaks = BLOCK_TAG.replace_all(markup, "\n");
    let without_tags = ANY_TAG.replace_all(&with_breaks, "");
    decode_entities(&without_tags)
}

/// Text of a single table cell, flattened onto one line.
pub fn cell_text(cell_markup: &str) -> String {
    split_lines(&strip_markup(cell_markup)).join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lines_drops_blank_lines() {
        let lines = split_lines("  FL00123 \n\n\r\nJOHN SMITH\n   \njohn@example.com\n");
        assert_eq!(lines, vec!["FL00123", "JOHN SMITH", "john@example.com"]);
    }

    #[test]
    fn test_split_lines_empty_input() {
        assert!(split_lines("").is_empty());
        assert!(split_lines("\n \n").is_empty());
    }

    #[test]
    fn test_decode_entities() {
        assert_eq!(decode_entities("Tom&nbsp;&amp;&nbsp;Jerry"), "Tom & Jerry");
        assert_eq!(decode_entities("&lt;b&gt;"), "<b>");
        assert_eq!(decode_entities("&amp;lt;"), "&lt;");
        assert_eq!(decode_entities("&copy;"), "&copy;");
    }

    #[test]
    fn test_strip_markup_keeps_line_structure() {
        let html = "<p>JANE DOE</p><p><strong>555-987-6543</strong></p><p>jane@example.com</p>";
        let text = strip_markup(html);
        assert_eq!(
            split_lines(&text),
            vec!["JANE DOE", "555-987-6543", "jane@example.com"]
        );
    }

    #[test]
    fn test_strip_markup_br_and_attributes() {
        let html = r#"<div class="x">Name: Ada<br/>Email: ada@example.com</div>"#;
        assert_eq!(
            split_lines(&strip_markup(html)),
            vec!["Name: Ada", "Email: ada@example.com"]
        );
    }

    #[test]
    fn test_cell_text() {
        assert_eq!(cell_text("<p>John</p><p>Smith</p>"), "John Smith");
        assert_eq!(cell_text(" <em>john@example.com</em>&nbsp;"), "john@example.com");
        assert_eq!(cell_text(""), "");
    }
}
