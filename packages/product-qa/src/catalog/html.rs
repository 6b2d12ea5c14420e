//! Markup stripping for product copy.
//!
//! Tries DOM-based text extraction first (when the `html-dom` feature is on)
//! and falls back to pattern-based tag removal. Never fails.

use regex::Regex;
use std::sync::LazyLock;

static TAG_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());

/// Entities common in Shopify descriptions; the DOM path decodes all of them.
const ENTITIES: &[(&str, &str)] = &[
    ("&nbsp;", " "),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#39;", "'"),
    ("&apos;", "'"),
    ("&amp;", "&"),
];

/// Convert markup to plain text with single spaces between words.
pub fn strip_html(html: &str) -> String {
    if html.trim().is_empty() {
        return String::new();
    }

    #[cfg(feature = "html-dom")]
    let text = text_or_pattern(html, dom_text);
    #[cfg(not(feature = "html-dom"))]
    let text = pattern_text(html);
    text
}

/// Run a DOM extractor, falling back to pattern stripping if it panics.
#[cfg(feature = "html-dom")]
fn text_or_pattern(html: &str, extract: fn(&str) -> String) -> String {
    match std::panic::catch_unwind(|| extract(html)) {
        Ok(text) => text,
        Err(_) => {
            tracing::warn!(len = html.len(), "DOM text extraction failed, stripping tags by pattern");
            pattern_text(html)
        }
    }
}

/// Text nodes of the parsed fragment, each trimmed, joined by spaces.
#[cfg(feature = "html-dom")]
fn dom_text(html: &str) -> String {
    let fragment = scraper::Html::parse_fragment(html);
    let text = fragment
        .root_element()
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    collapse_whitespace(&text)
}

/// Regex tag removal plus basic entity decoding.
pub fn pattern_text(html: &str) -> String {
    let mut text = TAG_PATTERN.replace_all(html, " ").into_owned();
    for (entity, replacement) in ENTITIES {
        text = text.replace(entity, replacement);
    }
    collapse_whitespace(&text)
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// First `max_chars` characters of `text` (not bytes).
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_html_plain_text() {
        let html = "<p>Lightweight <strong>rollator</strong></p>\n<ul><li>Weight: 6.2 kg</li><li>Seat   height: 55 cm</li></ul>";
        assert_eq!(
            strip_html(html),
            "Lightweight rollator Weight: 6.2 kg Seat height: 55 cm"
        );
    }

    #[test]
    fn test_strip_html_decodes_entities() {
        assert_eq!(strip_html("<p>Tom &amp; Jerry&nbsp;walker</p>"), "Tom & Jerry walker");
    }

    #[test]
    fn test_strip_html_empty() {
        assert_eq!(strip_html(""), "");
        assert_eq!(strip_html("   \n"), "");
    }

    #[test]
    fn test_strip_html_unclosed_markup() {
        let text = strip_html("<div><p>Battery life up to 5 hours<br>");
        assert_eq!(text, "Battery life up to 5 hours");
    }

    #[test]
    fn test_pattern_text_fallback() {
        assert_eq!(
            pattern_text("<p>Folded:</p><p>60 x 40 x 30 cm</p>"),
            "Folded: 60 x 40 x 30 cm"
        );
    }

    #[cfg(feature = "html-dom")]
    #[test]
    fn test_panicking_dom_extractor_falls_back_to_pattern() {
        fn broken(_: &str) -> String {
            panic!("unparseable document")
        }
        assert_eq!(
            text_or_pattern("<p>Weight:&nbsp;6.2 kg</p><br/>", broken),
            "Weight: 6.2 kg"
        );
    }

    #[cfg(not(feature = "html-dom"))]
    #[test]
    fn test_strip_html_without_dom_uses_pattern() {
        assert_eq!(strip_html("<p>Weight:&nbsp;6.2 kg</p><br/>"), "Weight: 6.2 kg");
    }

    #[test]
    fn test_truncate_chars_respects_char_boundaries() {
        assert_eq!(truncate_chars("ab×cd", 3), "ab×");
        assert_eq!(truncate_chars("short", 10), "short");
        assert_eq!(truncate_chars("", 0), "");
    }
}
