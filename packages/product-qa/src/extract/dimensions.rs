use regex::Regex;
use std::sync::LazyLock;

use super::FROM_TEXT;
use crate::types::entry::CatalogEntry;

/// `L x W x H unit`, separators `x` or `×`.
static LWH_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(\d{2,4}(?:\.\d{1,2})?)\s*[x×]\s*(\d{2,4}(?:\.\d{1,2})?)\s*[x×]\s*(\d{2,4}(?:\.\d{1,2})?)\s*(mm|cm|inches|inch|in\b)",
    )
    .unwrap()
});

/// `Dimensions ...: <free text>` up to a line break or semicolon.
static LABELLED_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)dimensions[^:]*:\s*([^\n\r;]+)").unwrap());

pub fn extract_dimensions(entry: &CatalogEntry) -> Option<String> {
    dimensions_from_text(&entry.searchable_text())
}

pub fn dimensions_from_text(text: &str) -> Option<String> {
    if let Some(caps) = LWH_PATTERN.captures(text) {
        return Some(format!(
            "{} x {} x {} {} {}",
            &caps[1], &caps[2], &caps[3], &caps[4], FROM_TEXT
        ));
    }

    let caps = LABELLED_PATTERN.captures(text)?;
    let described = caps[1].trim();
    if described.is_empty() {
        return None;
    }
    Some(format!("{} {}", described, FROM_TEXT))
}
