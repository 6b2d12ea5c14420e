use regex::Regex;
use std::sync::LazyLock;

use super::FROM_TEXT;
use crate::types::entry::CatalogEntry;

static BATTERY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(battery(?:\s*life|\s*run[\s-]*time)?)\D{0,12}(\d{1,2}(?:\.\d{1,2})?)\s*(hours|hour|hrs|hr|h\b)",
    )
    .unwrap()
});

pub fn extract_battery(entry: &CatalogEntry) -> Option<String> {
    battery_from_text(&entry.searchable_text())
}

pub fn battery_from_text(text: &str) -> Option<String> {
    let caps = BATTERY_PATTERN.captures(text)?;
    Some(format!("{} hours {}", &caps[2], FROM_TEXT))
}
