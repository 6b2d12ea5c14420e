use regex::Regex;
use std::sync::LazyLock;

use crate::types::entry::CatalogEntry;

static RATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d(?:\.\d)?)\s*(l/?min|lpm|litres per minute)").unwrap()
});

/// Flow mode tags and the phrases that signal them.
const FLOW_MODES: &[(&str, &[&str])] = &[
    ("continuous flow", &["continuous flow", "continuous-flow"]),
    ("pulse flow", &["pulse flow", "pulse-dose", "pulse mode"]),
];

pub fn extract_flow(entry: &CatalogEntry) -> Option<String> {
    flow_from_text(&entry.searchable_text())
}

/// Flow modes and rate, e.g. `"continuous flow, pulse flow (3 LPM)"`.
pub fn flow_from_text(text: &str) -> Option<String> {
    let text = text.to_lowercase();

    let tags: Vec<&str> = FLOW_MODES
        .iter()
        .filter(|(_, phrases)| phrases.iter().any(|p| text.contains(p)))
        .map(|(tag, _)| *tag)
        .collect();

    let rate = RATE_PATTERN
        .captures(&text)
        .map(|caps| format!("{} {}", &caps[1], caps[2].to_uppercase()));

    match (tags.is_empty(), rate) {
        (true, None) => None,
        (true, Some(rate)) => Some(rate),
        (false, None) => Some(tags.join(", ")),
        (false, Some(rate)) => Some(format!("{} ({})", tags.join(", "), rate)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_and_rate() {
        assert_eq!(
            flow_from_text("Offers Continuous Flow and pulse-dose delivery up to 3 LPM").as_deref(),
            Some("continuous flow, pulse flow (3 LPM)")
        );
    }

    #[test]
    fn test_tag_only() {
        assert_eq!(
            flow_from_text("Pulse mode settings 1-6").as_deref(),
            Some("pulse flow")
        );
    }

    #[test]
    fn test_rate_only() {
        assert_eq!(
            flow_from_text("Delivers 2.5 L/min of oxygen").as_deref(),
            Some("2.5 L/MIN")
        );
        assert_eq!(
            flow_from_text("up to 5 litres per minute").as_deref(),
            Some("5 LITRES PER MINUTE")
        );
    }

    #[test]
    fn test_rate_unit_prefix() {
        assert_eq!(
            flow_from_text("Adjustable up to 2 l/minute").as_deref(),
            Some("2 L/MIN")
        );
    }

    #[test]
    fn test_nothing_found() {
        assert_eq!(flow_from_text("A lightweight walker"), None);
        assert_eq!(extract_flow(&CatalogEntry::new("Walker")), None);
    }
}
