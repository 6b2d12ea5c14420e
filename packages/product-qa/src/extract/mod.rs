//! Attribute classification and extraction from product text.
//!
//! Extraction is best-effort pattern matching over free text; each extractor
//! is exercised against a fixed corpus of sample copy in its tests.

use crate::types::{answer::Attribute, entry::CatalogEntry};

pub mod battery;
pub mod dimensions;
pub mod flow;
pub mod weight;

pub use battery::extract_battery;
pub use dimensions::extract_dimensions;
pub use flow::extract_flow;
pub use weight::extract_weight;

/// Provenance tag for values read out of product copy.
pub(crate) const FROM_TEXT: &str = "(from product text)";

/// Keyword sets in precedence order. The first set with any keyword present
/// in the lowercased question wins.
const ATTRIBUTE_KEYWORDS: &[(Attribute, &[&str])] = &[
    (Attribute::Weight, &["weight", "weigh", "kg", "grams"]),
    (
        Attribute::Dimensions,
        &[
            "dimension", "size", "width", "height", "length", "depth", "folded",
        ],
    ),
    (
        Attribute::Battery,
        &["battery", "runtime", "run time", "hours"],
    ),
    (
        Attribute::Flow,
        &[
            "flow",
            "l/min",
            "lpm",
            "litres per minute",
            "continuous",
            "pulse",
        ],
    ),
];

/// Which attribute a question asks about. Falls back to `General`.
pub fn classify_attribute(question: &str) -> Attribute {
    let question = question.to_lowercase();
    ATTRIBUTE_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| question.contains(k)))
        .map(|(attribute, _)| *attribute)
        .unwrap_or(Attribute::General)
}

/// Run the extractor for `attribute`. `General` has none and yields `None`.
pub fn extract(attribute: Attribute, entry: &CatalogEntry) -> Option<String> {
    match attribute {
        Attribute::Weight => extract_weight(entry),
        Attribute::Dimensions => extract_dimensions(entry),
        Attribute::Battery => extract_battery(entry),
        Attribute::Flow => extract_flow(entry),
        Attribute::General => None,
    }
}

/// Shortest decimal that round-trips, always showing at least one fraction
/// digit (`12.0`, `12.5`, `13.25`).
pub(crate) fn format_decimal(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}
