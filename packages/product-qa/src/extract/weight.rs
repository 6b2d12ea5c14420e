//! Weight: structured variant grams first, then product copy.

use regex::Regex;
use std::sync::LazyLock;

use super::{format_decimal, FROM_TEXT};
use crate::types::entry::CatalogEntry;

static WEIGHT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:weight[^A-Za-z0-9]{0,10})?(\d{1,3}(?:\.\d{1,2})?)\s?(kg|kilograms|grams|g\b|lbs|lb|pounds)",
    )
    .unwrap()
});

/// A family of unit spellings and how to bring a value into kilograms.
struct WeightUnit {
    names: &'static [&'static str],
    to_kg: fn(f64) -> f64,
    converted: bool,
}

fn kilograms(value: f64) -> f64 {
    value
}

fn grams_to_kg(value: f64) -> f64 {
    value / 1000.0
}

fn pounds_to_kg(value: f64) -> f64 {
    value * 0.453592
}

const WEIGHT_UNITS: &[WeightUnit] = &[
    WeightUnit {
        names: &["kg", "kilograms"],
        to_kg: kilograms,
        converted: false,
    },
    WeightUnit {
        names: &["g", "grams"],
        to_kg: grams_to_kg,
        converted: true,
    },
    WeightUnit {
        names: &["lbs", "lb", "pounds"],
        to_kg: pounds_to_kg,
        converted: true,
    },
];

pub fn extract_weight(entry: &CatalogEntry) -> Option<String> {
    if let Some(grams) = entry.min_weight_grams() {
        return Some(format!(
            "{:.1} kg (approx., from variant data)",
            grams / 1000.0
        ));
    }
    weight_from_text(&entry.searchable_text())
}

/// First `<number> <unit>` weight in the text, normalised to kilograms.
///
/// Kilogram values keep their written precision; converted values are
/// rounded to one decimal.
pub fn weight_from_text(text: &str) -> Option<String> {
    let caps = WEIGHT_PATTERN.captures(text)?;
    let value: f64 = caps[1].parse().ok()?;
    let unit_name = caps[2].to_lowercase();
    let unit = WEIGHT_UNITS
        .iter()
        .find(|u| u.names.contains(&unit_name.as_str()))?;

    let kg = (unit.to_kg)(value);
    let kg = if unit.converted {
        format!("{:.1}", kg)
    } else {
        format_decimal(kg)
    };
    Some(format!("{} kg {}", kg, FROM_TEXT))
}
