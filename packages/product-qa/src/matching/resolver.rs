//! Title resolution: product URLs first, then synonyms, then fuzzy scoring.

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use super::similarity::confidence;
use crate::catalog::CatalogIndex;
use crate::synonyms::SynonymTable;

static PRODUCT_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)/products/([a-z0-9-]+)").unwrap());

/// Outcome of fuzzy resolution. Titles borrow from the index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TitleMatch<'a> {
    pub best: Option<&'a str>,
    pub suggestions: Vec<&'a str>,
}

/// Resolve a `/products/<handle>` link in the query to its title.
pub fn resolve_by_url<'a>(index: &'a CatalogIndex, query: &str) -> Option<&'a str> {
    let caps = PRODUCT_PATH.captures(query)?;
    let slug = caps[1].to_lowercase();
    let title = index.find_by_handle(&slug);
    debug!(slug = %slug, matched = title.is_some(), "Resolved product URL");
    title
}

/// Resolve the query to a title by synonym or fuzzy similarity.
///
/// A synonym hit short-circuits scoring. Otherwise every title is scored with
/// [`confidence`], sorted descending (stable for ties), and the titles at or
/// above `threshold` (0-100) are kept; the first `limit` become suggestions.
pub fn resolve_by_fuzzy_match<'a>(
    index: &'a CatalogIndex,
    synonyms: &SynonymTable,
    query: &str,
    threshold: u8,
    limit: usize,
) -> TitleMatch<'a> {
    if let Some(title) = synonyms.lookup(query).and_then(|alias| index.title_of(alias)) {
        debug!(title = %title, "Resolved by synonym");
        return TitleMatch {
            best: Some(title),
            suggestions: vec![title],
        };
    }

    let mut scored: Vec<(&str, u8)> = index
        .titles()
        .map(|title| (title, confidence(query, title)))
        .collect();
    scored.sort_by(|a, b| b.1.cmp(&a.1));

    let passing: Vec<&str> = scored
        .into_iter()
        .filter(|(_, score)| *score >= threshold)
        .map(|(title, _)| title)
        .collect();

    TitleMatch {
        best: passing.first().copied(),
        suggestions: passing.into_iter().take(limit).collect(),
    }
}
