//! Building the in-memory catalog from raw rows.

use indexmap::{IndexMap, IndexSet};
use tracing::debug;

use super::html::{strip_html, truncate_chars};
use crate::config::DEFAULT_TEXT_CAP;
use crate::types::{entry::CatalogEntry, row::ProductRow};

/// Title → entry mapping. Iteration order is first-seen title order.
///
/// An index is immutable once built; reloads build a fresh one and swap it in.
#[derive(Debug, Clone, Default)]
pub struct CatalogIndex {
    entries: IndexMap<String, CatalogEntry>,
}

/// Per-title accumulator used while grouping rows.
#[derive(Default)]
struct EntryBuilder {
    handles: IndexSet<String>,
    descriptions: IndexSet<String>,
    specs: IndexSet<String>,
    features: IndexSet<String>,
    weights: Vec<f64>,
    weight_units: IndexSet<String>,
}

impl EntryBuilder {
    fn absorb(&mut self, row: &ProductRow) {
        insert_non_empty(&mut self.handles, row.handle.trim().to_string());
        insert_non_empty(&mut self.descriptions, strip_html(&row.body_html));
        if let Some(html) = &row.specifications_html {
            insert_non_empty(&mut self.specs, strip_html(html));
        }
        if let Some(html) = &row.key_features_html {
            insert_non_empty(&mut self.features, strip_html(html));
        }
        if let Some(grams) = row.variant_weight_grams {
            if grams.is_finite() && grams > 0.0 {
                self.weights.push(grams);
            }
        }
        if let Some(unit) = &row.variant_weight_unit {
            insert_non_empty(&mut self.weight_units, unit.trim().to_string());
        }
    }

    fn finish(self, title: String, cap: usize) -> CatalogEntry {
        CatalogEntry {
            title,
            handles: self.handles,
            description: merge_capped(&self.descriptions, cap),
            specs: merge_capped(&self.specs, cap),
            features: merge_capped(&self.features, cap),
            weights: self.weights,
            weight_units: self.weight_units,
        }
    }
}

fn insert_non_empty(set: &mut IndexSet<String>, value: String) {
    if !value.is_empty() {
        set.insert(value);
    }
}

fn merge_capped(values: &IndexSet<String>, cap: usize) -> String {
    let joined = values.iter().map(String::as_str).collect::<Vec<_>>().join(" ");
    truncate_chars(&joined, cap).to_string()
}

impl CatalogIndex {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build with the default 12,000 character field cap.
    pub fn build(rows: impl IntoIterator<Item = ProductRow>) -> Self {
        Self::build_with_cap(rows, DEFAULT_TEXT_CAP)
    }

    /// Group rows by exact title and merge each group into one entry.
    ///
    /// Rows without a title are dropped.
    pub fn build_with_cap(rows: impl IntoIterator<Item = ProductRow>, cap: usize) -> Self {
        let mut groups: IndexMap<String, EntryBuilder> = IndexMap::new();
        let mut row_count = 0usize;
        let mut dropped = 0usize;

        for row in rows {
            row_count += 1;
            if row.title.trim().is_empty() {
                dropped += 1;
                continue;
            }
            groups.entry(row.title.clone()).or_default().absorb(&row);
        }

        let entries: IndexMap<String, CatalogEntry> = groups
            .into_iter()
            .map(|(title, builder)| (title.clone(), builder.finish(title, cap)))
            .collect();

        debug!(
            rows = row_count,
            dropped,
            products = entries.len(),
            "Built catalog index"
        );

        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, title: &str) -> Option<&CatalogEntry> {
        self.entries.get(title)
    }

    /// The stored title string equal to `title`, borrowed from the index.
    pub fn title_of(&self, title: &str) -> Option<&str> {
        self.entries.get_key_value(title).map(|(k, _)| k.as_str())
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// First title (in index order) owning `slug`, compared case-insensitively.
    pub fn find_by_handle(&self, slug: &str) -> Option<&str> {
        self.entries
            .values()
            .find(|entry| entry.has_handle(slug))
            .map(|entry| entry.title.as_str())
    }
}
