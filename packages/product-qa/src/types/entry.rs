use indexmap::IndexSet;

/// Aggregated record for one product title.
///
/// All text fields are plain text: markup is stripped per row before the
/// rows are merged and capped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogEntry {
    pub title: String,

    /// URL slugs seen for this title
    pub handles: IndexSet<String>,

    pub description: String,
    pub specs: String,
    pub features: String,

    /// Positive variant weights in grams, in row order
    pub weights: Vec<f64>,

    /// Distinct weight units seen on variant rows
    pub weight_units: IndexSet<String>,
}

impl CatalogEntry {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Case-insensitive exact match against this entry's handles.
    pub fn has_handle(&self, slug: &str) -> bool {
        self.handles.iter().any(|h| h.eq_ignore_ascii_case(slug))
    }

    /// Smallest positive variant weight, in grams.
    pub fn min_weight_grams(&self) -> Option<f64> {
        self.weights
            .iter()
            .copied()
            .filter(|g| *g > 0.0)
            .min_by(|a, b| a.total_cmp(b))
    }

    /// Text the extractors search: specs, then features, then description.
    pub fn searchable_text(&self) -> String {
        [
            self.specs.as_str(),
            self.features.as_str(),
            self.description.as_str(),
        ]
        .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_handle_ignores_case() {
        let mut entry = CatalogEntry::new("Vogue Walker");
        entry.handles.insert("Vogue-Walker".to_string());

        assert!(entry.has_handle("vogue-walker"));
        assert!(!entry.has_handle("vogue"));
    }

    #[test]
    fn test_min_weight_skips_non_positive() {
        let mut entry = CatalogEntry::new("Walker");
        entry.weights = vec![7000.0, 0.0, 6200.0, -5.0];
        assert_eq!(entry.min_weight_grams(), Some(6200.0));

        entry.weights.clear();
        assert_eq!(entry.min_weight_grams(), None);
    }
}
