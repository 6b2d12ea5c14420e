use serde::{Deserialize, Serialize};

/// One raw record as delivered by a catalog source.
///
/// Optional columns are resolved to `None`/empty once, at ingestion, so the
/// index builder never has to probe for them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductRow {
    pub title: String,

    /// URL slug (`/products/<handle>`)
    #[serde(default)]
    pub handle: String,

    /// Product description markup
    #[serde(default)]
    pub body_html: String,

    /// Variant shipping weight in grams
    #[serde(default)]
    pub variant_weight_grams: Option<f64>,

    /// Unit the variant weight was entered in (kept for reference only)
    #[serde(default)]
    pub variant_weight_unit: Option<String>,

    /// Specifications metafield markup, when the export carries it
    #[serde(default)]
    pub specifications_html: Option<String>,

    /// Key-features metafield markup, when the export carries it
    #[serde(default)]
    pub key_features_html: Option<String>,
}

impl ProductRow {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_handle(mut self, handle: impl Into<String>) -> Self {
        self.handle = handle.into();
        self
    }

    pub fn with_body_html(mut self, html: impl Into<String>) -> Self {
        self.body_html = html.into();
        self
    }

    pub fn with_weight(mut self, grams: f64, unit: impl Into<String>) -> Self {
        self.variant_weight_grams = Some(grams);
        self.variant_weight_unit = Some(unit.into());
        self
    }

    pub fn with_specifications(mut self, html: impl Into<String>) -> Self {
        self.specifications_html = Some(html.into());
        self
    }

    pub fn with_key_features(mut self, html: impl Into<String>) -> Self {
        self.key_features_html = Some(html.into());
        self
    }
}
