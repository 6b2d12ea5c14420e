use serde::Deserialize;

/// Envelope for `GET /products.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductsResponse {
    #[serde(default)]
    pub products: Vec<Product>,
}

/// A product as returned by the Admin REST API.
///
/// Only the fields the catalog needs are modelled; everything else in the
/// payload is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Product {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub handle: Option<String>,
    #[serde(default)]
    pub body_html: Option<String>,
    #[serde(default)]
    pub variants: Vec<Variant>,
}

/// A single product variant.
#[derive(Debug, Clone, Deserialize)]
pub struct Variant {
    pub id: u64,
    /// Shipping weight in grams
    #[serde(default)]
    pub grams: Option<f64>,
}
