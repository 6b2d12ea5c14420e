//! Shopify Admin API source.

use async_trait::async_trait;
use shopify_client::{Product, ShopifyClient};
use tracing::info;

use super::CatalogSource;
use crate::error::SourceResult;
use crate::types::row::ProductRow;

/// Lists products through the Admin REST API on every load.
pub struct ShopifySource {
    client: ShopifyClient,
}

impl ShopifySource {
    pub fn new(client: ShopifyClient) -> Self {
        Self { client }
    }
}

/// Flatten products into one row per variant. Variant weights are grams.
///
/// A product with no variants still produces one row so its text is indexed.
pub fn rows_from_products(products: Vec<Product>) -> Vec<ProductRow> {
    let mut rows = Vec::new();

    for product in products {
        let base = ProductRow {
            title: product.title.unwrap_or_default(),
            handle: product.handle.unwrap_or_default(),
            body_html: product.body_html.unwrap_or_default(),
            ..Default::default()
        };

        if product.variants.is_empty() {
            rows.push(base);
            continue;
        }

        for variant in &product.variants {
            rows.push(ProductRow {
                variant_weight_grams: variant.grams,
                variant_weight_unit: Some("g".to_string()),
                ..base.clone()
            });
        }
    }

    rows
}

#[async_trait]
impl CatalogSource for ShopifySource {
    fn name(&self) -> &str {
        "api"
    }

    async fn load_rows(&self) -> SourceResult<Vec<ProductRow>> {
        let products = self.client.list_products().await?;
        let rows = rows_from_products(products);
        info!(rows = rows.len(), "Loaded catalog rows from Shopify");
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopify_client::ProductsResponse;

    #[test]
    fn test_rows_from_products_one_row_per_variant() {
        let payload: ProductsResponse = serde_json::from_str(
            r#"{"products": [
                {"id": 1, "title": "Vogue Walker", "handle": "vogue-walker", "body_html": "<p>Light</p>",
                 "variants": [{"id": 11, "grams": 6200}, {"id": 12, "grams": 7000}]},
                {"id": 2, "title": "Gift Card", "handle": "gift-card", "variants": []}
            ]}"#,
        )
        .unwrap();

        let rows = rows_from_products(payload.products);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].title, "Vogue Walker");
        assert_eq!(rows[0].variant_weight_grams, Some(6200.0));
        assert_eq!(rows[1].variant_weight_grams, Some(7000.0));
        assert_eq!(rows[1].variant_weight_unit.as_deref(), Some("g"));
        assert_eq!(rows[2].title, "Gift Card");
        assert_eq!(rows[2].variant_weight_grams, None);
        assert!(rows[2].body_html.is_empty());
    }
}
