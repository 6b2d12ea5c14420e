//! Pure Shopify Admin REST API client.
//!
//! A minimal client for listing a store's products. Handles cursor
//! pagination through the `Link` response header.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_client::{ShopifyClient, ShopifyConfig};
//!
//! let config = ShopifyConfig::new("rapid-medical.myshopify.com", "shpat_...");
//! let client = ShopifyClient::new(config)?;
//!
//! let products = client.list_products().await?;
//! for product in &products {
//!     println!("{}", product.title.as_deref().unwrap_or("(untitled)"));
//! }
//! ```

pub mod error;
pub mod types;

pub use error::{Result, ShopifyError};
pub use types::{Product, ProductsResponse, Variant};

use std::time::Duration;

const DEFAULT_API_VERSION: &str = "2024-01";

/// Largest page size the products endpoint accepts.
const PAGE_LIMIT: u32 = 250;

const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

/// Connection settings for a single store.
#[derive(Debug, Clone)]
pub struct ShopifyConfig {
    pub store_domain: String,
    pub access_token: String,
    pub api_version: String,
}

impl ShopifyConfig {
    pub fn new(store_domain: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            store_domain: store_domain.into(),
            access_token: access_token.into(),
            api_version: DEFAULT_API_VERSION.to_string(),
        }
    }

    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Base URL of the Admin API, e.g. `https://shop.myshopify.com/admin/api/2024-01`.
    ///
    /// Accepts the domain with or without a scheme; a bare domain gets `https://`.
    pub fn admin_base_url(&self) -> String {
        let domain = self.store_domain.trim().trim_end_matches('/');
        let origin = if domain.starts_with("http://") || domain.starts_with("https://") {
            domain.to_string()
        } else {
            format!("https://{}", domain)
        };
        format!("{}/admin/api/{}", origin, self.api_version)
    }
}

pub struct ShopifyClient {
    client: reqwest::Client,
    config: ShopifyConfig,
}

impl ShopifyClient {
    pub fn new(config: ShopifyConfig) -> Result<Self> {
        if config.store_domain.trim().is_empty() {
            return Err(ShopifyError::Config("store domain is empty".into()));
        }
        if config.access_token.trim().is_empty() {
            return Err(ShopifyError::Config("access token is empty".into()));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ShopifyConfig {
        &self.config
    }

    /// Fetch one page of products. Returns the products plus the URL of the
    /// next page, if the API advertised one.
    pub async fn get_products_page(&self, url: &str) -> Result<(Vec<Product>, Option<String>)> {
        let resp = self
            .client
            .get(url)
            .header(ACCESS_TOKEN_HEADER, &self.config.access_token)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ShopifyError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let next = resp
            .headers()
            .get(reqwest::header::LINK)
            .and_then(|v| v.to_str().ok())
            .and_then(next_page_url);

        let page: ProductsResponse = resp.json().await?;
        Ok((page.products, next))
    }

    /// List every product in the store, following pagination to the end.
    pub async fn list_products(&self) -> Result<Vec<Product>> {
        let mut url = Some(format!(
            "{}/products.json?limit={}",
            self.config.admin_base_url(),
            PAGE_LIMIT
        ));
        let mut products = Vec::new();
        let mut pages = 0usize;

        while let Some(current) = url {
            let (batch, next) = self.get_products_page(&current).await?;
            pages += 1;
            tracing::debug!(page = pages, count = batch.len(), "Fetched products page");
            products.extend(batch);
            url = next;
        }

        tracing::info!(count = products.len(), pages, "Listed Shopify products");
        Ok(products)
    }
}

/// Extract the `rel="next"` target from a `Link` header.
///
/// Shopify sends e.g.
/// `<https://shop/admin/api/2024-01/products.json?page_info=abc>; rel="next"`.
pub fn next_page_url(link_header: &str) -> Option<String> {
    link_header.split(',').find_map(|part| {
        let mut pieces = part.split(';');
        let target = pieces.next()?.trim();
        let is_next = pieces.any(|p| {
            let p = p.trim();
            p == "rel=\"next\"" || p == "rel=next"
        });
        if !is_next {
            return None;
        }
        target
            .strip_prefix('<')
            .and_then(|t| t.strip_suffix('>'))
            .map(str::to_string)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_page_url_picks_next_relation() {
        let header = "<https://shop.myshopify.com/admin/api/2024-01/products.json?limit=250&page_info=prev1>; rel=\"previous\", \
                      <https://shop.myshopify.com/admin/api/2024-01/products.json?limit=250&page_info=next1>; rel=\"next\"";
        assert_eq!(
            next_page_url(header).as_deref(),
            Some("https://shop.myshopify.com/admin/api/2024-01/products.json?limit=250&page_info=next1")
        );
    }

    #[test]
    fn test_next_page_url_none_on_last_page() {
        let header = "<https://shop.myshopify.com/admin/api/2024-01/products.json?page_info=p>; rel=\"previous\"";
        assert_eq!(next_page_url(header), None);
        assert_eq!(next_page_url(""), None);
    }

    #[test]
    fn test_admin_base_url_normalizes_domain() {
        let config = ShopifyConfig::new("https://shop.myshopify.com/", "token");
        assert_eq!(
            config.admin_base_url(),
            "https://shop.myshopify.com/admin/api/2024-01"
        );

        let config = ShopifyConfig::new("shop.myshopify.com", "token").with_api_version("2025-04");
        assert_eq!(
            config.admin_base_url(),
            "https://shop.myshopify.com/admin/api/2025-04"
        );
    }

    #[test]
    fn test_new_rejects_missing_credentials() {
        assert!(matches!(
            ShopifyClient::new(ShopifyConfig::new("", "token")),
            Err(ShopifyError::Config(_))
        ));
        assert!(matches!(
            ShopifyClient::new(ShopifyConfig::new("shop.myshopify.com", " ")),
            Err(ShopifyError::Config(_))
        ));
    }

    #[test]
    fn test_products_response_tolerates_sparse_payload() {
        let json = r#"{
            "products": [
                {"id": 1, "title": "Vogue Walker", "handle": "vogue-walker",
                 "body_html": "<p>Light</p>",
                 "variants": [{"id": 10, "sku": "VW-1", "price": "299.00", "grams": 6200}]},
                {"id": 2, "title": null, "variants": []}
            ]
        }"#;
        let parsed: ProductsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.products.len(), 2);
        assert_eq!(parsed.products[0].variants[0].grams, Some(6200.0));
        assert!(parsed.products[1].title.is_none());
        assert!(parsed.products[1].handle.is_none());
    }
}
