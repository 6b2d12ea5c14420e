use anyhow::{bail, Context, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

/// Where the catalog is loaded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogMode {
    /// A Shopify product export on disk
    Csv,
    /// The Shopify Admin REST API
    Api,
}

impl CatalogMode {
    fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("api") {
            CatalogMode::Api
        } else {
            CatalogMode::Csv
        }
    }
}

/// Credentials for the Shopify Admin API.
#[derive(Debug, Clone)]
pub struct ShopifySettings {
    pub store_domain: String,
    pub access_token: String,
    pub api_version: String,
}

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub mode: CatalogMode,
    pub csv_path: PathBuf,
    pub synonyms_path: PathBuf,
    /// Present only in API mode
    pub shopify: Option<ShopifySettings>,
    pub match_cutoff: f64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let mode = var("SHOPIFY_MODE")
            .map(|value| CatalogMode::parse(&value))
            .unwrap_or(CatalogMode::Csv);

        let shopify = match mode {
            CatalogMode::Csv => None,
            CatalogMode::Api => Some(ShopifySettings {
                store_domain: var("SHOPIFY_STORE_DOMAIN")
                    .context("SHOPIFY_STORE_DOMAIN must be set when SHOPIFY_MODE=api")?,
                access_token: var("SHOPIFY_ACCESS_TOKEN")
                    .context("SHOPIFY_ACCESS_TOKEN must be set when SHOPIFY_MODE=api")?,
                api_version: var("SHOPIFY_API_VERSION")
                    .unwrap_or_else(|| "2024-01".to_string()),
            }),
        };

        let match_cutoff: f64 = var("QA_MATCH_CUTOFF")
            .unwrap_or_else(|| "0.55".to_string())
            .trim()
            .parse()
            .context("QA_MATCH_CUTOFF must be a number")?;
        if !(0.0..=1.0).contains(&match_cutoff) {
            bail!("QA_MATCH_CUTOFF must be between 0 and 1, got {}", match_cutoff);
        }

        Ok(Self {
            port: var("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .trim()
                .parse()
                .context("PORT must be a valid number")?,
            mode,
            csv_path: var("SHOPIFY_CSV_PATH")
                .unwrap_or_else(|| "products_export.csv".to_string())
                .into(),
            synonyms_path: var("PRODUCT_SYNONYMS_PATH")
                .unwrap_or_else(|| "synonyms.json".to_string())
                .into(),
            shopify,
            match_cutoff,
        })
    }
}
