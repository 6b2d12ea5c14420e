//! Engine dependencies
//!
//! Turns a [`Config`] into a ready-to-serve [`ProductQa`]: picks the catalog
//! source for the configured mode, loads synonyms and performs the first
//! catalog load.

use anyhow::{Context, Result};
use product_qa::{CatalogSource, CsvSource, EngineConfig, ProductQa, ShopifySource, SynonymTable};
use shopify_client::{ShopifyClient, ShopifyConfig};
use tracing::info;

use crate::config::{CatalogMode, Config};

/// Catalog source for the configured mode.
pub fn catalog_source(config: &Config) -> Result<Box<dyn CatalogSource>> {
    match config.mode {
        CatalogMode::Csv => Ok(Box::new(CsvSource::new(config.csv_path.clone()))),
        CatalogMode::Api => {
            let settings = config
                .shopify
                .as_ref()
                .context("Shopify settings are required in API mode")?;
            let client = ShopifyClient::new(
                ShopifyConfig::new(&settings.store_domain, &settings.access_token)
                    .with_api_version(&settings.api_version),
            )
            .context("Failed to create Shopify client")?;
            Ok(Box::new(ShopifySource::new(client)))
        }
    }
}

pub fn engine_config(config: &Config) -> EngineConfig {
    EngineConfig::default().with_match_cutoff(config.match_cutoff)
}

/// Build the engine and load the catalog once.
///
/// Source failures do not fail startup; the engine comes up with an empty
/// catalog and can be reloaded later.
pub async fn build_engine(config: &Config) -> Result<ProductQa> {
    let source = catalog_source(config)?;
    let synonyms = SynonymTable::load(&config.synonyms_path);
    info!(
        mode = source.name(),
        synonyms = synonyms.len(),
        "Building product Q&A engine"
    );

    Ok(ProductQa::load(source, synonyms, engine_config(config)).await)
}
