//! Catalog sources: where raw product rows come from.

use async_trait::async_trait;
use std::sync::Arc;

use crate::error::SourceResult;
use crate::types::row::ProductRow;

pub mod csv;
pub mod shopify;

pub use self::csv::CsvSource;
pub use self::shopify::ShopifySource;

/// A snapshot provider for catalog rows.
///
/// Each call returns the current state of the source; the engine rebuilds
/// its index from the result.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Short name reported by health checks (e.g. `"csv"`, `"api"`).
    fn name(&self) -> &str;

    /// Load every row currently available.
    async fn load_rows(&self) -> SourceResult<Vec<ProductRow>>;
}

#[async_trait]
impl<T: CatalogSource + ?Sized> CatalogSource for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    async fn load_rows(&self) -> SourceResult<Vec<ProductRow>> {
        (**self).load_rows().await
    }
}

#[async_trait]
impl<T: CatalogSource + ?Sized> CatalogSource for Arc<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    async fn load_rows(&self) -> SourceResult<Vec<ProductRow>> {
        (**self).load_rows().await
    }
}
