//! Deterministic catalog sources for tests and local development.

use async_trait::async_trait;
use std::sync::RwLock;

use crate::error::{SourceError, SourceResult};
use crate::sources::CatalogSource;
use crate::types::row::ProductRow;

/// Serves a fixed set of rows. Rows can be replaced to simulate a changed
/// upstream between reloads.
#[derive(Default)]
pub struct StaticSource {
    rows: RwLock<Vec<ProductRow>>,
}

impl StaticSource {
    pub fn new(rows: Vec<ProductRow>) -> Self {
        Self {
            rows: RwLock::new(rows),
        }
    }

    pub fn set_rows(&self, rows: Vec<ProductRow>) {
        *self.rows.write().unwrap_or_else(|e| e.into_inner()) = rows;
    }
}

#[async_trait]
impl CatalogSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn load_rows(&self) -> SourceResult<Vec<ProductRow>> {
        Ok(self.rows.read().unwrap_or_else(|e| e.into_inner()).clone())
    }
}

/// Always fails, as an unreachable export or API would.
#[derive(Default)]
pub struct FailingSource;

#[async_trait]
impl CatalogSource for FailingSource {
    fn name(&self) -> &str {
        "failing"
    }

    async fn load_rows(&self) -> SourceResult<Vec<ProductRow>> {
        Err(SourceError::NotFound {
            path: "unavailable".to_string(),
        })
    }
}
