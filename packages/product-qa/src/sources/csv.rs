//! Shopify product-export CSV source.

use async_trait::async_trait;
use serde::Deserialize;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::CatalogSource;
use crate::error::{SourceError, SourceResult};
use crate::types::row::ProductRow;

/// Columns of the Shopify export this crate reads. Any other column is ignored
/// and any of these may be absent.
#[derive(Debug, Deserialize)]
struct ExportRecord {
    #[serde(rename = "Title", default)]
    title: Option<String>,
    #[serde(rename = "Handle", default)]
    handle: Option<String>,
    #[serde(rename = "Body (HTML)", default)]
    body_html: Option<String>,
    #[serde(rename = "Variant Grams", default)]
    variant_grams: Option<String>,
    #[serde(rename = "Variant Weight Unit", default)]
    variant_weight_unit: Option<String>,
    #[serde(
        rename = "Specifications (product.metafields.custom.specifications)",
        default
    )]
    specifications: Option<String>,
    #[serde(rename = "Key Features (product.metafields.custom.key_features)", default)]
    key_features: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl From<ExportRecord> for ProductRow {
    fn from(record: ExportRecord) -> Self {
        ProductRow {
            title: record.title.unwrap_or_default(),
            handle: record.handle.unwrap_or_default(),
            body_html: record.body_html.unwrap_or_default(),
            variant_weight_grams: record
                .variant_grams
                .as_deref()
                .and_then(|g| g.trim().parse::<f64>().ok()),
            variant_weight_unit: non_empty(record.variant_weight_unit),
            specifications_html: non_empty(record.specifications),
            key_features_html: non_empty(record.key_features),
        }
    }
}

/// Parse a product export. Records that fail to deserialize are skipped.
pub fn parse_export<R: Read>(reader: R) -> SourceResult<Vec<ProductRow>> {
    let mut csv_reader = ::csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(reader);

    // Surface a broken header row instead of silently returning nothing.
    csv_reader.headers()?;

    let mut rows = Vec::new();
    for (line, record) in csv_reader.deserialize::<ExportRecord>().enumerate() {
        match record {
            Ok(record) => rows.push(ProductRow::from(record)),
            Err(e) => warn!(record = line + 1, error = %e, "Skipping unreadable CSV record"),
        }
    }
    Ok(rows)
}

/// Reads rows from a CSV file on every load.
pub struct CsvSource {
    path: PathBuf,
}

impl CsvSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CatalogSource for CsvSource {
    fn name(&self) -> &str {
        "csv"
    }

    async fn load_rows(&self) -> SourceResult<Vec<ProductRow>> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(SourceError::NotFound {
                    path: self.path.display().to_string(),
                });
            }
            Err(e) => return Err(e.into()),
        };

        let rows = parse_export(bytes.as_slice())?;
        debug!(path = %self.path.display(), rows = rows.len(), "Read product export");
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPORT: &str = "\
Handle,Title,Body (HTML),Vendor,Variant Grams,Variant Weight Unit
vogue-walker,Vogue Walker,\"<p>Stylish, light rollator</p>\",Rapid,6200,kg
vogue-walker,Vogue Walker,,Rapid,7000.0,kg
vogue-walker,,,Rapid,,
cane,Folding Cane,<p>Cane</p>,Rapid,abc,g
";

    #[test]
    fn test_parse_export_maps_columns() {
        let rows = parse_export(EXPORT.as_bytes()).unwrap();
        assert_eq!(rows.len(), 4);

        assert_eq!(rows[0].title, "Vogue Walker");
        assert_eq!(rows[0].handle, "vogue-walker");
        assert_eq!(rows[0].body_html, "<p>Stylish, light rollator</p>");
        assert_eq!(rows[0].variant_weight_grams, Some(6200.0));
        assert_eq!(rows[0].variant_weight_unit.as_deref(), Some("kg"));
        assert_eq!(rows[1].variant_weight_grams, Some(7000.0));
        assert!(rows[2].title.is_empty());
        assert!(rows[0].specifications_html.is_none());
    }

    #[test]
    fn test_parse_export_unparseable_grams_are_absent() {
        let rows = parse_export(EXPORT.as_bytes()).unwrap();
        assert_eq!(rows[3].variant_weight_grams, None);
    }

    #[test]
    fn test_parse_export_metafield_columns() {
        let export = "\
Title,Specifications (product.metafields.custom.specifications),Key Features (product.metafields.custom.key_features)
Concentrator,<p>Flow 2 L/min</p>,<li>Pulse mode</li>
";
        let rows = parse_export(export.as_bytes()).unwrap();
        assert_eq!(rows[0].specifications_html.as_deref(), Some("<p>Flow 2 L/min</p>"));
        assert_eq!(rows[0].key_features_html.as_deref(), Some("<li>Pulse mode</li>"));
    }

    #[tokio::test]
    async fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let source = CsvSource::new(dir.path().join("products_export.csv"));

        let err = source.load_rows().await.unwrap_err();
        assert!(matches!(err, SourceError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_load_rows_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("products_export.csv");
        std::fs::write(&path, EXPORT).unwrap();

        let rows = CsvSource::new(&path).load_rows().await.unwrap();
        assert_eq!(rows.len(), 4);
    }
}
