//! Typed errors for the product Q&A library.
//!
//! None of these cross `ProductQa::answer`; they surface only from the
//! loading layer, where the engine logs them and degrades to an empty
//! catalog or an empty synonym table.

use thiserror::Error;

/// Errors raised while loading catalog rows from a source.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The configured export file does not exist
    #[error("catalog source not found: {path}")]
    NotFound { path: String },

    /// Reading the source failed
    #[error("I/O error reading catalog: {0}")]
    Io(#[from] std::io::Error),

    /// The export is not valid CSV
    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    /// The remote product listing failed
    #[error("remote catalog error: {0}")]
    Remote(#[from] shopify_client::ShopifyError),
}

/// Errors raised while reading a synonym document.
#[derive(Debug, Error)]
pub enum SynonymError {
    #[error("I/O error reading synonyms: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Top-level JSON value was not an object
    #[error("synonym document must be a JSON object")]
    NotAnObject,
}

/// Result type alias for source operations.
pub type SourceResult<T> = std::result::Result<T, SourceError>;

/// Result type alias for synonym operations.
pub type SynonymResult<T> = std::result::Result<T, SynonymError>;
