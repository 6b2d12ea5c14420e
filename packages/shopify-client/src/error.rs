use thiserror::Error;

/// Errors returned by the Shopify Admin API client.
#[derive(Debug, Error)]
pub enum ShopifyError {
    /// Transport-level failure (connect, timeout, body decode)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status from the Admin API
    #[error("Shopify API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Client was configured without the fields the API needs
    #[error("invalid Shopify configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ShopifyError>;
