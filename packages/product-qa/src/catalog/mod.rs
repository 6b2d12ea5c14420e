//! Catalog index: rows grouped by title into searchable entries.

pub mod html;
pub mod index;

pub use html::{strip_html, truncate_chars};
pub use index::CatalogIndex;
