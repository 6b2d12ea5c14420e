//! Resolving a free-text question to a catalog title.

pub mod resolver;
pub mod similarity;

pub use resolver::{resolve_by_fuzzy_match, resolve_by_url, TitleMatch};
pub use similarity::{confidence, partial_ratio};
