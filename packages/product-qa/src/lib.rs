//! Product Question Answering
//!
//! Answers natural-language questions about catalog products ("what's the
//! weight of the Vogue Walker?") by resolving the question to a product and
//! pulling the requested attribute out of its copy.
//!
//! # Pipeline
//!
//! 1. **Catalog**: rows from a [`CatalogSource`] are grouped by title, stripped
//!    of markup and merged into [`CatalogEntry`] records.
//! 2. **Resolve**: a `/products/<handle>` link wins; otherwise a synonym hit;
//!    otherwise partial-ratio fuzzy matching against every title.
//! 3. **Classify**: keyword precedence picks weight, dimensions, battery, flow
//!    or a general overview.
//! 4. **Extract**: pattern tables pull the value out of specs, features and
//!    description, normalising units.
//!
//! # Usage
//!
//! ```rust,ignore
//! use product_qa::{CsvSource, EngineConfig, ProductQa, SynonymTable};
//!
//! let engine = ProductQa::load(
//!     CsvSource::new("products_export.csv"),
//!     SynonymTable::load("synonyms.json"),
//!     EngineConfig::default(),
//! )
//! .await;
//!
//! let result = engine.answer("what's the weight of the Vogue Walker?");
//! println!("{}", result.answer);
//! ```
//!
//! # Modules
//!
//! - [`catalog`] - Index building and markup stripping
//! - [`matching`] - URL, synonym and fuzzy title resolution
//! - [`extract`] - Attribute classification and extractors
//! - [`sources`] - CSV export and Shopify API sources
//! - [`engine`] - The swappable engine and answer orchestration
//! - [`testing`] - Static and failing sources for tests

pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod extract;
pub mod matching;
pub mod sources;
pub mod synonyms;
pub mod testing;
pub mod types;

// Re-export core types at crate root
pub use catalog::CatalogIndex;
pub use config::EngineConfig;
pub use engine::{answer_with, ProductQa};
pub use error::{SourceError, SourceResult, SynonymError, SynonymResult};
pub use extract::classify_attribute;
pub use matching::{confidence, TitleMatch};
pub use sources::{CatalogSource, CsvSource, ShopifySource};
pub use synonyms::SynonymTable;
pub use types::{
    answer::{AnswerResult, Attribute},
    entry::CatalogEntry,
    row::ProductRow,
};

// Re-export testing utilities
pub use testing::{FailingSource, StaticSource};
