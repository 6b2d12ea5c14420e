//! Kernel module - engine construction from configuration.

pub mod deps;

pub use deps::{build_engine, catalog_source, engine_config};
