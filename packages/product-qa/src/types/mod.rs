//! Data types shared across the catalog, resolver and extractors.

pub mod answer;
pub mod entry;
pub mod row;
