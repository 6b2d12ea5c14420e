//! Literal query aliases.
//!
//! A synonym document maps a lowercase phrase to an exact catalog title:
//!
//! ```json
//! { "vogue": "Vogue Walker", "inogen g5": "Inogen One G5 Portable Oxygen Concentrator" }
//! ```
//!
//! Aliases pointing at titles missing from the current catalog are inert.

use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::error::{SynonymError, SynonymResult};

#[derive(Debug, Clone, Default)]
pub struct SynonymTable {
    entries: HashMap<String, String>,
}

fn normalize_key(key: &str) -> String {
    key.trim().to_lowercase()
}

impl SynonymTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(k, v)| (normalize_key(k.as_ref()), v.into()))
                .collect(),
        }
    }

    /// Parse a JSON object. Entries whose value is not a string are skipped.
    pub fn from_json_str(json: &str) -> SynonymResult<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let object = value.as_object().ok_or(SynonymError::NotAnObject)?;

        let mut skipped = 0usize;
        let pairs: Vec<(String, String)> = object
            .iter()
            .filter_map(|(k, v)| match v.as_str() {
                Some(title) => Some((k.clone(), title.to_string())),
                None => {
                    skipped += 1;
                    None
                }
            })
            .collect();

        if skipped > 0 {
            debug!(skipped, "Ignored synonym entries with non-string values");
        }
        Ok(Self::from_pairs(pairs))
    }

    /// Read a synonym file, surfacing every failure.
    pub fn read(path: impl AsRef<Path>) -> SynonymResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Read a synonym file, falling back to an empty table when the file is
    /// absent or malformed.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "No synonym file, using empty table");
            return Self::new();
        }

        match Self::read(path) {
            Ok(table) => {
                info!(path = %path.display(), count = table.len(), "Loaded synonyms");
                table
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Ignoring malformed synonym file");
                Self::new()
            }
        }
    }

    /// Title aliased by the whole query, after lowercasing and trimming.
    pub fn lookup(&self, query: &str) -> Option<&str> {
        self.entries.get(&normalize_key(query)).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
