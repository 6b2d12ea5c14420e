//! The question-answering engine.
//!
//! `ProductQa` holds the current catalog behind a read-write lock around an
//! `Arc`. Queries clone the `Arc` and work on that snapshot; reloads build a
//! complete new index off to the side and swap the pointer, so a reader sees
//! either the whole old catalog or the whole new one.

use std::sync::{Arc, RwLock};
use tracing::{debug, info, warn};

use crate::catalog::{truncate_chars, CatalogIndex};
use crate::config::EngineConfig;
use crate::extract::{classify_attribute, extract};
use crate::matching::{confidence, resolve_by_fuzzy_match, resolve_by_url};
use crate::sources::CatalogSource;
use crate::synonyms::SynonymTable;
use crate::types::answer::AnswerResult;

pub struct ProductQa {
    source: Box<dyn CatalogSource>,
    synonyms: SynonymTable,
    config: EngineConfig,
    index: RwLock<Arc<CatalogIndex>>,
}

impl ProductQa {
    /// Create an engine with an empty catalog. Call [`reload`](Self::reload)
    /// to populate it.
    pub fn new(
        source: impl CatalogSource + 'static,
        synonyms: SynonymTable,
        config: EngineConfig,
    ) -> Self {
        Self {
            source: Box::new(source),
            synonyms,
            config,
            index: RwLock::new(Arc::new(CatalogIndex::empty())),
        }
    }

    /// Create an engine and load the catalog once.
    pub async fn load(
        source: impl CatalogSource + 'static,
        synonyms: SynonymTable,
        config: EngineConfig,
    ) -> Self {
        let engine = Self::new(source, synonyms, config);
        engine.reload().await;
        engine
    }

    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    /// The catalog as of now. Later reloads do not affect the returned value.
    pub fn snapshot(&self) -> Arc<CatalogIndex> {
        let guard = self.index.read().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&guard)
    }

    /// Replace the catalog wholesale.
    pub fn install(&self, index: CatalogIndex) {
        let index = Arc::new(index);
        let mut guard = self.index.write().unwrap_or_else(|e| e.into_inner());
        *guard = index;
    }

    /// Rebuild the catalog from the source and swap it in.
    ///
    /// A failing source installs an empty catalog. Returns the number of
    /// products now indexed.
    pub async fn reload(&self) -> usize {
        let index = match self.source.load_rows().await {
            Ok(rows) => CatalogIndex::build_with_cap(rows, self.config.text_cap),
            Err(e) => {
                warn!(
                    source = self.source.name(),
                    error = %e,
                    "Catalog source failed, using empty catalog"
                );
                CatalogIndex::empty()
            }
        };

        let products = index.len();
        self.install(index);
        info!(source = self.source.name(), products, "Catalog reloaded");
        products
    }

    /// Answer a question against the current catalog snapshot.
    pub fn answer(&self, question: &str) -> AnswerResult {
        let index = self.snapshot();
        answer_with(&index, &self.synonyms, &self.config, question)
    }
}

/// Resolve, classify, extract and format, against an explicit catalog.
pub fn answer_with(
    index: &CatalogIndex,
    synonyms: &SynonymTable,
    config: &EngineConfig,
    question: &str,
) -> AnswerResult {
    let question = question.trim();

    let (title, suggestions) = match resolve_by_url(index, question) {
        Some(title) => (Some(title), Vec::new()),
        None => {
            let matched = resolve_by_fuzzy_match(
                index,
                synonyms,
                question,
                config.score_threshold(),
                config.suggestion_limit,
            );
            (matched.best, matched.suggestions)
        }
    };

    let Some(entry) = title.and_then(|t| index.get(t)) else {
        debug!(question, suggestions = suggestions.len(), "No product matched");
        return AnswerResult::product_not_found(
            suggestions.into_iter().map(str::to_string).collect(),
        );
    };

    let attribute = classify_attribute(question);
    let score = confidence(question, &entry.title);
    debug!(product = %entry.title, %attribute, confidence = score, "Resolved question");

    if attribute.is_extractable() {
        return match extract(attribute, entry) {
            Some(value) => AnswerResult::extracted(&entry.title, attribute, value, score),
            None => AnswerResult::attribute_missing(&entry.title, attribute, score),
        };
    }

    let mut summary = truncate_chars(&entry.description, config.overview_chars).to_string();
    if entry.description.chars().count() > config.overview_chars {
        summary.push_str("...");
    }
    AnswerResult::overview(&entry.title, &summary, score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{answer::Attribute, row::ProductRow};

    fn catalog() -> CatalogIndex {
        CatalogIndex::build(vec![
            ProductRow::new("Vogue Walker")
                .with_handle("vogue-walker")
                .with_body_html("<p>A stylish four-wheel rollator.</p>")
                .with_weight(6200.0, "kg"),
            ProductRow::new("Vogue Walker")
                .with_handle("vogue-walker")
                .with_body_html("<p>A stylish four-wheel rollator.</p>")
                .with_weight(7000.0, "kg"),
            ProductRow::new("Inogen One G5")
                .with_handle("inogen-one-g5")
                .with_body_html(format!("<p>{}</p>", "Portable oxygen. ".repeat(30)))
                .with_specifications("<ul><li>Battery life up to 6.5 hours</li><li>Pulse-dose only</li></ul>"),
        ])
    }

    fn ask(question: &str) -> AnswerResult {
        answer_with(&catalog(), &SynonymTable::new(), &EngineConfig::default(), question)
    }

    #[test]
    fn test_weight_from_variants() {
        let result = ask("what's the weight of the Vogue Walker?");
        assert!(result.ok);
        assert_eq!(result.product.as_deref(), Some("Vogue Walker"));
        assert_eq!(result.attribute, Some(Attribute::Weight));
        assert_eq!(result.value.as_deref(), Some("6.2 kg (approx., from variant data)"));
        assert_eq!(result.confidence, Some(100));
    }

    #[test]
    fn test_missing_attribute() {
        let result = ask("vogue walker dimensions");
        assert!(!result.ok);
        assert_eq!(result.attribute, Some(Attribute::Dimensions));
        assert!(result.value.is_none());
        assert_eq!(
            result.answer,
            "I couldn’t find dimensions details for **Vogue Walker** in the current data."
        );
    }

    #[test]
    fn test_url_resolution_beats_fuzzy() {
        let result = ask("Inogen One G5 battery? https://shop.example/products/VOGUE-WALKER");
        assert_eq!(result.product.as_deref(), Some("Vogue Walker"));
    }

    #[test]
    fn test_battery_from_specs() {
        let result = ask("inogen one g5 battery life");
        assert!(result.ok);
        assert_eq!(result.value.as_deref(), Some("6.5 hours (from product text)"));
    }

    #[test]
    fn test_not_found() {
        let result = ask("zzzz qqqq");
        assert!(!result.ok);
        assert_eq!(result.confidence, Some(0));
        assert_eq!(result.suggestions, Some(vec![]));
        assert!(result.product.is_none());
    }

    #[test]
    fn test_general_overview_short_description_verbatim() {
        let result = ask("tell me about the vogue walker");
        assert!(result.ok);
        assert_eq!(result.attribute, Some(Attribute::General));
        assert_eq!(
            result.answer,
            "I found **Vogue Walker**. Here’s a quick overview: A stylish four-wheel rollator."
        );
    }

    #[test]
    fn test_general_overview_truncates_long_description() {
        let result = ask("tell me about the inogen one g5");
        let overview = result.answer.split("overview: ").nth(1).unwrap();
        assert!(overview.ends_with("..."));
        assert_eq!(overview.chars().count(), 303);
    }
}
