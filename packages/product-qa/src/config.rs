//! Tunables for matching and answer formatting.

use serde::{Deserialize, Serialize};

/// Cap applied to each merged text field of a catalog entry.
pub const DEFAULT_TEXT_CAP: usize = 12_000;

/// Engine configuration.
///
/// The cutoff and suggestion limit are heuristics, not contracts; tune them
/// against the live catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Minimum fuzzy similarity (0.0 to 1.0) for a title to count as a match.
    ///
    /// Default: 0.55.
    pub match_cutoff: f64,

    /// How many titles to offer as suggestions.
    ///
    /// Default: 3.
    pub suggestion_limit: usize,

    /// Characters of description used for general overviews.
    ///
    /// Default: 300.
    pub overview_chars: usize,

    /// Character cap for each merged description/specs/features field.
    ///
    /// Default: 12,000.
    pub text_cap: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            match_cutoff: 0.55,
            suggestion_limit: 3,
            overview_chars: 300,
            text_cap: DEFAULT_TEXT_CAP,
        }
    }
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fuzzy match cutoff. Values outside 0.0..=1.0 are clamped.
    pub fn with_match_cutoff(mut self, cutoff: f64) -> Self {
        self.match_cutoff = if cutoff.is_finite() {
            cutoff.clamp(0.0, 1.0)
        } else {
            Self::default().match_cutoff
        };
        self
    }

    pub fn with_suggestion_limit(mut self, limit: usize) -> Self {
        self.suggestion_limit = limit;
        self
    }

    pub fn with_overview_chars(mut self, chars: usize) -> Self {
        self.overview_chars = chars;
        self
    }

    pub fn with_text_cap(mut self, cap: usize) -> Self {
        self.text_cap = cap;
        self
    }

    /// Cutoff on the 0-100 similarity scale.
    pub fn score_threshold(&self) -> u8 {
        (self.match_cutoff * 100.0).floor() as u8
    }
}
