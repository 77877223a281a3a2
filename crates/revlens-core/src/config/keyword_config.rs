use serde::{Deserialize, Serialize};

use super::defaults;

/// Keyword extraction configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordConfig {
    /// Themes with fewer member reviews than this are skipped; TF-IDF
    /// weights are unreliable on tiny corpora.
    pub min_corpus_size: usize,
    /// Keywords kept per theme, ranked by aggregate corpus weight.
    pub top_terms: usize,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self {
            min_corpus_size: defaults::DEFAULT_MIN_CORPUS_SIZE,
            top_terms: defaults::DEFAULT_TOP_TERMS,
        }
    }
}
