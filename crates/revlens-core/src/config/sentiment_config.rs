use serde::{Deserialize, Serialize};

use super::defaults;

/// Sentiment classifier configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SentimentConfig {
    /// Provider name. "lexicon" is the built-in word-list scorer.
    pub provider: String,
    /// Texts per classification batch. Batch placement never changes
    /// per-item results; this only bounds peak memory.
    pub batch_size: usize,
    /// Emit a progress event every N batches. Observability only.
    pub progress_every_batches: usize,
}

impl Default for SentimentConfig {
    fn default() -> Self {
        Self {
            provider: defaults::DEFAULT_PROVIDER.to_string(),
            batch_size: defaults::DEFAULT_BATCH_SIZE,
            progress_every_batches: defaults::DEFAULT_PROGRESS_EVERY_BATCHES,
        }
    }
}
