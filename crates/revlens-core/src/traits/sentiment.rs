use crate::errors::RevlensResult;
use crate::models::SentimentPrediction;

/// Binary sentiment-classification capability.
///
/// Providers classify a batch of texts into (label, confidence) pairs,
/// one per input, in input order. Per-item results must not depend on
/// batch placement.
pub trait ISentimentProvider: Send + Sync {
    /// Classify a batch of texts. Must return exactly one prediction per
    /// input text, or an error for the whole batch.
    fn classify_batch(&self, texts: &[String]) -> RevlensResult<Vec<SentimentPrediction>>;

    /// Human-readable provider name.
    fn name(&self) -> &str;

    /// Whether the underlying model resource is loaded and usable.
    fn is_available(&self) -> bool;
}
