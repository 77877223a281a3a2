//! SentimentEngine: batched classification with batch-atomic failure.

use std::fmt;

use tracing::{debug, info};

use revlens_core::config::SentimentConfig;
use revlens_core::errors::{RevlensResult, SentimentError};
use revlens_core::models::Sentiment;
use revlens_core::traits::ISentimentProvider;

use crate::providers;

/// Batched sentiment classifier.
///
/// Holds the provider handle for the whole run; construction fails when the
/// provider's model resource is unavailable. Batch size bounds peak memory
/// only; batch placement never changes a per-item result.
pub struct SentimentEngine {
    provider: Box<dyn ISentimentProvider>,
    config: SentimentConfig,
}

impl SentimentEngine {
    /// Wrap an already constructed provider.
    pub fn new(
        provider: Box<dyn ISentimentProvider>,
        config: SentimentConfig,
    ) -> RevlensResult<Self> {
        if !provider.is_available() {
            return Err(SentimentError::ProviderUnavailable {
                provider: provider.name().to_string(),
            }
            .into());
        }
        info!(
            provider = provider.name(),
            batch_size = config.batch_size,
            "sentiment engine initialized"
        );
        Ok(Self { provider, config })
    }

    /// Build the provider named in the config.
    pub fn from_config(config: &SentimentConfig) -> RevlensResult<Self> {
        let provider = providers::create_provider(config)?;
        Self::new(provider, config.clone())
    }

    /// Classify every text, in input order.
    ///
    /// Stage-fatal: any batch error aborts the whole call with no partial
    /// results.
    pub fn classify_all(&self, texts: &[String]) -> RevlensResult<Vec<Sentiment>> {
        let batch_size = self.config.batch_size.max(1);
        let progress_every = self.config.progress_every_batches.max(1);
        let mut out = Vec::with_capacity(texts.len());

        for (batch_index, batch) in texts.chunks(batch_size).enumerate() {
            let predictions = self.provider.classify_batch(batch).map_err(|e| {
                SentimentError::BatchFailed {
                    batch_index,
                    reason: e.to_string(),
                }
            })?;
            if predictions.len() != batch.len() {
                return Err(SentimentError::BatchFailed {
                    batch_index,
                    reason: format!(
                        "provider returned {} predictions for {} texts",
                        predictions.len(),
                        batch.len()
                    ),
                }
                .into());
            }
            out.extend(predictions.into_iter().map(Sentiment::from_prediction));

            if (batch_index + 1) % progress_every == 0 {
                debug!(
                    processed = out.len(),
                    total = texts.len(),
                    "sentiment progress"
                );
            }
        }

        info!(reviews = out.len(), "sentiment classification complete");
        Ok(out)
    }

    /// Active provider name.
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }
}

// Derive is unavailable over the boxed provider; report its name instead.
impl fmt::Debug for SentimentEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SentimentEngine")
            .field("provider", &self.provider.name())
            .field("config", &self.config)
            .finish()
    }
}
