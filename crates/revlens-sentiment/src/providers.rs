//! Provider construction from configuration.

use revlens_core::config::SentimentConfig;
use revlens_core::errors::{RevlensResult, SentimentError};
use revlens_core::traits::ISentimentProvider;

use crate::lexicon::LexiconProvider;

/// Build the provider named in the config.
///
/// An unknown provider name is configuration-fatal: the whole run aborts
/// before any review is classified.
pub fn create_provider(config: &SentimentConfig) -> RevlensResult<Box<dyn ISentimentProvider>> {
    match config.provider.as_str() {
        "lexicon" => Ok(Box::new(LexiconProvider::new())),
        other => Err(SentimentError::ProviderUnavailable {
            provider: other.to_string(),
        }
        .into()),
    }
}
