//! Workspace configuration.
//!
//! One section per subsystem, each with serde defaults so a partial TOML
//! file (or an empty one) yields a fully usable configuration. The theme
//! mapping is part of the config and is injected explicitly into the tagger
//! and extractor, never ambient global state, so tests can substitute
//! smaller fixtures.

mod keyword_config;
mod normalizer_config;
mod sentiment_config;
mod theme_config;

pub use keyword_config::KeywordConfig;
pub use normalizer_config::NormalizerConfig;
pub use sentiment_config::SentimentConfig;
pub use theme_config::{ThemeConfig, ThemeDefinition};

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{RevlensError, RevlensResult};

/// Default values for tunable configuration fields.
pub mod defaults {
    /// Sentiment classification batch size.
    pub const DEFAULT_BATCH_SIZE: usize = 32;
    /// Emit a progress event every N batches.
    pub const DEFAULT_PROGRESS_EVERY_BATCHES: usize = 5;
    /// Built-in sentiment provider name.
    pub const DEFAULT_PROVIDER: &str = "lexicon";
    /// Minimum reviews a theme corpus needs before TF-IDF is meaningful.
    pub const DEFAULT_MIN_CORPUS_SIZE: usize = 10;
    /// Keywords kept per theme.
    pub const DEFAULT_TOP_TERMS: usize = 10;
}

/// Top-level configuration for an analysis run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevlensConfig {
    pub normalizer: NormalizerConfig,
    pub sentiment: SentimentConfig,
    pub keywords: KeywordConfig,
    pub themes: ThemeConfig,
}

impl RevlensConfig {
    /// Parse a configuration from a TOML string. Missing sections and
    /// fields fall back to defaults.
    pub fn from_toml(s: &str) -> RevlensResult<Self> {
        toml::from_str(s).map_err(|e| RevlensError::Config {
            reason: e.to_string(),
        })
    }

    /// Load a configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> RevlensResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml(&raw)
    }
}
