//! The [`Normalizer`] engine: raw review text → canonical lemma sequence.

use tracing::info;

use revlens_core::config::NormalizerConfig;
use revlens_core::errors::RevlensResult;
use revlens_core::traits::ILemmatizer;

use crate::lemma;
use crate::stopwords::StopwordFilter;
use crate::tokenize;

/// Turns raw text into lowercase lemma tokens, dropping stopwords,
/// punctuation, and non-alphabetic forms.
///
/// Language resources load once here; construction fails before any review
/// is processed when a configured resource is unavailable. After that the
/// engine is read-only and shareable across threads.
#[derive(Debug)]
pub struct Normalizer {
    stopwords: StopwordFilter,
}

impl Normalizer {
    /// Load the normalizer's language resources.
    pub fn load(config: &NormalizerConfig) -> RevlensResult<Self> {
        let stopwords = StopwordFilter::load(config)?;
        info!("normalizer loaded");
        Ok(Self { stopwords })
    }

    /// Normalize an optional review body. Missing text yields an empty
    /// sequence, never an error.
    pub fn normalize(&self, text: Option<&str>) -> Vec<String> {
        match text {
            Some(t) => self.lemmatize(t),
            None => Vec::new(),
        }
    }
}

impl ILemmatizer for Normalizer {
    fn lemmatize(&self, text: &str) -> Vec<String> {
        tokenize::word_tokens(text)
            .into_iter()
            .filter(|t| t.chars().all(|c| c.is_alphabetic()))
            .filter(|t| !self.stopwords.contains(t))
            .map(|t| lemma::lemma(&t))
            .collect()
    }

    fn name(&self) -> &str {
        "rule-based-en"
    }
}
