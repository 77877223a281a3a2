//! English stopword filtering.
//!
//! Ships a built-in function-word list; a config-supplied file can extend
//! it with corpus-specific noise words.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use tracing::info;

use revlens_core::config::NormalizerConfig;
use revlens_core::errors::NlpError;

/// Built-in English stopwords (function words, pronouns, auxiliaries).
static ENGLISH: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    const WORDS: &[&str] = &[
        "a", "about", "above", "after", "again", "against", "all", "almost", "also", "am", "an",
        "and", "any", "anything", "are", "as", "at", "be", "because", "been", "before", "being",
        "below", "between", "both", "but", "by", "can", "cannot", "could", "did", "do", "does",
        "doing", "down", "during", "each", "either", "else", "ever", "every", "everything", "few",
        "for", "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers",
        "herself", "him", "himself", "his", "how", "i", "if", "in", "into", "is", "it", "its",
        "itself", "just", "may", "me", "might", "more", "most", "much", "must", "my", "myself",
        "neither", "no", "nor", "not", "nothing", "now", "of", "off", "on", "once", "only", "or",
        "other", "our", "ours", "ourselves", "out", "over", "own", "really", "same", "shall",
        "she", "should", "since", "so", "some", "something", "still", "such", "than", "that",
        "the", "their", "theirs", "them", "themselves", "then", "there", "these", "they", "this",
        "those", "through", "to", "too", "under", "until", "up", "upon", "us", "very", "via", "was",
        "we", "were", "what", "when", "where", "whether", "which", "while", "who", "whom", "why",
        "will", "with", "within", "without", "would", "yet", "you", "your", "yours", "yourself",
        "yourselves",
    ];
    WORDS.iter().copied().collect()
});

/// Stopword filter: the built-in English set plus any configured extras.
#[derive(Debug)]
pub struct StopwordFilter {
    extra: HashSet<String>,
}

impl StopwordFilter {
    /// Load the filter. Reading a configured extras file that is missing or
    /// unreadable is a fatal configuration error.
    pub fn load(config: &NormalizerConfig) -> Result<Self, NlpError> {
        let mut extra = HashSet::new();
        if let Some(path) = &config.extra_stopwords_path {
            let raw = std::fs::read_to_string(path).map_err(|e| NlpError::ResourceUnavailable {
                resource: path.display().to_string(),
                reason: e.to_string(),
            })?;
            for line in raw.lines() {
                let word = line.trim().to_lowercase();
                if !word.is_empty() && !word.starts_with('#') {
                    extra.insert(word);
                }
            }
            info!(
                path = %path.display(),
                count = extra.len(),
                "loaded extra stopwords"
            );
        }
        Ok(Self { extra })
    }

    /// Whether a lowercase token is a stopword.
    pub fn contains(&self, token: &str) -> bool {
        ENGLISH.contains(token) || self.extra.contains(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_set_covers_function_words() {
        let filter = StopwordFilter::load(&NormalizerConfig::default()).unwrap();
        for word in ["the", "was", "and", "very", "is", "a", "this"] {
            assert!(filter.contains(word), "{word} should be a stopword");
        }
        for word in ["app", "crash", "slowly", "great", "thing"] {
            assert!(!filter.contains(word), "{word} should not be a stopword");
        }
    }

    #[test]
    fn missing_extras_file_is_resource_unavailable() {
        let config = NormalizerConfig {
            extra_stopwords_path: Some("/nonexistent/words.txt".into()),
        };
        let err = StopwordFilter::load(&config).unwrap_err();
        assert!(matches!(err, NlpError::ResourceUnavailable { .. }));
    }
}
