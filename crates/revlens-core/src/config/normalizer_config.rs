use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Text normalizer configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Optional file of additional stopwords, one per line. A path that
    /// cannot be read is a fatal configuration error at load time.
    pub extra_stopwords_path: Option<PathBuf>,
}
