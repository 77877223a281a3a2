use serde::{Deserialize, Serialize};

use crate::constants::NO_KEYWORDS_SENTINEL;

/// Keywords extracted for one theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeKeywords {
    pub theme: String,
    /// Up to `top_terms` keywords ranked by aggregate TF-IDF weight, or the
    /// single sentinel `"N/A"` when the corpus produced no vocabulary.
    pub keywords: Vec<String>,
}

impl ThemeKeywords {
    /// Whether this entry carries the empty-vocabulary sentinel.
    pub fn is_sentinel(&self) -> bool {
        self.keywords.len() == 1 && self.keywords[0] == NO_KEYWORDS_SENTINEL
    }
}

/// Per-theme keyword summary for one analysis run.
///
/// Ordered by theme-definition order; themes below the corpus-size gate are
/// omitted entirely; the default theme never appears. A pure report
/// artifact, never persisted as authoritative state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemeKeywordSummary {
    pub entries: Vec<ThemeKeywords>,
}

impl ThemeKeywordSummary {
    pub fn push(&mut self, theme: impl Into<String>, keywords: Vec<String>) {
        self.entries.push(ThemeKeywords {
            theme: theme.into(),
            keywords,
        });
    }

    pub fn get(&self, theme: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|e| e.theme == theme)
            .map(|e| e.keywords.as_slice())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ThemeKeywords> {
        self.entries.iter()
    }
}
