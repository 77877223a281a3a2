use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::sentiment::Sentiment;

/// A raw review as handed over by the acquisition collaborator.
///
/// Immutable once it reaches the analytics core. `text` is `None` when the
/// source delivered a non-textual or missing body; the core never drops such
/// rows, they flow through with empty lemmas and the default theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawReview {
    pub text: Option<String>,
    /// Star rating, 1..=5.
    pub rating: u8,
    pub date: NaiveDate,
    pub bank: String,
    pub source: String,
}

impl RawReview {
    /// Review body, or the empty string when absent.
    pub fn text_or_empty(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }
}

/// A fully analyzed review: the raw input plus everything the pipeline
/// derived from it. Terminal output of the core, consumed by the reporting
/// and persistence collaborators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzedReview {
    pub review: RawReview,
    /// Lowercase lemma tokens; empty when the review body was absent.
    pub lemmas: Vec<String>,
    /// `None` only when the sentiment stage did not run for this record.
    pub sentiment: Option<Sentiment>,
    /// Assigned themes in theme-definition order. Never empty: falls back
    /// to the default theme when no trigger keyword fires.
    pub themes: Vec<String>,
}

impl AnalyzedReview {
    /// Themes rendered as the comma-joined export form.
    pub fn themes_joined(&self) -> String {
        self.themes.join(", ")
    }
}

/// Fan each (review, assigned theme) pair out into one membership.
///
/// A review tagged with themes {A, B} appears twice in the output, once per
/// theme. Both the keyword extractor and the reporter build their per-theme
/// groupings from this single explode step.
pub fn exploded(reviews: &[AnalyzedReview]) -> Vec<(&AnalyzedReview, &str)> {
    reviews
        .iter()
        .flat_map(|r| r.themes.iter().map(move |t| (r, t.as_str())))
        .collect()
}
