//! Shared data models.

mod review;
mod sentiment;
mod summary;

pub use review::{exploded, AnalyzedReview, RawReview};
pub use sentiment::{Sentiment, SentimentLabel, SentimentPrediction};
pub use summary::{ThemeKeywordSummary, ThemeKeywords};
