//! # revlens-core
//!
//! Foundation crate for the revlens review-analytics pipeline.
//! Defines all shared models, errors, config, constants, and traits.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{RevlensConfig, ThemeConfig, ThemeDefinition};
pub use errors::{RevlensError, RevlensResult};
pub use models::{
    AnalyzedReview, RawReview, Sentiment, SentimentLabel, SentimentPrediction,
    ThemeKeywordSummary,
};
