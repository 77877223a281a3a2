//! # revlens-report
//!
//! Aggregate KPIs and grouped summaries over the analyzed record set, plus
//! a plain-text rendering for the console collaborator. Every function here
//! is a pure read over `&[AnalyzedReview]`.

pub mod kpi;
pub mod summary;

pub use kpi::{
    mean_sentiment_by_bank, mean_sentiment_by_bank_rating, sentiment_coverage,
    theme_counts_by_bank, BankSentiment, RatingSentiment, ThemeCount,
};
pub use summary::AnalysisSummary;
