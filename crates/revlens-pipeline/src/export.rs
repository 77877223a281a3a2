//! The exported tabular contract consumed by storage and visualization
//! collaborators.

use serde::{Deserialize, Serialize};

use chrono::NaiveDate;
use revlens_core::models::AnalyzedReview;

/// One exported row. Column set and naming are the persisted contract:
/// `{review, rating, date, bank, sentiment_label, sentiment_score, theme}`,
/// with `theme` the comma-joined assigned themes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRow {
    pub review: String,
    pub rating: u8,
    pub date: NaiveDate,
    pub bank: String,
    pub sentiment_label: Option<String>,
    pub sentiment_score: Option<f64>,
    pub theme: String,
}

/// Flatten analyzed records into export rows, in input order.
pub fn export_rows(records: &[AnalyzedReview]) -> Vec<ExportRow> {
    records
        .iter()
        .map(|r| ExportRow {
            review: r.review.text_or_empty().to_string(),
            rating: r.review.rating,
            date: r.review.date,
            bank: r.review.bank.clone(),
            sentiment_label: r.sentiment.map(|s| s.label.to_string()),
            sentiment_score: r.sentiment.map(|s| s.score),
            theme: r.themes_joined(),
        })
        .collect()
}
