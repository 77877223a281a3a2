//! AnalysisSummary: the full KPI bundle for one run, with plain-text
//! rendering for the console collaborator.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use revlens_core::constants::COVERAGE_TARGET_PCT;
use revlens_core::models::{AnalyzedReview, ThemeKeywordSummary};

use crate::kpi::{
    mean_sentiment_by_bank, mean_sentiment_by_bank_rating, sentiment_coverage,
    theme_counts_by_bank, BankSentiment, RatingSentiment, ThemeCount,
};

/// Aggregate statistics for one analysis run. A presentation artifact:
/// computing it never alters the underlying records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub coverage_pct: f64,
    pub coverage_met: bool,
    pub by_bank: Vec<BankSentiment>,
    pub by_bank_rating: Vec<RatingSentiment>,
    pub theme_counts: Vec<ThemeCount>,
    pub keywords: ThemeKeywordSummary,
}

impl AnalysisSummary {
    pub fn compute(reviews: &[AnalyzedReview], keywords: ThemeKeywordSummary) -> Self {
        let coverage_pct = sentiment_coverage(reviews);
        Self {
            coverage_pct,
            coverage_met: coverage_pct > COVERAGE_TARGET_PCT,
            by_bank: mean_sentiment_by_bank(reviews),
            by_bank_rating: mean_sentiment_by_bank_rating(reviews),
            theme_counts: theme_counts_by_bank(reviews),
            keywords,
        }
    }

    /// Render the summary as the console report.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "--- Analysis Summary & KPI Check ---");
        let _ = writeln!(
            out,
            "Sentiment Analysis Coverage: {:.2}% (Target: >{:.0}%)",
            self.coverage_pct, COVERAGE_TARGET_PCT
        );
        let _ = writeln!(
            out,
            "KPI: Sentiment coverage {}.",
            if self.coverage_met { "MET" } else { "NOT MET" }
        );

        let _ = writeln!(out, "\n--- Average Sentiment Score by Bank (-1 to 1) ---");
        for b in &self.by_bank {
            let _ = writeln!(out, "{:<40} {:+.3} ({} reviews)", b.bank, b.mean_score, b.reviews);
        }

        let _ = writeln!(out, "\n--- Average Sentiment by Bank and Rating ---");
        for cell in &self.by_bank_rating {
            let _ = writeln!(
                out,
                "{:<40} {} stars  {:+.2}",
                cell.bank, cell.rating, cell.mean_score
            );
        }

        let _ = writeln!(out, "\n--- Theme Distribution per Bank ---");
        for t in &self.theme_counts {
            let _ = writeln!(out, "{:<40} {:<28} {}", t.bank, t.theme, t.count);
        }

        let _ = writeln!(out, "\n--- Top Keywords per Identified Theme (TF-IDF) ---");
        for entry in self.keywords.iter() {
            let _ = writeln!(out, "  - {}: {}", entry.theme, entry.keywords.join(", "));
        }
        out
    }
}
