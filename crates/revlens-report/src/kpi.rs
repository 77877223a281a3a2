//! Grouped statistics over analyzed reviews.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use revlens_core::models::{exploded, AnalyzedReview};

/// Mean sentiment for one bank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankSentiment {
    pub bank: String,
    pub mean_score: f64,
    pub reviews: usize,
}

/// Mean sentiment for one (bank, rating) cell of the 2-D summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingSentiment {
    pub bank: String,
    pub rating: u8,
    pub mean_score: f64,
}

/// Review count for one (bank, theme) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeCount {
    pub bank: String,
    pub theme: String,
    pub count: usize,
}

/// Share of reviews carrying a sentiment label, in percent. 0 for an empty
/// record set.
pub fn sentiment_coverage(reviews: &[AnalyzedReview]) -> f64 {
    if reviews.is_empty() {
        return 0.0;
    }
    let labeled = reviews.iter().filter(|r| r.sentiment.is_some()).count();
    labeled as f64 / reviews.len() as f64 * 100.0
}

/// Mean sentiment score per bank, sorted descending; equal means break by
/// bank name so the ordering is reproducible. Unlabeled reviews are left
/// out of both numerator and denominator.
pub fn mean_sentiment_by_bank(reviews: &[AnalyzedReview]) -> Vec<BankSentiment> {
    let mut sums: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for r in reviews {
        if let Some(s) = &r.sentiment {
            let entry = sums.entry(r.review.bank.as_str()).or_insert((0.0, 0));
            entry.0 += s.score;
            entry.1 += 1;
        }
    }
    let mut out: Vec<BankSentiment> = sums
        .into_iter()
        .map(|(bank, (sum, n))| BankSentiment {
            bank: bank.to_string(),
            mean_score: sum / n as f64,
            reviews: n,
        })
        .collect();
    out.sort_by(|a, b| {
        b.mean_score
            .partial_cmp(&a.mean_score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.bank.cmp(&b.bank))
    });
    out
}

/// Mean sentiment score per (bank, rating): the 2-D summary. Rows come out
/// sorted by bank, then rating.
pub fn mean_sentiment_by_bank_rating(reviews: &[AnalyzedReview]) -> Vec<RatingSentiment> {
    let mut sums: BTreeMap<(&str, u8), (f64, usize)> = BTreeMap::new();
    for r in reviews {
        if let Some(s) = &r.sentiment {
            let entry = sums
                .entry((r.review.bank.as_str(), r.review.rating))
                .or_insert((0.0, 0));
            entry.0 += s.score;
            entry.1 += 1;
        }
    }
    sums.into_iter()
        .map(|((bank, rating), (sum, n))| RatingSentiment {
            bank: bank.to_string(),
            rating,
            mean_score: sum / n as f64,
        })
        .collect()
}

/// Review counts per (bank, theme) pair, using the same explode logic as
/// keyword extraction: a review tagged {A, B} counts once under each.
/// Sorted by bank, then count descending, then theme name.
pub fn theme_counts_by_bank(reviews: &[AnalyzedReview]) -> Vec<ThemeCount> {
    let mut counts: BTreeMap<(&str, &str), usize> = BTreeMap::new();
    for (review, theme) in exploded(reviews) {
        *counts.entry((review.review.bank.as_str(), theme)).or_insert(0) += 1;
    }
    let mut out: Vec<ThemeCount> = counts
        .into_iter()
        .map(|((bank, theme), count)| ThemeCount {
            bank: bank.to_string(),
            theme: theme.to_string(),
            count,
        })
        .collect();
    out.sort_by(|a, b| {
        a.bank
            .cmp(&b.bank)
            .then_with(|| b.count.cmp(&a.count))
            .then_with(|| a.theme.cmp(&b.theme))
    });
    out
}
