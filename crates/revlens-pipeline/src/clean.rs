//! Optional input cleaning, mirroring the acquisition-side hygiene step.
//!
//! The analytics core itself tolerates missing text; callers that want the
//! upstream behavior (drop unusable rows, dedupe, trim) can run this first.

use std::collections::HashSet;

use tracing::info;

use revlens_core::models::RawReview;

/// Drop reviews with missing or blank text and exact duplicate bodies,
/// trimming surrounding whitespace. First occurrence wins on duplicates.
pub fn clean_reviews(reviews: Vec<RawReview>) -> Vec<RawReview> {
    let before = reviews.len();
    let mut seen: HashSet<String> = HashSet::new();
    let mut out = Vec::with_capacity(before);

    for mut review in reviews {
        let trimmed = match review.text.as_deref().map(str::trim) {
            Some(t) if !t.is_empty() => t.to_string(),
            _ => continue,
        };
        if !seen.insert(trimmed.clone()) {
            continue;
        }
        review.text = Some(trimmed);
        out.push(review);
    }

    info!(before, after = out.len(), "input cleaning complete");
    out
}
