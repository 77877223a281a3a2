//! KeywordExtractor: per-theme corpora, corpus-size gating, parallel fits.

use rayon::prelude::*;
use tracing::{info, warn};

use revlens_core::config::{KeywordConfig, ThemeConfig};
use revlens_core::constants::NO_KEYWORDS_SENTINEL;
use revlens_core::models::{exploded, AnalyzedReview, ThemeKeywordSummary};
use revlens_core::traits::ILemmatizer;

use crate::tfidf::TfidfModel;

/// Group review texts into per-theme corpora via the explode step.
///
/// One corpus membership per (review, assigned theme) pair: a review tagged
/// {A, B} contributes its text to both corpora. Corpora come back in
/// theme-definition order, the default theme last; themes with no members
/// are omitted.
pub fn theme_corpora<'r>(
    reviews: &'r [AnalyzedReview],
    themes: &ThemeConfig,
) -> Vec<(String, Vec<&'r str>)> {
    let pairs = exploded(reviews);
    let mut order: Vec<&str> = themes.theme_names().collect();
    order.push(themes.default_theme.as_str());

    order
        .into_iter()
        .filter_map(|name| {
            let members: Vec<&str> = pairs
                .iter()
                .filter(|(_, theme)| *theme == name)
                .map(|(review, _)| review.review.text_or_empty())
                .collect();
            if members.is_empty() {
                None
            } else {
                Some((name.to_string(), members))
            }
        })
        .collect()
}

/// Extracts up to `top_terms` representative keywords per qualifying theme.
///
/// Read-only over the analyzed records; theme assignments are never touched.
#[derive(Debug)]
pub struct KeywordExtractor {
    config: KeywordConfig,
    themes: ThemeConfig,
}

impl KeywordExtractor {
    pub fn new(config: KeywordConfig, themes: ThemeConfig) -> Self {
        Self { config, themes }
    }

    /// Fit one TF-IDF model per qualifying theme and rank its terms.
    ///
    /// The default theme is excluded (not analytically interesting); themes
    /// below the corpus-size gate are omitted from the summary; a theme
    /// whose corpus tokenizes to an empty vocabulary records the `"N/A"`
    /// sentinel instead of failing the run.
    pub fn extract(
        &self,
        reviews: &[AnalyzedReview],
        tokenizer: &dyn ILemmatizer,
    ) -> ThemeKeywordSummary {
        let corpora: Vec<(String, Vec<&str>)> = theme_corpora(reviews, &self.themes)
            .into_iter()
            .filter(|(theme, _)| !self.themes.is_default(theme))
            .filter(|(theme, members)| {
                if members.len() < self.config.min_corpus_size {
                    warn!(
                        theme = theme.as_str(),
                        reviews = members.len(),
                        min = self.config.min_corpus_size,
                        "skipping keyword extraction: insufficient corpus"
                    );
                    false
                } else {
                    true
                }
            })
            .collect();

        // Per-theme fits are independent; model state is local to each fit.
        let entries: Vec<(String, Vec<String>)> = corpora
            .par_iter()
            .map(|(theme, members)| {
                let docs: Vec<Vec<String>> = members
                    .iter()
                    .map(|text| tokenizer.lemmatize(text))
                    .collect();
                let keywords = match TfidfModel::fit(&docs) {
                    Ok(model) => model.top_terms(self.config.top_terms),
                    Err(e) => {
                        warn!(
                            theme = theme.as_str(),
                            error = %e,
                            "keyword extraction degraded to sentinel"
                        );
                        vec![NO_KEYWORDS_SENTINEL.to_string()]
                    }
                };
                (theme.clone(), keywords)
            })
            .collect();

        let mut summary = ThemeKeywordSummary::default();
        for (theme, keywords) in entries {
            summary.push(theme, keywords);
        }
        info!(themes = summary.entries.len(), "keyword extraction complete");
        summary
    }
}
