//! AnalysisPipeline: owns the stage engines and runs the single pass.

use rayon::prelude::*;
use tracing::info;

use revlens_core::config::RevlensConfig;
use revlens_core::errors::RevlensResult;
use revlens_core::models::{AnalyzedReview, RawReview, ThemeKeywordSummary};
use revlens_keywords::KeywordExtractor;
use revlens_nlp::Normalizer;
use revlens_report::AnalysisSummary;
use revlens_sentiment::SentimentEngine;
use revlens_themes::ThemeTagger;

/// Everything one analysis run produces.
#[derive(Debug)]
pub struct AnalysisRun {
    pub records: Vec<AnalyzedReview>,
    pub keywords: ThemeKeywordSummary,
    pub summary: AnalysisSummary,
}

/// The assembled pipeline.
///
/// Construction loads every model resource (normalizer tables, sentiment
/// provider) exactly once; any failure there is configuration-fatal. After
/// that the pipeline is read-only and `run` can be called repeatedly.
pub struct AnalysisPipeline {
    normalizer: Normalizer,
    sentiment: SentimentEngine,
    tagger: ThemeTagger,
    extractor: KeywordExtractor,
}

impl AnalysisPipeline {
    pub fn new(config: &RevlensConfig) -> RevlensResult<Self> {
        let normalizer = Normalizer::load(&config.normalizer)?;
        let sentiment = SentimentEngine::from_config(&config.sentiment)?;
        let tagger = ThemeTagger::new(&config.themes);
        let extractor = KeywordExtractor::new(config.keywords.clone(), config.themes.clone());
        info!("analysis pipeline initialized");
        Ok(Self {
            normalizer,
            sentiment,
            tagger,
            extractor,
        })
    }

    /// Run the whole pass over a review set.
    ///
    /// Inputs are never mutated. A sentiment stage failure aborts the run
    /// with no partial output; reviews with missing text flow through with
    /// empty lemmas and the default theme.
    pub fn run(&self, reviews: &[RawReview]) -> RevlensResult<AnalysisRun> {
        info!(reviews = reviews.len(), "analysis run started");

        // Normalize and tag: independent per review, order-preserving.
        let derived: Vec<(Vec<String>, Vec<String>)> = reviews
            .par_iter()
            .map(|r| {
                let lemmas = self.normalizer.normalize(r.text.as_deref());
                let themes = self.tagger.tag(&lemmas);
                (lemmas, themes)
            })
            .collect();

        // Sentiment over raw texts, sequential-batch contract.
        let texts: Vec<String> = reviews
            .iter()
            .map(|r| r.text_or_empty().to_string())
            .collect();
        let sentiments = self.sentiment.classify_all(&texts)?;

        let records: Vec<AnalyzedReview> = reviews
            .iter()
            .zip(derived)
            .zip(sentiments)
            .map(|((review, (lemmas, themes)), sentiment)| AnalyzedReview {
                review: review.clone(),
                lemmas,
                sentiment: Some(sentiment),
                themes,
            })
            .collect();

        let keywords = self.extractor.extract(&records, &self.normalizer);
        let summary = AnalysisSummary::compute(&records, keywords.clone());

        info!(records = records.len(), "analysis run complete");
        Ok(AnalysisRun {
            records,
            keywords,
            summary,
        })
    }
}
