//! Word-list sentiment provider.
//!
//! A deterministic scorer over normalized tokens, standing behind the same
//! provider seam an external transformer model would use. Confidence is the
//! share of polarity hits carried by the dominant side; a text with no hits
//! at all scores exactly 0.

use std::collections::HashSet;

use once_cell::sync::Lazy;

use revlens_core::errors::RevlensResult;
use revlens_core::models::{SentimentLabel, SentimentPrediction};
use revlens_core::traits::ISentimentProvider;
use revlens_nlp::tokenize;

static POSITIVE: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    const WORDS: &[&str] = &[
        "good", "great", "excellent", "love", "amazing", "wonderful", "happy", "fantastic",
        "awesome", "best", "nice", "easy", "fast", "smooth", "simple", "helpful", "reliable",
        "perfect", "useful", "convenient", "quick", "secure", "satisfied", "thanks", "thank",
        "recommend", "impressive",
    ];
    WORDS.iter().copied().collect()
});

static NEGATIVE: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    const WORDS: &[&str] = &[
        "bad", "terrible", "awful", "hate", "horrible", "worst", "sad", "angry", "disappointed",
        "disappointing", "poor", "slow", "crash", "crashes", "crashing", "bug", "buggy", "fail",
        "fails", "failed", "error", "errors", "broken", "useless", "annoying", "stuck", "freeze",
        "freezes", "frozen", "problem", "problems", "scam", "waste", "worthless", "frustrating",
    ];
    WORDS.iter().copied().collect()
});

/// Built-in lexicon-based sentiment provider.
#[derive(Debug, Default)]
pub struct LexiconProvider;

impl LexiconProvider {
    pub fn new() -> Self {
        Self
    }

    fn classify_one(&self, text: &str) -> SentimentPrediction {
        let mut positive = 0usize;
        let mut negative = 0usize;
        for token in tokenize::word_tokens(text) {
            if POSITIVE.contains(token.as_str()) {
                positive += 1;
            }
            if NEGATIVE.contains(token.as_str()) {
                negative += 1;
            }
        }
        let total = positive + negative;
        if total == 0 || positive == negative {
            // No polarity signal: positive label at the confidence floor, so
            // the signed score lands on 0 (or 0.5 for an exact tie).
            let confidence = if total == 0 { 0.0 } else { 0.5 };
            return SentimentPrediction {
                label: SentimentLabel::Positive,
                confidence,
            };
        }
        if positive > negative {
            SentimentPrediction {
                label: SentimentLabel::Positive,
                confidence: positive as f64 / total as f64,
            }
        } else {
            SentimentPrediction {
                label: SentimentLabel::Negative,
                confidence: negative as f64 / total as f64,
            }
        }
    }
}

impl ISentimentProvider for LexiconProvider {
    fn classify_batch(&self, texts: &[String]) -> RevlensResult<Vec<SentimentPrediction>> {
        Ok(texts.iter().map(|t| self.classify_one(t)).collect())
    }

    fn name(&self) -> &str {
        "lexicon"
    }

    fn is_available(&self) -> bool {
        true
    }
}
