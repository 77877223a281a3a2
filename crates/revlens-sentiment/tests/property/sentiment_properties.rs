use proptest::prelude::*;
use revlens_core::config::SentimentConfig;
use revlens_core::models::SentimentLabel;
use revlens_sentiment::SentimentEngine;

fn engine(batch_size: usize) -> SentimentEngine {
    SentimentEngine::from_config(&SentimentConfig {
        batch_size,
        ..SentimentConfig::default()
    })
    .unwrap()
}

proptest! {
    #[test]
    fn score_sign_always_matches_label(texts in proptest::collection::vec(".{0,80}", 0..40)) {
        let out = engine(32).classify_all(&texts).unwrap();
        prop_assert_eq!(out.len(), texts.len());
        for s in out {
            prop_assert!(s.score.abs() <= 1.0);
            match s.label {
                SentimentLabel::Positive => prop_assert!(s.score >= 0.0),
                SentimentLabel::Negative => prop_assert!(s.score <= 0.0),
            }
        }
    }

    #[test]
    fn batch_size_never_changes_results(
        texts in proptest::collection::vec("[a-z ]{0,60}", 1..30),
        batch_size in 1usize..8,
    ) {
        let batched = engine(batch_size).classify_all(&texts).unwrap();
        let whole = engine(texts.len()).classify_all(&texts).unwrap();
        prop_assert_eq!(batched, whole);
    }
}
