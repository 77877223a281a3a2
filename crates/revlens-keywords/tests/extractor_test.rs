use chrono::NaiveDate;
use revlens_core::config::{KeywordConfig, ThemeConfig, ThemeDefinition};
use revlens_core::models::{AnalyzedReview, RawReview};
use revlens_core::traits::ILemmatizer;
use revlens_keywords::{theme_corpora, KeywordExtractor};

/// Whitespace tokenizer: keeps fixtures fully under test control.
struct SplitTokenizer;

impl ILemmatizer for SplitTokenizer {
    fn lemmatize(&self, text: &str) -> Vec<String> {
        text.split_whitespace().map(|w| w.to_string()).collect()
    }

    fn name(&self) -> &str {
        "split"
    }
}

fn fixture_themes() -> ThemeConfig {
    ThemeConfig {
        themes: vec![
            ThemeDefinition::new("Speed", &["slow"]),
            ThemeDefinition::new("Cost", &["fee"]),
        ],
        default_theme: "Other".into(),
    }
}

fn analyzed(text: &str, themes: &[&str]) -> AnalyzedReview {
    AnalyzedReview {
        review: RawReview {
            text: Some(text.to_string()),
            rating: 3,
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            bank: "CBE".into(),
            source: "Google Play Store".into(),
        },
        lemmas: vec![],
        sentiment: None,
        themes: themes.iter().map(|t| t.to_string()).collect(),
    }
}

fn config(min_corpus_size: usize) -> KeywordConfig {
    KeywordConfig {
        min_corpus_size,
        top_terms: 10,
    }
}

#[test]
fn corpora_fan_out_multi_theme_reviews_into_each_corpus() {
    let reviews = vec![
        analyzed("slow fee", &["Speed", "Cost"]),
        analyzed("slow app", &["Speed"]),
        analyzed("nothing", &["Other"]),
    ];
    let corpora = theme_corpora(&reviews, &fixture_themes());
    assert_eq!(corpora.len(), 3);
    assert_eq!(corpora[0].0, "Speed");
    assert_eq!(corpora[0].1, vec!["slow fee", "slow app"]);
    assert_eq!(corpora[1].0, "Cost");
    assert_eq!(corpora[1].1, vec!["slow fee"]);
    assert_eq!(corpora[2].0, "Other");
}

#[test]
fn themes_below_the_corpus_gate_are_omitted() {
    // 8 Speed members with a gate of 10: the theme is absent, not sentinel.
    let reviews: Vec<AnalyzedReview> = (0..8)
        .map(|i| analyzed(&format!("slow app {i}"), &["Speed"]))
        .collect();
    let extractor = KeywordExtractor::new(config(10), fixture_themes());
    let summary = extractor.extract(&reviews, &SplitTokenizer);
    assert!(summary.get("Speed").is_none());
    assert!(summary.is_empty());
}

#[test]
fn qualifying_theme_gets_ranked_keywords() {
    let reviews: Vec<AnalyzedReview> = (0..10)
        .map(|i| analyzed(&format!("slow transfer app{i}"), &["Speed"]))
        .collect();
    let extractor = KeywordExtractor::new(config(10), fixture_themes());
    let summary = extractor.extract(&reviews, &SplitTokenizer);
    let keywords = summary.get("Speed").unwrap();
    // Corpus-wide terms outrank the per-document unique ones.
    assert_eq!(&keywords[..2], &["slow".to_string(), "transfer".to_string()]);
}

#[test]
fn default_theme_is_never_extracted() {
    let reviews: Vec<AnalyzedReview> = (0..20)
        .map(|_| analyzed("whatever words", &["Other"]))
        .collect();
    let extractor = KeywordExtractor::new(config(10), fixture_themes());
    let summary = extractor.extract(&reviews, &SplitTokenizer);
    assert!(summary.get("Other").is_none());
    assert!(summary.is_empty());
}

#[test]
fn empty_vocabulary_degrades_to_the_sentinel() {
    // Texts that tokenize to nothing: enough members, no vocabulary.
    let reviews: Vec<AnalyzedReview> = (0..10).map(|_| analyzed("   ", &["Speed"])).collect();
    let extractor = KeywordExtractor::new(config(10), fixture_themes());
    let summary = extractor.extract(&reviews, &SplitTokenizer);
    assert_eq!(summary.get("Speed").unwrap(), &["N/A".to_string()][..]);
    assert!(summary.entries[0].is_sentinel());
}

#[test]
fn keywords_cap_at_top_terms() {
    let texts: Vec<String> = (0..12)
        .map(|i| format!("slow w{i}a w{i}b w{i}c w{i}d"))
        .collect();
    let reviews: Vec<AnalyzedReview> =
        texts.iter().map(|t| analyzed(t, &["Speed"])).collect();
    let extractor = KeywordExtractor::new(config(10), fixture_themes());
    let summary = extractor.extract(&reviews, &SplitTokenizer);
    assert_eq!(summary.get("Speed").unwrap().len(), 10);
}

#[test]
fn extraction_with_the_real_normalizer_produces_lemmas() {
    let normalizer =
        revlens_nlp::Normalizer::load(&revlens_core::config::NormalizerConfig::default()).unwrap();
    let reviews: Vec<AnalyzedReview> = (0..10)
        .map(|_| analyzed("The transfers were slow and kept failing", &["Speed"]))
        .collect();
    let extractor = KeywordExtractor::new(config(10), fixture_themes());
    let summary = extractor.extract(&reviews, &normalizer);
    let keywords = summary.get("Speed").unwrap();
    assert!(keywords.contains(&"transfer".to_string()));
    assert!(keywords.contains(&"fail".to_string()));
    assert!(!keywords.iter().any(|k| k == "the" || k == "and"));
}
