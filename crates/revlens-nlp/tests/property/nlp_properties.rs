use proptest::prelude::*;
use revlens_core::config::NormalizerConfig;
use revlens_nlp::Normalizer;

proptest! {
    #[test]
    fn output_tokens_are_lowercase_alphabetic(s in ".{0,200}") {
        let n = Normalizer::load(&NormalizerConfig::default()).unwrap();
        for token in n.normalize(Some(&s)) {
            prop_assert!(!token.is_empty());
            prop_assert!(token.chars().all(|c| c.is_alphabetic()));
            prop_assert!(!token.chars().any(|c| c.is_uppercase()));
        }
    }

    #[test]
    fn normalization_is_deterministic(s in ".{0,200}") {
        let n = Normalizer::load(&NormalizerConfig::default()).unwrap();
        prop_assert_eq!(n.normalize(Some(&s)), n.normalize(Some(&s)));
    }

    #[test]
    fn output_never_exceeds_input_word_count(s in "[a-zA-Z ]{0,200}") {
        let n = Normalizer::load(&NormalizerConfig::default()).unwrap();
        let words = s.split_whitespace().count();
        prop_assert!(n.normalize(Some(&s)).len() <= words);
    }
}
