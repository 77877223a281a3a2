use proptest::prelude::*;
use revlens_core::config::ThemeConfig;
use revlens_themes::ThemeTagger;

fn any_lemmas() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[a-z]{1,12}", 0..30)
}

proptest! {
    #[test]
    fn tag_is_never_empty(lemmas in any_lemmas()) {
        let tagger = ThemeTagger::new(&ThemeConfig::default());
        prop_assert!(!tagger.tag(&lemmas).is_empty());
    }

    #[test]
    fn tag_is_total_and_duplicate_free(lemmas in any_lemmas()) {
        let tagger = ThemeTagger::new(&ThemeConfig::default());
        let assigned = tagger.tag(&lemmas);
        let unique: std::collections::HashSet<&String> = assigned.iter().collect();
        prop_assert_eq!(unique.len(), assigned.len());
    }

    /// Adding a token that triggers another theme can only add that theme;
    /// already-assigned themes survive.
    #[test]
    fn tagging_is_monotonic_in_tokens(lemmas in any_lemmas(), extra in "[a-z]{1,12}") {
        let config = ThemeConfig::default();
        let tagger = ThemeTagger::new(&config);
        let before = tagger.tag(&lemmas);

        let mut grown = lemmas.clone();
        grown.push(extra);
        let after = tagger.tag(&grown);

        for theme in &before {
            if config.is_default(theme) {
                continue;
            }
            prop_assert!(
                after.contains(theme),
                "theme {} vanished after adding a token",
                theme
            );
        }
    }
}
