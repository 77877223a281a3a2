use std::io::Write;

use revlens_core::config::NormalizerConfig;
use revlens_core::errors::RevlensError;
use revlens_core::traits::ILemmatizer;
use revlens_nlp::Normalizer;

fn normalizer() -> Normalizer {
    Normalizer::load(&NormalizerConfig::default()).unwrap()
}

#[test]
fn normalizes_review_into_lemma_sequence() {
    let n = normalizer();
    assert_eq!(
        n.normalize(Some("The app was crashing and running very slowly")),
        vec!["app", "crash", "run", "slowly"]
    );
}

#[test]
fn inflected_trigger_words_reach_their_base_form() {
    let n = normalizer();
    assert_eq!(
        n.normalize(Some("The new layout is confusing and I stay confused")),
        vec!["new", "layout", "confuse", "stay", "confuse"]
    );
}

#[test]
fn missing_text_yields_empty_sequence() {
    let n = normalizer();
    assert!(n.normalize(None).is_empty());
}

#[test]
fn blank_and_punctuation_only_text_yields_empty_sequence() {
    let n = normalizer();
    assert!(n.normalize(Some("")).is_empty());
    assert!(n.normalize(Some("!!! ... ???")).is_empty());
}

#[test]
fn drops_tokens_with_digits() {
    let n = normalizer();
    assert_eq!(
        n.normalize(Some("paid 500 birr via app2 yesterday")),
        vec!["pay", "birr", "yesterday"]
    );
}

#[test]
fn is_deterministic() {
    let n = normalizer();
    let text = Some("Login keeps failing, transfers stuck pending for days");
    assert_eq!(n.normalize(text), n.normalize(text));
}

#[test]
fn keeps_theme_trigger_vocabulary_in_base_form() {
    let n = normalizer();
    assert_eq!(
        n.normalize(Some("Transfers failed, the app crashed and froze on update")),
        vec!["transfer", "fail", "app", "crash", "freeze", "update"]
    );
}

#[test]
fn extra_stopwords_file_extends_the_builtin_set() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "# corpus noise\nbirr").unwrap();
    let config = NormalizerConfig {
        extra_stopwords_path: Some(file.path().to_path_buf()),
    };
    let n = Normalizer::load(&config).unwrap();
    assert_eq!(n.normalize(Some("paid birr via app")), vec!["pay", "app"]);
}

#[test]
fn missing_resource_file_fails_at_load_time() {
    let config = NormalizerConfig {
        extra_stopwords_path: Some("/nonexistent/stopwords.txt".into()),
    };
    let err = Normalizer::load(&config).unwrap_err();
    assert!(matches!(err, RevlensError::Nlp(_)));
}
