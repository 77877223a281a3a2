use revlens_core::errors::*;

#[test]
fn nlp_resource_unavailable_carries_resource_and_reason() {
    let err = NlpError::ResourceUnavailable {
        resource: "stopwords".into(),
        reason: "file not found".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("stopwords"));
    assert!(msg.contains("file not found"));
}

#[test]
fn sentiment_provider_unavailable_carries_provider() {
    let err = SentimentError::ProviderUnavailable {
        provider: "lexicon".into(),
    };
    assert!(err.to_string().contains("lexicon"));
}

#[test]
fn sentiment_batch_failed_carries_index_and_reason() {
    let err = SentimentError::BatchFailed {
        batch_index: 7,
        reason: "model crashed".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains('7'));
    assert!(msg.contains("model crashed"));
}

// --- From impls ---

#[test]
fn nlp_error_converts_to_revlens_error() {
    let nlp_err = NlpError::ResourceUnavailable {
        resource: "lemma table".into(),
        reason: "corrupt".into(),
    };
    let err: RevlensError = nlp_err.into();
    assert!(matches!(err, RevlensError::Nlp(_)));
}

#[test]
fn sentiment_error_converts_to_revlens_error() {
    let sent_err = SentimentError::BatchFailed {
        batch_index: 0,
        reason: "oom".into(),
    };
    let err: RevlensError = sent_err.into();
    assert!(matches!(err, RevlensError::Sentiment(_)));
}

#[test]
fn keyword_error_converts_to_revlens_error() {
    let kw_err = KeywordError::EmptyVocabulary;
    let err: RevlensError = kw_err.into();
    assert!(matches!(err, RevlensError::Keyword(_)));
}

#[test]
fn io_error_converts_to_revlens_error() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let err: RevlensError = io_err.into();
    assert!(matches!(err, RevlensError::Io(_)));
}

#[test]
fn serialization_error_converts_to_revlens_error() {
    let json_err = serde_json::from_str::<String>("not valid json").unwrap_err();
    let err: RevlensError = json_err.into();
    assert!(matches!(err, RevlensError::Serialization(_)));
}
