/// Keyword-extraction subsystem errors.
///
/// These never abort a run: the extractor converts them into per-theme
/// sentinel entries.
#[derive(Debug, thiserror::Error)]
pub enum KeywordError {
    #[error("empty vocabulary: no terms survived tokenization")]
    EmptyVocabulary,

    #[error("empty corpus: no documents to fit")]
    EmptyCorpus,
}
