/// Text normalization capability: raw text → ordered lemma sequence.
///
/// Implementations lowercase, segment, filter stopwords / punctuation /
/// non-alphabetic tokens, and map each survivor to its base form. Must be
/// deterministic for a fixed resource set.
pub trait ILemmatizer: Send + Sync {
    /// Normalize one text into lemma tokens.
    fn lemmatize(&self, text: &str) -> Vec<String>;

    /// Human-readable resource name.
    fn name(&self) -> &str;
}
