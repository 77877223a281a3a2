/// Sentiment subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum SentimentError {
    /// The configured provider could not be initialized. Configuration-fatal.
    #[error("sentiment provider '{provider}' unavailable")]
    ProviderUnavailable { provider: String },

    /// A classification batch failed. Stage-fatal: the whole run carries no
    /// partial sentiment results.
    #[error("sentiment batch {batch_index} failed: {reason}")]
    BatchFailed { batch_index: usize, reason: String },
}
