//! Error taxonomy for the pipeline.
//!
//! Per-subsystem error enums fold into the top-level [`RevlensError`].
//! Configuration and stage failures abort the run; per-theme and per-input
//! issues degrade into sentinel values and never surface here.

mod keyword_error;
mod nlp_error;
mod sentiment_error;

pub use keyword_error::KeywordError;
pub use nlp_error::NlpError;
pub use sentiment_error::SentimentError;

/// Top-level error for the revlens workspace.
#[derive(Debug, thiserror::Error)]
pub enum RevlensError {
    #[error("nlp error: {0}")]
    Nlp(#[from] NlpError),

    #[error("sentiment error: {0}")]
    Sentiment(#[from] SentimentError),

    #[error("keyword error: {0}")]
    Keyword(#[from] KeywordError),

    #[error("config error: {reason}")]
    Config { reason: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the workspace.
pub type RevlensResult<T> = Result<T, RevlensError>;
