/// Text-normalization subsystem errors.
///
/// All variants are configuration-fatal: they can only occur while the
/// normalizer loads its language resources, before any review is processed.
#[derive(Debug, thiserror::Error)]
pub enum NlpError {
    #[error("language resource '{resource}' unavailable: {reason}")]
    ResourceUnavailable { resource: String, reason: String },
}
