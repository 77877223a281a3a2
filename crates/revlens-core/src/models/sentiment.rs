use std::fmt;

use serde::{Deserialize, Serialize};

/// Binary sentiment label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SentimentLabel {
    Positive,
    Negative,
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SentimentLabel::Positive => write!(f, "POSITIVE"),
            SentimentLabel::Negative => write!(f, "NEGATIVE"),
        }
    }
}

/// Raw provider output: a label and an unsigned confidence in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentPrediction {
    pub label: SentimentLabel,
    pub confidence: f64,
}

/// Normalized sentiment: the label plus a signed polarity score.
///
/// Invariant: the score sign matches the label: negative labels carry
/// `score <= 0`, positive labels `score >= 0`, and `|score| <= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    pub label: SentimentLabel,
    pub score: f64,
}

impl Sentiment {
    /// Fold a raw prediction onto the signed polarity axis: confidence for
    /// positive labels, negated confidence for negative ones.
    pub fn from_prediction(pred: SentimentPrediction) -> Self {
        let confidence = pred.confidence.clamp(0.0, 1.0);
        let score = match pred.label {
            SentimentLabel::Positive => confidence,
            SentimentLabel::Negative => -confidence,
        };
        Self {
            label: pred.label,
            score,
        }
    }
}
