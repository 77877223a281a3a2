//! # revlens-sentiment
//!
//! Batched binary sentiment scoring. The [`SentimentEngine`] submits texts
//! to an [`ISentimentProvider`] in fixed-size batches and folds raw
//! (label, confidence) predictions onto the signed polarity axis.
//!
//! [`ISentimentProvider`]: revlens_core::traits::ISentimentProvider

pub mod engine;
pub mod lexicon;
pub mod providers;

pub use engine::SentimentEngine;
pub use lexicon::LexiconProvider;
