//! # revlens-nlp
//!
//! Text normalization for the review pipeline: lowercase word segmentation,
//! stopword filtering, and rule-based English lemmatization, wrapped in the
//! [`Normalizer`] engine.

pub mod lemma;
pub mod normalizer;
pub mod stopwords;
pub mod tokenize;

pub use normalizer::Normalizer;
pub use stopwords::StopwordFilter;
