//! # revlens-keywords
//!
//! Per-theme descriptive keywords: each theme's member reviews form a
//! corpus, a TF-IDF model is fitted per corpus, and the top terms by
//! aggregate weight become that theme's keywords.

pub mod extractor;
pub mod tfidf;

pub use extractor::{theme_corpora, KeywordExtractor};
pub use tfidf::TfidfModel;
