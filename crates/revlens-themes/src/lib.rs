//! # revlens-themes
//!
//! Rule-based multi-label theme assignment: a theme is assigned when any of
//! its trigger keywords appears in a review's lemma sequence.

pub mod tagger;

pub use tagger::ThemeTagger;
