//! # revlens-pipeline
//!
//! The end-to-end review analytics run: normalize and tag each review,
//! score sentiment in batches, assemble analyzed records, extract per-theme
//! keywords, and compute the KPI summary. Model resources load once at
//! pipeline construction; a missing resource aborts before any review is
//! processed.

pub mod clean;
pub mod engine;
pub mod export;
pub mod telemetry;

pub use clean::clean_reviews;
pub use engine::{AnalysisPipeline, AnalysisRun};
pub use export::{export_rows, ExportRow};
