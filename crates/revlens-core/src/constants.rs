//! Domain constants shared across the workspace.

/// Theme assigned when no trigger keyword fires.
pub const DEFAULT_THEME: &str = "General Feedback";

/// Sentinel recorded when keyword extraction yields an empty vocabulary.
pub const NO_KEYWORDS_SENTINEL: &str = "N/A";

/// KPI target: share of reviews that must carry a sentiment label.
pub const COVERAGE_TARGET_PCT: f64 = 90.0;
