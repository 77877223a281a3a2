//! ThemeTagger: set-membership trigger matching in definition order.

use std::collections::HashSet;

use revlens_core::config::ThemeConfig;

/// Assigns zero-or-more themes to a lemma sequence; falls back to the
/// default theme when nothing fires.
///
/// Built once from the injected [`ThemeConfig`] and read-only afterwards.
/// Assignment order follows theme-definition order, never token order, and
/// each theme is tested exactly once so duplicates are impossible.
#[derive(Debug)]
pub struct ThemeTagger {
    themes: Vec<(String, HashSet<String>)>,
    default_theme: String,
}

impl ThemeTagger {
    pub fn new(config: &ThemeConfig) -> Self {
        let themes = config
            .themes
            .iter()
            .map(|t| (t.name.clone(), t.keywords.iter().cloned().collect()))
            .collect();
        Self {
            themes,
            default_theme: config.default_theme.clone(),
        }
    }

    /// Tag one review's lemma sequence. Total over any input, including the
    /// empty sequence; the result is never empty.
    pub fn tag(&self, lemmas: &[String]) -> Vec<String> {
        let tokens: HashSet<&str> = lemmas.iter().map(|l| l.as_str()).collect();
        let mut assigned: Vec<String> = self
            .themes
            .iter()
            .filter(|(_, keywords)| keywords.iter().any(|k| tokens.contains(k.as_str())))
            .map(|(name, _)| name.clone())
            .collect();
        if assigned.is_empty() {
            assigned.push(self.default_theme.clone());
        }
        assigned
    }

    pub fn default_theme(&self) -> &str {
        &self.default_theme
    }
}
