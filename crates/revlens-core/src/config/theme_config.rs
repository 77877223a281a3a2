use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_THEME;

/// One theme and its lemmatized, lowercase trigger keywords.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeDefinition {
    pub name: String,
    pub keywords: Vec<String>,
}

impl ThemeDefinition {
    pub fn new(name: &str, keywords: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }
}

/// The fixed theme → trigger-keyword mapping.
///
/// Definition order is significant: assigned themes and the keyword summary
/// both iterate in this order. Loaded once per run, then read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub themes: Vec<ThemeDefinition>,
    /// Assigned when no trigger keyword fires; excluded from keyword
    /// extraction.
    pub default_theme: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            themes: builtin_themes(),
            default_theme: DEFAULT_THEME.to_string(),
        }
    }
}

impl ThemeConfig {
    /// Theme names in definition order.
    pub fn theme_names(&self) -> impl Iterator<Item = &str> {
        self.themes.iter().map(|t| t.name.as_str())
    }

    pub fn is_default(&self, name: &str) -> bool {
        name == self.default_theme
    }
}

/// The six built-in themes for mobile-banking reviews.
fn builtin_themes() -> Vec<ThemeDefinition> {
    vec![
        ThemeDefinition::new(
            "Account & Login Issues",
            &[
                "login", "password", "account", "register", "access", "otp", "block", "verify",
                "verification",
            ],
        ),
        ThemeDefinition::new(
            "Transaction Performance",
            &[
                "transfer", "transaction", "slow", "fail", "stuck", "error", "fee", "charge",
                "limit", "pending",
            ],
        ),
        ThemeDefinition::new(
            "UI & User Experience",
            &[
                "ui", "interface", "design", "easy", "simple", "update", "dark", "mode", "confuse",
                "hard", "look", "feel",
            ],
        ),
        ThemeDefinition::new(
            "Reliability & Bugs",
            &[
                "crash", "bug", "glitch", "work", "stop", "open", "load", "freeze", "problem",
                "issue", "fix",
            ],
        ),
        ThemeDefinition::new(
            "Customer Support",
            &[
                "support", "customer", "service", "call", "center", "help", "contact", "response",
                "agent", "branch",
            ],
        ),
        ThemeDefinition::new(
            "Features & Functionality",
            &[
                "feature", "add", "option", "cbebirr", "telebirr", "loan", "statement", "balance",
                "notification",
            ],
        ),
    ]
}
