//! User settings for spendlog
//!
//! Manages user preferences (display currency, theme, notification flags)
//! and the persistent expense history. Everything lives in one JSON file
//! so a copy of `app_settings.json` is a full backup.

use serde::{Deserialize, Serialize};

use super::paths::SpendlogPaths;
use crate::error::SpendlogResult;
use crate::models::{Currency, Expense};
use crate::storage::file_io;

/// Terminal color theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light backgrounds (default)
    #[default]
    Light,
    /// Dark backgrounds
    Dark,
}

impl Theme {
    /// All themes, in selection order
    pub const ALL: [Theme; 2] = [Theme::Light, Theme::Dark];

    /// Parse from user input (case-insensitive)
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// Lowercase name as stored on disk
    pub const fn label(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// User settings for spendlog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Display currency for amounts and summaries
    #[serde(default)]
    pub currency: Currency,

    /// Terminal color theme
    #[serde(default)]
    pub theme: Theme,

    /// Master switch for budget notifications
    #[serde(default = "default_enabled")]
    pub notifications_enabled: bool,

    /// Whether the near-depletion warning fires (only when notifications are on)
    #[serde(default = "default_enabled")]
    pub critical_warning_enabled: bool,

    /// Every expense ever recorded, across all budget periods
    #[serde(default)]
    pub expense_history: Vec<Expense>,
}

fn default_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency: Currency::default(),
            theme: Theme::default(),
            notifications_enabled: default_enabled(),
            critical_warning_enabled: default_enabled(),
            expense_history: Vec::new(),
        }
    }
}

impl Settings {
    /// Load settings from disk, falling back to defaults on any failure
    ///
    /// A missing file is normal on first run. A malformed file is reported
    /// via the log and replaced with defaults on the next save; the program
    /// keeps running either way.
    pub fn load_or_default(paths: &SpendlogPaths) -> Self {
        match file_io::read_json(paths.settings_file()) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("could not load settings, using defaults: {}", e);
                Settings::default()
            }
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SpendlogPaths) -> SpendlogResult<()> {
        paths.ensure_directories()?;
        file_io::write_json_atomic(paths.settings_file(), self)
    }
}
