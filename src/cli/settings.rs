//! Settings CLI commands
//!
//! Shows and changes user preferences. Every change is persisted
//! immediately.

use clap::Subcommand;

use crate::config::Theme;
use crate::display;
use crate::error::{SpendlogError, SpendlogResult};
use crate::models::Currency;
use crate::services::LedgerSession;

/// Settings subcommands
#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Show current settings
    Show,

    /// Change the display currency
    Currency {
        /// Currency code: USD, EUR, JPY, GBP, or CNY
        code: String,
    },

    /// Change the terminal theme
    Theme {
        /// Theme name: light or dark
        name: String,
    },

    /// Turn budget notifications on or off
    Notifications {
        /// "on" or "off"
        state: String,
    },

    /// Turn the critical (1%) warning on or off
    CriticalWarning {
        /// "on" or "off"
        state: String,
    },
}

/// Handle a settings command
pub fn handle_settings_command(
    session: &mut LedgerSession,
    cmd: SettingsCommands,
) -> SpendlogResult<()> {
    match cmd {
        SettingsCommands::Show => {
            print!("{}", display::format_settings(session.settings()));
        }

        SettingsCommands::Currency { code } => {
            let currency = Currency::parse(&code).ok_or_else(|| {
                SpendlogError::Parse(format!(
                    "Unknown currency '{}'; expected one of: {}",
                    code,
                    Currency::ALL.map(|c| c.code()).join(", ")
                ))
            })?;

            session.set_currency(currency);
            println!("Currency set to {}", currency);
        }

        SettingsCommands::Theme { name } => {
            let theme = Theme::parse(&name).ok_or_else(|| {
                SpendlogError::Parse(format!(
                    "Unknown theme '{}'; expected light or dark",
                    name
                ))
            })?;

            session.set_theme(theme);
            println!("Theme set to {}", theme);
        }

        SettingsCommands::Notifications { state } => {
            let enabled = parse_on_off(&state)?;
            session.set_notifications_enabled(enabled);
            println!(
                "Budget notifications turned {}",
                if enabled { "on" } else { "off" }
            );
        }

        SettingsCommands::CriticalWarning { state } => {
            let enabled = parse_on_off(&state)?;
            session.set_critical_warning_enabled(enabled);
            println!(
                "Critical (1%) warning turned {}",
                if enabled { "on" } else { "off" }
            );
        }
    }

    Ok(())
}

fn parse_on_off(raw: &str) -> SpendlogResult<bool> {
    match raw.trim().to_lowercase().as_str() {
        "on" | "true" | "yes" => Ok(true),
        "off" | "false" | "no" => Ok(false),
        _ => Err(SpendlogError::Parse(format!(
            "Expected 'on' or 'off', got '{}'",
            raw
        ))),
    }
}
