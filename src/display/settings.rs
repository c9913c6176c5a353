//! Settings display formatting

use crate::config::Settings;

/// Format the current settings as a detail block
pub fn format_settings(settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str("Settings\n");
    output.push_str(&format!("  Currency:              {}\n", settings.currency));
    output.push_str(&format!("  Theme:                 {}\n", settings.theme));
    output.push_str(&format!(
        "  Notifications:         {}\n",
        on_off(settings.notifications_enabled)
    ));
    output.push_str(&format!(
        "  Critical (1%) warning: {}\n",
        on_off(settings.critical_warning_enabled)
    ));
    output.push_str(&format!(
        "  Expenses in history:   {}\n",
        settings.expense_history.len()
    ));

    output
}

fn on_off(enabled: bool) -> &'static str {
    if enabled {
        "on"
    } else {
        "off"
    }
}
