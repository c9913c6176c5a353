//! History CLI command
//!
//! Filters the permanent expense history and renders summary statistics,
//! a category breakdown, and the matching expenses.

use chrono::Local;
use clap::Args;

use crate::display;
use crate::error::{SpendlogError, SpendlogResult};
use crate::models::Category;
use crate::reports::SpendingReport;
use crate::services::{filter_history, HistoryWindow, LedgerSession, SpendingSummary};

/// History command arguments
#[derive(Args)]
pub struct HistoryArgs {
    /// Filter by category (e.g., food, gas)
    #[arg(short, long)]
    pub category: Option<String>,

    /// Date window: 7d, 30d, 90d, or all
    #[arg(short, long, default_value = "all")]
    pub window: String,
}

/// Handle the history command
pub fn handle_history_command(session: &LedgerSession, args: HistoryArgs) -> SpendlogResult<()> {
    let now = Local::now();

    let category = match args.category.as_deref() {
        Some(raw) => Some(Category::parse(raw).ok_or_else(|| {
            SpendlogError::Parse(format!(
                "Unknown category '{}'; expected one of: {}",
                raw,
                Category::ALL.map(|c| c.label()).join(", ")
            ))
        })?),
        None => None,
    };
    let window = HistoryWindow::parse(&args.window).ok_or_else(|| {
        SpendlogError::Parse(format!(
            "Unknown window '{}'; expected 7d, 30d, 90d, or all",
            args.window
        ))
    })?;

    let filtered = filter_history(session.history(), category, window, now);

    match SpendingSummary::compute(&filtered, now) {
        Some(summary) => {
            print!(
                "{}",
                display::format_spending_summary(&summary, window, session.currency())
            );
            println!();

            let report = SpendingReport::generate(&filtered);
            print!("{}", report.format_terminal(session.currency()));
            println!();

            println!("{}", display::format_history_table(&filtered));
        }
        None => {
            println!("No expenses found for the selected filters.");
        }
    }

    Ok(())
}
