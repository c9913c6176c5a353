//! Expense CLI commands
//!
//! Implements CLI commands for logging expenses and listing the current
//! period.

use chrono::Local;
use clap::Subcommand;

use crate::display;
use crate::error::{SpendlogError, SpendlogResult};
use crate::models::{Category, Money};
use crate::services::LedgerSession;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Log an expense against the active budget
    Add {
        /// Amount (e.g., "12.50")
        amount: String,

        /// Expense category (e.g., food, gas, utilities)
        #[arg(short, long)]
        category: String,

        /// Optional description
        #[arg(short, long)]
        note: Option<String>,
    },

    /// List the current period's expenses
    List,
}

/// Handle an expense command
pub fn handle_expense_command(
    session: &mut LedgerSession,
    cmd: ExpenseCommands,
) -> SpendlogResult<()> {
    let now = Local::now();

    match cmd {
        ExpenseCommands::Add {
            amount,
            category,
            note,
        } => {
            session.check_rollover(now);

            let category = Category::parse(&category).ok_or_else(|| {
                SpendlogError::Parse(format!(
                    "Unknown category '{}'; expected one of: {}",
                    category,
                    Category::ALL.map(|c| c.label()).join(", ")
                ))
            })?;
            let amount =
                Money::parse(&amount).map_err(|e| SpendlogError::Parse(e.to_string()))?;

            let logged = session.add_expense(amount, note, category, now)?;
            let symbol = session.currency().symbol();

            println!(
                "Added {} expense: {}",
                logged.expense.category,
                logged.expense.formatted_amount()
            );
            println!(
                "Remaining budget: {}",
                logged.remaining.format_with_symbol(symbol)
            );

            if let Some(notification) = logged.notification {
                println!();
                println!("{}", notification.message());
            }
        }

        ExpenseCommands::List => {
            session.check_rollover(now);

            println!(
                "{}",
                display::format_current_expenses(session.current_expenses(), session.currency())
            );
        }
    }

    Ok(())
}
