//! Budget CLI commands
//!
//! Implements CLI commands for setting, inspecting, and resetting the
//! active budget.

use chrono::Local;
use clap::Subcommand;

use crate::display;
use crate::error::{SpendlogError, SpendlogResult};
use crate::models::{BudgetPeriodType, Money};
use crate::services::LedgerSession;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set a new budget starting now
    Set {
        /// Budget period: daily, weekly, monthly, or yearly
        period: String,
        /// Amount (e.g., "100" or "100.00")
        amount: String,
    },

    /// Show the current budget status
    Status,

    /// Clear the budget and the current period's expenses
    Reset,
}

/// Handle a budget command
pub fn handle_budget_command(
    session: &mut LedgerSession,
    cmd: BudgetCommands,
) -> SpendlogResult<()> {
    let now = Local::now();

    match cmd {
        BudgetCommands::Set { period, amount } => {
            let period_type = BudgetPeriodType::parse(&period).ok_or_else(|| {
                SpendlogError::Parse(format!(
                    "Unknown budget period '{}'; expected daily, weekly, monthly, or yearly",
                    period
                ))
            })?;
            let amount =
                Money::parse(&amount).map_err(|e| SpendlogError::Parse(e.to_string()))?;

            let budget = session.set_budget(period_type, amount, now)?;
            let symbol = session.currency().symbol();

            println!(
                "Set {} budget of {}",
                budget.period_type,
                budget.amount.format_with_symbol(symbol)
            );
            println!(
                "Next reset: {}",
                budget.next_reset_date().format("%Y-%m-%d")
            );
        }

        BudgetCommands::Status => {
            if session.check_rollover(now) {
                println!("Budget period rolled over; starting a fresh period.");
                println!();
            }

            match session.budget() {
                Some(budget) => {
                    let total = session.current_total();
                    print!(
                        "{}",
                        display::format_budget_status(budget, total, session.currency())
                    );

                    let settings = session.settings();
                    if settings.notifications_enabled {
                        let remaining = budget.remaining(total);
                        if let Some(notification) =
                            budget.notification(remaining, settings.critical_warning_enabled)
                        {
                            println!();
                            println!("{}", notification.message());
                        }
                    }
                }
                None => {
                    println!(
                        "No active budget. Set one with 'spendlog budget set <PERIOD> <AMOUNT>'."
                    );
                }
            }
        }

        BudgetCommands::Reset => {
            session.reset_budget()?;
            println!("Budget cleared. Expense history is preserved.");
        }
    }

    Ok(())
}
