//! Calculator CLI commands
//!
//! Computes purchase totals (items at a price, fuel by the gallon) and
//! optionally logs the result as an expense.

use chrono::{DateTime, Local};
use clap::Subcommand;

use crate::error::{SpendlogError, SpendlogResult};
use crate::models::{Category, Money};
use crate::services::{CalculatedPurchase, LedgerSession, PurchaseCalculator};

/// Calculator subcommands
#[derive(Subcommand)]
pub enum CalcCommands {
    /// Total for a quantity of items at a per-item price
    Item {
        /// Price per item
        #[arg(short, long)]
        price: String,

        /// Number of items (may be fractional)
        #[arg(short, long)]
        quantity: String,

        /// Log the total as a Food expense
        #[arg(long)]
        add: bool,
    },

    /// Total for a number of gallons at a per-gallon price
    Fuel {
        /// Price per gallon
        #[arg(short, long)]
        price: String,

        /// Gallons purchased (may be fractional)
        #[arg(short, long)]
        gallons: String,

        /// Category to log under (defaults to Gas)
        #[arg(short, long)]
        category: Option<String>,

        /// Log the total as an expense
        #[arg(long)]
        add: bool,
    },
}

/// Handle a calculator command
pub fn handle_calc_command(session: &mut LedgerSession, cmd: CalcCommands) -> SpendlogResult<()> {
    let now = Local::now();
    let calculator = PurchaseCalculator::new(session.currency());
    let symbol = session.currency().symbol();

    match cmd {
        CalcCommands::Item {
            price,
            quantity,
            add,
        } => {
            let price = Money::parse(&price).map_err(|e| SpendlogError::Parse(e.to_string()))?;
            let quantity =
                Money::parse(&quantity).map_err(|e| SpendlogError::Parse(e.to_string()))?;

            let purchase = calculator.items(quantity, price)?;
            println!(
                "Total food expense: {}",
                purchase.total.format_with_symbol(symbol)
            );

            if add {
                commit_purchase(session, purchase, None, now)?;
            }
        }

        CalcCommands::Fuel {
            price,
            gallons,
            category,
            add,
        } => {
            let price = Money::parse(&price).map_err(|e| SpendlogError::Parse(e.to_string()))?;
            let gallons =
                Money::parse(&gallons).map_err(|e| SpendlogError::Parse(e.to_string()))?;

            let category = match category.as_deref() {
                Some(raw) => Some(Category::parse(raw).ok_or_else(|| {
                    SpendlogError::Parse(format!(
                        "Unknown category '{}'; expected one of: {}",
                        raw,
                        Category::ALL.map(|c| c.label()).join(", ")
                    ))
                })?),
                None => None,
            };

            let purchase = calculator.fuel(gallons, price)?;
            println!(
                "Total gas expense: {}",
                purchase.total.format_with_symbol(symbol)
            );

            if add {
                commit_purchase(session, purchase, category, now)?;
            }
        }
    }

    Ok(())
}

/// Log a calculated purchase against the active budget
fn commit_purchase(
    session: &mut LedgerSession,
    purchase: CalculatedPurchase,
    category_override: Option<Category>,
    now: DateTime<Local>,
) -> SpendlogResult<()> {
    session.check_rollover(now);

    let category = category_override.unwrap_or(purchase.category);
    let logged = session.add_expense(purchase.total, Some(purchase.description), category, now)?;

    println!(
        "Added to budget under {}. Remaining: {}",
        logged.expense.category,
        logged
            .remaining
            .format_with_symbol(session.currency().symbol())
    );

    if let Some(notification) = logged.notification {
        println!();
        println!("{}", notification.message());
    }

    Ok(())
}
