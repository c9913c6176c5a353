//! Budget status display formatting
//!
//! Formats the budget status block shown by `budget status` and after
//! logging an expense.

use crate::models::{Budget, Currency, Money};

/// Format the budget status block
pub fn format_budget_status(budget: &Budget, total: Money, currency: Currency) -> String {
    let symbol = currency.symbol();
    let remaining = budget.remaining(total);
    let status = budget.status(remaining);

    let mut output = String::new();
    output.push_str(&format!(
        "Remaining {} Budget: {}  [{}]\n",
        budget.period_type,
        remaining.format_with_symbol(symbol),
        status.label()
    ));
    output.push('\n');
    output.push_str(&format!(
        "  Total Budget:   {}\n",
        budget.amount.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Total Expenses: {}\n",
        total.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Next Reset:     {}\n",
        budget.next_reset_date().format("%Y-%m-%d")
    ));

    output
}
