//! Expense display formatting
//!
//! Formats expense lists as tables and history summaries as detail
//! blocks.

use tabled::{settings::Style, Table, Tabled};

use crate::models::{Currency, Expense};
use crate::services::{HistoryWindow, SpendingSummary};

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

#[derive(Tabled)]
struct HistoryRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Budget Period")]
    budget_period: String,
}

/// Format the current period's expenses as a table, most recent first
///
/// Amounts render in the session's display currency, matching the
/// budget status block above them.
pub fn format_current_expenses(expenses: &[Expense], currency: Currency) -> String {
    if expenses.is_empty() {
        return "No expenses recorded this period.".to_string();
    }

    let symbol = currency.symbol();
    let rows: Vec<ExpenseRow> = expenses
        .iter()
        .rev()
        .map(|e| ExpenseRow {
            date: e.date.format("%Y-%m-%d %H:%M").to_string(),
            category: e.category.to_string(),
            description: e.description_or_empty().to_string(),
            amount: e.amount.format_with_symbol(symbol),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::psql());
    table.to_string()
}

/// Format filtered history as a table
///
/// Expects the caller to have sorted newest first. Each amount renders
/// with the currency the expense was logged in.
pub fn format_history_table(expenses: &[Expense]) -> String {
    if expenses.is_empty() {
        return "No expenses found for the selected filters.".to_string();
    }

    let rows: Vec<HistoryRow> = expenses
        .iter()
        .map(|e| HistoryRow {
            date: e.date.format("%Y-%m-%d %H:%M").to_string(),
            category: e.category.to_string(),
            description: e.description_or_empty().to_string(),
            amount: e.formatted_amount(),
            budget_period: e.budget_period.clone(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::psql());
    table.to_string()
}

/// Format the spending summary block shown above the history table
pub fn format_spending_summary(
    summary: &SpendingSummary,
    window: HistoryWindow,
    currency: Currency,
) -> String {
    let symbol = currency.symbol();

    let mut output = String::new();
    output.push_str(&format!("Spending Summary ({})\n", window.label()));
    output.push_str(&format!(
        "  Total Spent:     {}\n",
        summary.total.format_with_symbol(symbol)
    ));
    output.push_str(&format!("  Total Expenses:  {}\n", summary.count));
    output.push_str(&format!(
        "  Average per day: {}\n",
        summary.average_per_day.format_with_symbol(symbol)
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Budget, BudgetPeriodType, Category, Money};
    use chrono::{Local, TimeZone};

    fn sample_expenses() -> Vec<Expense> {
        let start = Local.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap();
        let budget = Budget::new(BudgetPeriodType::Monthly, Money::from_units_cents(500, 0), start);
        vec![
            Expense::new(
                start,
                Money::from_units_cents(12, 50),
                Some("coffee beans".to_string()),
                Category::Food,
                Currency::Usd,
                &budget,
            ),
            Expense::new(
                Local.with_ymd_and_hms(2024, 1, 16, 9, 0, 0).unwrap(),
                Money::from_units_cents(40, 0),
                None,
                Category::Gas,
                Currency::Usd,
                &budget,
            ),
        ]
    }

    #[test]
    fn test_current_expenses_table() {
        let output = format_current_expenses(&sample_expenses(), Currency::Usd);

        assert!(output.contains("Date"));
        assert!(output.contains("2024-01-15 10:00"));
        assert!(output.contains("coffee beans"));
        assert!(output.contains("$12.50"));

        // Most recent expense renders first
        let gas = output.find("Gas").unwrap();
        let food = output.find("Food").unwrap();
        assert!(gas < food);
    }

    #[test]
    fn test_empty_current_expenses() {
        let output = format_current_expenses(&[], Currency::Usd);
        assert!(output.contains("No expenses recorded this period."));
    }

    #[test]
    fn test_history_table_shows_budget_period() {
        let output = format_history_table(&sample_expenses());

        assert!(output.contains("Budget Period"));
        assert!(output.contains("2024-01-15 to 2024-02-15"));
    }

    #[test]
    fn test_empty_history() {
        let output = format_history_table(&[]);
        assert!(output.contains("No expenses found for the selected filters."));
    }

    #[test]
    fn test_spending_summary_block() {
        let summary = SpendingSummary {
            total: Money::from_units_cents(199, 95),
            count: 5,
            average_per_day: Money::from_units_cents(6, 66),
        };

        let output = format_spending_summary(&summary, HistoryWindow::Last30Days, Currency::Usd);

        assert!(output.contains("Spending Summary (Last 30 days)"));
        assert!(output.contains("Total Spent:     $199.95"));
        assert!(output.contains("Total Expenses:  5"));
        assert!(output.contains("Average per day: $6.66"));
    }
}
