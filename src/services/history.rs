//! Cost history analysis
//!
//! Filters the persistent expense history by category and relative date
//! window, and computes summary statistics over the filtered set.

use chrono::{DateTime, Local};

use crate::models::{Category, Expense, Money};

/// Relative date window for history filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HistoryWindow {
    /// Expenses from the last 7 whole days
    Last7Days,
    /// Expenses from the last 30 whole days
    Last30Days,
    /// Expenses from the last 90 whole days
    Last90Days,
    /// No date filter
    #[default]
    AllTime,
}

impl HistoryWindow {
    /// All windows, in selection order
    pub const ALL: [HistoryWindow; 4] = [
        HistoryWindow::Last7Days,
        HistoryWindow::Last30Days,
        HistoryWindow::Last90Days,
        HistoryWindow::AllTime,
    ];

    /// Parse from user input (case-insensitive)
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "7" | "7d" => Some(HistoryWindow::Last7Days),
            "30" | "30d" => Some(HistoryWindow::Last30Days),
            "90" | "90d" | "3m" => Some(HistoryWindow::Last90Days),
            "all" => Some(HistoryWindow::AllTime),
            _ => None,
        }
    }

    /// Window length in whole days; `None` means no date filter
    pub const fn days(&self) -> Option<i64> {
        match self {
            HistoryWindow::Last7Days => Some(7),
            HistoryWindow::Last30Days => Some(30),
            HistoryWindow::Last90Days => Some(90),
            HistoryWindow::AllTime => None,
        }
    }

    /// Human-readable label
    pub const fn label(&self) -> &'static str {
        match self {
            HistoryWindow::Last7Days => "Last 7 days",
            HistoryWindow::Last30Days => "Last 30 days",
            HistoryWindow::Last90Days => "Last 3 months",
            HistoryWindow::AllTime => "All time",
        }
    }
}

impl std::fmt::Display for HistoryWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Filter history by category and date window, newest first
///
/// The window boundary is inclusive in whole days: an expense logged
/// exactly seven days ago still falls inside "Last 7 days".
pub fn filter_history(
    history: &[Expense],
    category: Option<Category>,
    window: HistoryWindow,
    now: DateTime<Local>,
) -> Vec<Expense> {
    let mut filtered: Vec<Expense> = history
        .iter()
        .filter(|e| category.map_or(true, |c| e.category == c))
        .filter(|e| match window.days() {
            Some(days) => (now - e.date).num_days() <= days,
            None => true,
        })
        .cloned()
        .collect();

    filtered.sort_by(|a, b| b.date.cmp(&a.date));
    filtered
}

/// Summary statistics over a filtered set of expenses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpendingSummary {
    /// Sum of all amounts in the set
    pub total: Money,

    /// Number of expenses in the set
    pub count: usize,

    /// Total divided by days since the earliest expense (at least one day)
    pub average_per_day: Money,
}

impl SpendingSummary {
    /// Compute summary statistics, or `None` when the set is empty
    pub fn compute(expenses: &[Expense], now: DateTime<Local>) -> Option<Self> {
        let earliest = expenses.iter().map(|e| e.date).min()?;

        let total: Money = expenses.iter().map(|e| e.amount).sum();
        let days = (now - earliest).num_days().max(1);

        Some(Self {
            total,
            count: expenses.len(),
            average_per_day: Money::from_cents(total.cents() / days),
        })
    }
}
