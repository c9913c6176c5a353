//! Expense record model
//!
//! An expense is immutable once created. It carries a value-copy of the
//! budget that was active when it was logged (the period type and the
//! period's date-range label), so history entries keep their meaning after
//! the budget is reset or replaced.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::budget::Budget;
use super::category::Category;
use super::currency::Currency;
use super::money::Money;
use super::period::BudgetPeriodType;

/// A single logged expense
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,

    /// When the expense was logged
    pub date: DateTime<Local>,

    /// Amount spent; always positive
    pub amount: Money,

    /// Free-form note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Category bucket
    pub category: Category,

    /// Currency preference at the time of logging
    pub currency: Currency,

    /// Period type of the budget this was logged against
    pub budget_type: BudgetPeriodType,

    /// Date-range label of that budget's period, e.g. "2024-01-15 to 2024-02-15"
    pub budget_period: String,
}

impl Expense {
    /// Create an expense against the active budget
    pub fn new(
        date: DateTime<Local>,
        amount: Money,
        description: Option<String>,
        category: Category,
        currency: Currency,
        budget: &Budget,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            amount,
            description,
            category,
            currency,
            budget_type: budget.period_type,
            budget_period: budget.period_label(),
        }
    }

    /// The note, or an empty string when none was given
    pub fn description_or_empty(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    /// Amount rendered with this expense's own currency symbol
    pub fn formatted_amount(&self) -> String {
        self.amount.format_with_symbol(self.currency.symbol())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}: {}",
            self.date.format("%Y-%m-%d %H:%M"),
            self.category,
            self.formatted_amount()
        )
    }
}
