//! Active budget model
//!
//! A budget is the spending limit for one recurring period: its type, its
//! amount, and the timestamp the current window started. Expenses never
//! reference it directly; they copy its type and period label at creation
//! so history stays meaningful after a reset.

use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;
use super::period::BudgetPeriodType;

/// The currently active budget
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Budget {
    /// How often this budget resets
    pub period_type: BudgetPeriodType,

    /// Spending limit for one period; always positive
    pub amount: Money,

    /// When the current period started
    pub start: DateTime<Local>,
}

/// Health of the current period, from remaining funds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetStatus {
    /// At least 20% of the budget remains
    Ok,
    /// Less than 20% remains
    Warning,
    /// Spending exceeded the budget
    Exceeded,
}

/// Notification worth surfacing alongside the budget status
///
/// At most one fires, checked in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetNotification {
    /// Nothing remains (remaining <= 0)
    Depleted,
    /// 1% or less remains, only when the critical warning is enabled
    Critical,
    /// Less than 20% remains
    Low,
}

impl Budget {
    /// Create a budget starting now
    pub fn new(period_type: BudgetPeriodType, amount: Money, start: DateTime<Local>) -> Self {
        Self {
            period_type,
            amount,
            start,
        }
    }

    /// Funds left in the current period; negative when overspent
    pub fn remaining(&self, current_total: Money) -> Money {
        self.amount - current_total
    }

    /// Whether the current period's reset boundary has passed
    pub fn is_reset_due(&self, now: DateTime<Local>) -> bool {
        self.period_type.is_reset_due(self.start, now)
    }

    /// The date the next reset lands on
    pub fn next_reset_date(&self) -> NaiveDate {
        self.period_type.next_reset_date(self.start)
    }

    /// Start a fresh period at `now`, keeping type and amount
    pub fn restart(&mut self, now: DateTime<Local>) {
        self.start = now;
    }

    /// The period window as a display label, e.g. "2024-01-15 to 2024-02-15"
    pub fn period_label(&self) -> String {
        format!(
            "{} to {}",
            self.start.format("%Y-%m-%d"),
            self.next_reset_date().format("%Y-%m-%d")
        )
    }

    /// Status class for the given remaining funds
    pub fn status(&self, remaining: Money) -> BudgetStatus {
        if remaining.is_negative() {
            BudgetStatus::Exceeded
        } else if remaining.cents() * 5 < self.amount.cents() {
            BudgetStatus::Warning
        } else {
            BudgetStatus::Ok
        }
    }

    /// Notification for the given remaining funds, if any threshold tripped
    ///
    /// The caller gates this on the notifications-enabled preference; the
    /// critical 1% tier additionally requires its own flag.
    pub fn notification(
        &self,
        remaining: Money,
        critical_warning_enabled: bool,
    ) -> Option<BudgetNotification> {
        if remaining.cents() <= 0 {
            Some(BudgetNotification::Depleted)
        } else if remaining.cents() * 100 <= self.amount.cents() && critical_warning_enabled {
            Some(BudgetNotification::Critical)
        } else if remaining.cents() * 5 < self.amount.cents() {
            Some(BudgetNotification::Low)
        } else {
            None
        }
    }
}

impl BudgetStatus {
    /// Display label
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Warning => "Warning",
            Self::Exceeded => "Exceeded",
        }
    }
}

impl BudgetNotification {
    /// Message shown to the user
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Depleted => {
                "Warning: Your budget is depleted! Consider adjusting your spending or setting a new budget."
            }
            Self::Critical => "Critical Warning: Less than 1% of your budget remaining!",
            Self::Low => "Warning: Less than 20% of your budget remaining!",
        }
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} budget of {}", self.period_type, self.amount)
    }
}
