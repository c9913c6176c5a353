//! Core data models for spendlog
//!
//! This module contains all the data structures that represent the tracking
//! domain: money amounts, currencies, categories, budgets, and expenses.

pub mod budget;
pub mod category;
pub mod currency;
pub mod expense;
pub mod money;
pub mod period;

pub use budget::{Budget, BudgetNotification, BudgetStatus};
pub use category::Category;
pub use currency::Currency;
pub use expense::Expense;
pub use money::{Money, MoneyParseError};
pub use period::BudgetPeriodType;
