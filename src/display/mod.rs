//! Display formatting for terminal output
//!
//! Provides utilities for formatting data models for terminal display,
//! including tables and status blocks.

pub mod budget;
pub mod expense;
pub mod settings;

pub use budget::format_budget_status;
pub use expense::{format_current_expenses, format_history_table, format_spending_summary};
pub use settings::format_settings;
