//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod budget;
pub mod calc;
pub mod expense;
pub mod history;
pub mod settings;

pub use budget::{handle_budget_command, BudgetCommands};
pub use calc::{handle_calc_command, CalcCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use history::{handle_history_command, HistoryArgs};
pub use settings::{handle_settings_command, SettingsCommands};
