//! Service layer for spendlog
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, computed fields, and persistence after each
//! mutation.

pub mod calculator;
pub mod history;
pub mod ledger;

pub use calculator::{CalculatedPurchase, PurchaseCalculator};
pub use history::{filter_history, HistoryWindow, SpendingSummary};
pub use ledger::{LedgerSession, LoggedExpense};
