//! Reports module for spendlog
//!
//! Provides spending analysis over the expense history.

pub mod spending;

pub use spending::{CategorySpending, SpendingReport};
