//! Spendlog - Terminal-based personal budget tracker
//!
//! This library provides the core functionality for the spendlog budget
//! tracker. It implements a single active budget with periodic rollover
//! (daily, weekly, monthly, or yearly), expense logging with categories,
//! purchase calculators, and spending reports for terminal users who
//! prefer working from the command line.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, budgets, expenses, categories)
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer
//! - `reports`: Spending breakdowns by category
//! - `display`: Terminal formatting helpers
//! - `cli`: Command handlers for the spendlog binary
//!
//! # Example
//!
//! ```rust,ignore
//! use spendlog::config::paths::SpendlogPaths;
//! use spendlog::services::LedgerSession;
//!
//! let paths = SpendlogPaths::new()?;
//! let session = LedgerSession::open(paths);
//! ```

use std::sync::Once;

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{SpendlogError, SpendlogResult};

static TRACING_INIT: Once = Once::new();

/// Initialize the tracing subscriber for the CLI.
///
/// Safe to call more than once; only the first call installs the subscriber.
/// Honors `RUST_LOG`, defaulting to `spendlog=info`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("spendlog=info".parse().unwrap());
        fmt().with_env_filter(filter).init();
    });
}
