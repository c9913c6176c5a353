//! Configuration module for spendlog
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings and expense history persistence
//! - Application preferences

pub mod paths;
pub mod settings;

pub use paths::SpendlogPaths;
pub use settings::{Settings, Theme};
