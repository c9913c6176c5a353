//! Custom error types for spendlog
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for spendlog operations
///
/// Every variant is recoverable at its point of use; nothing here is fatal
/// to the running session.
#[derive(Error, Debug)]
pub enum SpendlogError {
    /// Malformed numeric or enum text from user input
    #[error("Parse error: {0}")]
    Parse(String),

    /// Validation errors for commands and data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Settings or session data could not be read or written
    #[error("Persistence error: {0}")]
    Persistence(String),
}

impl SpendlogError {
    /// Create a validation error for an operation that needs an active budget
    pub fn no_active_budget() -> Self {
        Self::Validation("no active budget; set one with 'budget set' first".to_string())
    }

    /// Create a validation error for a non-positive amount
    pub fn non_positive_amount(field: &str) -> Self {
        Self::Validation(format!("{} must be greater than zero", field))
    }

    /// Check if this is a parse error
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a persistence error
    pub fn is_persistence(&self) -> bool {
        matches!(self, Self::Persistence(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for SpendlogError {
    fn from(err: std::io::Error) -> Self {
        Self::Persistence(err.to_string())
    }
}

impl From<serde_json::Error> for SpendlogError {
    fn from(err: serde_json::Error) -> Self {
        Self::Persistence(err.to_string())
    }
}

/// Result type alias for spendlog operations
pub type SpendlogResult<T> = Result<T, SpendlogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SpendlogError::Parse("not a number".into());
        assert_eq!(err.to_string(), "Parse error: not a number");
    }

    #[test]
    fn test_no_active_budget() {
        let err = SpendlogError::no_active_budget();
        assert!(err.is_validation());
        assert!(err.to_string().contains("no active budget"));
    }

    #[test]
    fn test_non_positive_amount() {
        let err = SpendlogError::non_positive_amount("budget amount");
        assert_eq!(
            err.to_string(),
            "Validation error: budget amount must be greater than zero"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: SpendlogError = io_err.into();
        assert!(err.is_persistence());
    }
}
