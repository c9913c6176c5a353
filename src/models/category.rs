//! Expense categories
//!
//! The fixed set of buckets an expense can be logged against.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Expense category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Food,
    Gas,
    Utilities,
    #[serde(rename = "Rent/Mortgage")]
    RentMortgage,
    Transportation,
    Entertainment,
    Healthcare,
    Shopping,
    Other,
}

impl Category {
    /// All categories, in menu order
    pub const ALL: [Category; 9] = [
        Self::Food,
        Self::Gas,
        Self::Utilities,
        Self::RentMortgage,
        Self::Transportation,
        Self::Entertainment,
        Self::Healthcare,
        Self::Shopping,
        Self::Other,
    ];

    /// Display label
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Gas => "Gas",
            Self::Utilities => "Utilities",
            Self::RentMortgage => "Rent/Mortgage",
            Self::Transportation => "Transportation",
            Self::Entertainment => "Entertainment",
            Self::Healthcare => "Healthcare",
            Self::Shopping => "Shopping",
            Self::Other => "Other",
        }
    }

    /// Parse a category from its label, case-insensitive
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "food" => Some(Self::Food),
            "gas" => Some(Self::Gas),
            "utilities" => Some(Self::Utilities),
            "rent/mortgage" | "rent" | "mortgage" => Some(Self::RentMortgage),
            "transportation" => Some(Self::Transportation),
            "entertainment" => Some(Self::Entertainment),
            "healthcare" => Some(Self::Healthcare),
            "shopping" => Some(Self::Shopping),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_labels() {
        for category in Category::ALL {
            assert_eq!(Category::parse(category.label()), Some(category));
        }
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(Category::parse("FOOD"), Some(Category::Food));
        assert_eq!(Category::parse("healthcare"), Some(Category::Healthcare));
        assert_eq!(Category::parse("rent"), Some(Category::RentMortgage));
        assert_eq!(Category::parse("groceries"), None);
    }

    #[test]
    fn test_serialization_uses_label() {
        let json = serde_json::to_string(&Category::RentMortgage).unwrap();
        assert_eq!(json, "\"Rent/Mortgage\"");

        let parsed: Category = serde_json::from_str("\"Food\"").unwrap();
        assert_eq!(parsed, Category::Food);
    }

    #[test]
    fn test_display() {
        assert_eq!(Category::RentMortgage.to_string(), "Rent/Mortgage");
        assert_eq!(Category::Other.to_string(), "Other");
    }
}
