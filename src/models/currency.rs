//! Currency reference data
//!
//! The fixed set of currencies the tracker supports. Immutable reference
//! data: each currency has a code, a display symbol, and a full name.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// US Dollar ($)
    Usd,
    /// Euro (€)
    Eur,
    /// Japanese Yen (¥)
    Jpy,
    /// British Pound (£)
    Gbp,
    /// Chinese Yuan (¥)
    Cny,
}

impl Currency {
    /// All supported currencies, in menu order
    pub const ALL: [Currency; 5] = [Self::Usd, Self::Eur, Self::Jpy, Self::Gbp, Self::Cny];

    /// ISO 4217 code
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Jpy => "JPY",
            Self::Gbp => "GBP",
            Self::Cny => "CNY",
        }
    }

    /// Display symbol used as the amount prefix
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Usd => "$",
            Self::Eur => "€",
            Self::Jpy => "¥",
            Self::Gbp => "£",
            Self::Cny => "¥",
        }
    }

    /// Full currency name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Usd => "US Dollar",
            Self::Eur => "Euro",
            Self::Jpy => "Japanese Yen",
            Self::Gbp => "British Pound",
            Self::Cny => "Chinese Yuan",
        }
    }

    /// Parse a currency from its code, case-insensitive
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "USD" => Some(Self::Usd),
            "EUR" => Some(Self::Eur),
            "JPY" => Some(Self::Jpy),
            "GBP" => Some(Self::Gbp),
            "CNY" => Some(Self::Cny),
            _ => None,
        }
    }
}

impl Default for Currency {
    fn default() -> Self {
        Self::Usd
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) - {}", self.code(), self.symbol(), self.name())
    }
}
