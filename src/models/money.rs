//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. Provides safe arithmetic operations, free-text parsing, and
//! formatting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
///
/// Using i64 cents keeps repeated additions exact and supports negative
/// amounts (a remaining budget can go below zero even though user-entered
/// amounts are always non-negative).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use spendlog::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole units and cents
    pub const fn from_units_cents(units: i64, cents: i64) -> Self {
        Self(units * 100 + cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Parse a money amount from free-form user text
    ///
    /// Every character that is not an ASCII digit or a decimal point is
    /// stripped before parsing, so currency symbols, commas, spaces, and
    /// signs are all ignored: "$10.50", " 10.50 ", and "10,50" each parse
    /// (the last as 1050.00, since the comma is removed, not treated as a
    /// separator). The result is therefore never negative. Fractional
    /// digits beyond two are truncated.
    ///
    /// Sign requirements (amounts that must be strictly positive) are
    /// enforced by callers, not here; zero parses successfully.
    ///
    /// # Examples
    /// ```
    /// use spendlog::models::Money;
    /// assert_eq!(Money::parse("$10.50").unwrap(), Money::from_cents(1050));
    /// assert_eq!(Money::parse("abc12").unwrap(), Money::from_cents(1200));
    /// ```
    pub fn parse(raw: &str) -> Result<Self, MoneyParseError> {
        let cleaned: String = raw
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.')
            .collect();

        if cleaned.is_empty() {
            return Err(MoneyParseError::InvalidFormat(raw.to_string()));
        }

        let parts: Vec<&str> = cleaned.split('.').collect();
        let cents = match parts.as_slice() {
            [units] => {
                let units: i64 = units
                    .parse()
                    .map_err(|_| MoneyParseError::InvalidFormat(raw.to_string()))?;
                units * 100
            }
            [units, frac] => {
                // "1." is 1.00 and ".5" is 0.50, but "." alone is invalid
                if units.is_empty() && frac.is_empty() {
                    return Err(MoneyParseError::InvalidFormat(raw.to_string()));
                }

                let units: i64 = if units.is_empty() {
                    0
                } else {
                    units
                        .parse()
                        .map_err(|_| MoneyParseError::InvalidFormat(raw.to_string()))?
                };

                // Pad or truncate fractional digits to 2
                let cents: i64 = match frac.len() {
                    0 => 0,
                    1 => {
                        frac.parse::<i64>()
                            .map_err(|_| MoneyParseError::InvalidFormat(raw.to_string()))?
                            * 10
                    }
                    _ => frac[..2]
                        .parse()
                        .map_err(|_| MoneyParseError::InvalidFormat(raw.to_string()))?,
                };

                units * 100 + cents
            }
            // More than one decimal point
            _ => return Err(MoneyParseError::InvalidFormat(raw.to_string())),
        };

        Ok(Self(cents))
    }

    /// Multiply by a quantity that was itself parsed as a decimal (item
    /// count, gallons), truncating the product toward zero to whole cents
    pub const fn mul_quantity(&self, quantity: Money) -> Self {
        Self(self.0 * quantity.0 / 100)
    }

    /// Format with a currency symbol, always two decimal places
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{}.{:02}", symbol, self.units().abs(), self.cents_part())
        } else {
            format!("{}{}.{:02}", symbol, self.units(), self.cents_part())
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-{}.{:02}", self.units().abs(), self.cents_part())
        } else {
            write!(f, "{}.{:02}", self.units(), self.cents_part())
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid amount: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
