//! Quick purchase calculators
//!
//! Computes totals for common multi-unit purchases (items at a unit price,
//! fuel by the gallon) and builds the description used when the result is
//! logged as an expense.

use crate::error::{SpendlogError, SpendlogResult};
use crate::models::{Category, Currency, Money};

/// A computed purchase ready to log as an expense
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculatedPurchase {
    /// Combined cost of the purchase
    pub total: Money,

    /// Generated description, e.g. "Food expense - 3.00 items at $4.50 each"
    pub description: String,

    /// Category the purchase is logged under unless overridden
    pub category: Category,
}

/// Calculator for multi-unit purchases
pub struct PurchaseCalculator {
    currency: Currency,
}

impl PurchaseCalculator {
    /// Create a calculator that formats unit prices in the given currency
    pub fn new(currency: Currency) -> Self {
        Self { currency }
    }

    /// Total for a quantity of items at a per-item price
    pub fn items(&self, quantity: Money, unit_price: Money) -> SpendlogResult<CalculatedPurchase> {
        if !quantity.is_positive() {
            return Err(SpendlogError::non_positive_amount("quantity"));
        }
        if !unit_price.is_positive() {
            return Err(SpendlogError::non_positive_amount("price"));
        }

        Ok(CalculatedPurchase {
            total: unit_price.mul_quantity(quantity),
            description: format!(
                "Food expense - {} items at {} each",
                quantity,
                unit_price.format_with_symbol(self.currency.symbol())
            ),
            category: Category::Food,
        })
    }

    /// Total for a number of gallons at a per-gallon price
    pub fn fuel(
        &self,
        gallons: Money,
        price_per_gallon: Money,
    ) -> SpendlogResult<CalculatedPurchase> {
        if !gallons.is_positive() {
            return Err(SpendlogError::non_positive_amount("gallons"));
        }
        if !price_per_gallon.is_positive() {
            return Err(SpendlogError::non_positive_amount("price"));
        }

        Ok(CalculatedPurchase {
            total: price_per_gallon.mul_quantity(gallons),
            description: format!(
                "Gas expense - {} gallons at {}/gallon",
                gallons,
                price_per_gallon.format_with_symbol(self.currency.symbol())
            ),
            category: Category::Gas,
        })
    }
}
