//! Spending Report
//!
//! Generates a per-category spending breakdown over a set of expenses,
//! typically the output of a history filter.

use crate::models::{Category, Currency, Expense, Money};

/// Spending breakdown for one category
#[derive(Debug, Clone)]
pub struct CategorySpending {
    /// The category
    pub category: Category,
    /// Total spending in this category
    pub total: Money,
    /// Number of expenses
    pub count: usize,
    /// Percentage of total spending
    pub percentage: f64,
}

/// Spending Report
#[derive(Debug, Clone)]
pub struct SpendingReport {
    /// Per-category breakdown, highest spending first
    pub categories: Vec<CategorySpending>,
    /// Total spending across all categories
    pub total: Money,
    /// Total expense count
    pub count: usize,
}

impl SpendingReport {
    /// Generate a spending report over a set of expenses
    pub fn generate(expenses: &[Expense]) -> Self {
        let total: Money = expenses.iter().map(|e| e.amount).sum();

        let mut categories = Vec::new();
        for &category in Category::ALL.iter() {
            let mut cat_total = Money::zero();
            let mut cat_count = 0;
            for expense in expenses.iter().filter(|e| e.category == category) {
                cat_total += expense.amount;
                cat_count += 1;
            }

            if cat_count == 0 {
                continue;
            }

            let percentage = if total.is_zero() {
                0.0
            } else {
                (cat_total.cents() as f64 / total.cents() as f64) * 100.0
            };

            categories.push(CategorySpending {
                category,
                total: cat_total,
                count: cat_count,
                percentage,
            });
        }

        // Sort by spending (most spending first)
        categories.sort_by(|a, b| b.total.cmp(&a.total));

        Self {
            categories,
            total,
            count: expenses.len(),
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency: Currency) -> String {
        let symbol = currency.symbol();
        let mut output = String::new();

        output.push_str("Spending by Category\n");
        output.push_str(&"-".repeat(56));
        output.push('\n');
        output.push_str(&format!(
            "{:<18} {:>14} {:>8} {:>10}\n",
            "Category", "Amount", "Count", "%"
        ));
        output.push_str(&"-".repeat(56));
        output.push('\n');

        for category in &self.categories {
            output.push_str(&format!(
                "{:<18} {:>14} {:>8} {:>9.1}%\n",
                category.category.label(),
                category.total.format_with_symbol(symbol),
                category.count,
                category.percentage
            ));
        }

        output.push_str(&"-".repeat(56));
        output.push('\n');
        output.push_str(&format!(
            "{:<18} {:>14} {:>8}\n",
            "TOTAL",
            self.total.format_with_symbol(symbol),
            self.count
        ));

        output
    }

    /// Get the top spending categories
    pub fn top_categories(&self, limit: usize) -> Vec<&CategorySpending> {
        self.categories.iter().take(limit).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Budget, BudgetPeriodType};
    use chrono::{Local, TimeZone};

    fn expense(amount: Money, category: Category) -> Expense {
        let date = Local.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let budget = Budget::new(BudgetPeriodType::Monthly, Money::from_units_cents(1000, 0), date);
        Expense::new(date, amount, None, category, Currency::Usd, &budget)
    }

    #[test]
    fn test_generate_groups_by_category() {
        let expenses = vec![
            expense(Money::from_units_cents(30, 0), Category::Food),
            expense(Money::from_units_cents(30, 0), Category::Food),
            expense(Money::from_units_cents(40, 0), Category::Gas),
        ];

        let report = SpendingReport::generate(&expenses);

        assert_eq!(report.total, Money::from_units_cents(100, 0));
        assert_eq!(report.count, 3);
        assert_eq!(report.categories.len(), 2);

        // Food leads with 60%
        assert_eq!(report.categories[0].category, Category::Food);
        assert_eq!(report.categories[0].total, Money::from_units_cents(60, 0));
        assert_eq!(report.categories[0].count, 2);
        assert!((report.categories[0].percentage - 60.0).abs() < 1e-9);

        assert_eq!(report.categories[1].category, Category::Gas);
        assert!((report.categories[1].percentage - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_generate_empty() {
        let report = SpendingReport::generate(&[]);
        assert!(report.categories.is_empty());
        assert_eq!(report.total, Money::zero());
        assert_eq!(report.count, 0);
    }

    #[test]
    fn test_format_terminal() {
        let expenses = vec![
            expense(Money::from_units_cents(75, 25), Category::Healthcare),
            expense(Money::from_units_cents(24, 75), Category::Other),
        ];

        let report = SpendingReport::generate(&expenses);
        let output = report.format_terminal(Currency::Usd);

        assert!(output.contains("Healthcare"));
        assert!(output.contains("$75.25"));
        assert!(output.contains("TOTAL"));
        assert!(output.contains("$100.00"));
    }

    #[test]
    fn test_top_categories() {
        let expenses = vec![
            expense(Money::from_units_cents(10, 0), Category::Food),
            expense(Money::from_units_cents(20, 0), Category::Gas),
            expense(Money::from_units_cents(30, 0), Category::Shopping),
        ];

        let report = SpendingReport::generate(&expenses);
        let top = report.top_categories(2);

        assert_eq!(top.len(), 2);
        assert_eq!(top[0].category, Category::Shopping);
        assert_eq!(top[1].category, Category::Gas);
    }
}
