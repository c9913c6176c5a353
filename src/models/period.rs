//! Budget period types and rollover policy
//!
//! A budget recurs over one of four period types. All per-type date logic
//! (when a period has rolled over, when the next reset lands) lives here so
//! the policies are not duplicated across display and bookkeeping paths.
//!
//! The four policies are deliberately not uniform: Weekly is an
//! elapsed-duration boundary (7 full days), while Daily, Monthly, and
//! Yearly are calendar boundaries (Monthly ignores the day-of-month
//! entirely, so a budget started on the 31st rolls over on the 1st).

use chrono::{DateTime, Datelike, Duration, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How often a budget resets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BudgetPeriodType {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl BudgetPeriodType {
    /// All period types, in menu order
    pub const ALL: [BudgetPeriodType; 4] = [Self::Daily, Self::Weekly, Self::Monthly, Self::Yearly];

    /// Display label
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
            Self::Yearly => "Yearly",
        }
    }

    /// Parse a period type from a string, case-insensitive
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "daily" | "day" => Some(Self::Daily),
            "weekly" | "week" => Some(Self::Weekly),
            "monthly" | "month" => Some(Self::Monthly),
            "yearly" | "year" => Some(Self::Yearly),
            _ => None,
        }
    }

    /// Whether a budget started at `start` has passed its reset boundary at `now`
    ///
    /// Daily resets once the calendar date advances, not after 24 elapsed
    /// hours. Weekly resets after 7 full days regardless of weekday.
    /// Monthly resets when the calendar month advances, ignoring the
    /// day-of-month. Yearly resets when the calendar year advances.
    pub fn is_reset_due(&self, start: DateTime<Local>, now: DateTime<Local>) -> bool {
        match self {
            Self::Daily => now.date_naive() > start.date_naive(),
            Self::Weekly => (now - start).num_days() >= 7,
            Self::Monthly => {
                now.year() > start.year()
                    || (now.year() == start.year() && now.month() > start.month())
            }
            Self::Yearly => now.year() > start.year(),
        }
    }

    /// The date the next reset lands on, for display
    ///
    /// Monthly and Yearly advances clamp the day to the target month's
    /// length (Jan 31 advances to Feb 29 in a leap year, Feb 28 otherwise).
    pub fn next_reset_date(&self, start: DateTime<Local>) -> NaiveDate {
        let start = start.date_naive();
        match self {
            Self::Daily => start + Duration::days(1),
            Self::Weekly => start + Duration::days(7),
            Self::Monthly => add_one_month(start),
            Self::Yearly => add_one_year(start),
        }
    }
}

impl fmt::Display for BudgetPeriodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

fn add_one_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    let day = date.day().min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn add_one_year(date: NaiveDate) -> NaiveDate {
    let year = date.year() + 1;
    let day = date.day().min(days_in_month(year, date.month()));
    NaiveDate::from_ymd_opt(year, date.month(), day).unwrap()
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let first_of_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, month, 28).unwrap());
    (first_of_next - Duration::days(1)).day()
}
