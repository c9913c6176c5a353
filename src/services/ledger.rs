//! Budget and expense session
//!
//! The single owner of all mutable state: the active budget, the current
//! period's expenses, and user settings. Every command handler opens one
//! session, mutates it through these methods, and each mutation is
//! persisted before it returns. A failed save is reported as a warning,
//! never as an operation failure; the in-memory mutation stands.

use chrono::{DateTime, Local};

use crate::config::{Settings, SpendlogPaths, Theme};
use crate::error::{SpendlogError, SpendlogResult};
use crate::models::{Budget, BudgetNotification, BudgetPeriodType, Category, Currency, Expense, Money};
use crate::storage::SessionState;

/// The result of logging an expense
#[derive(Debug, Clone)]
pub struct LoggedExpense {
    /// The recorded expense
    pub expense: Expense,

    /// Budget remaining after this expense
    pub remaining: Money,

    /// Threshold notification, already gated on the user's preferences
    pub notification: Option<BudgetNotification>,
}

/// Owns the budget, current expenses, and settings for one invocation
pub struct LedgerSession {
    paths: SpendlogPaths,
    settings: Settings,
    state: SessionState,
}

impl LedgerSession {
    /// Open a session, loading settings and budget state from disk
    ///
    /// Load failures fall back to defaults (logged, not fatal), so opening
    /// always succeeds.
    pub fn open(paths: SpendlogPaths) -> Self {
        let settings = Settings::load_or_default(&paths);
        let state = SessionState::load_or_default(&paths);
        Self {
            paths,
            settings,
            state,
        }
    }

    /// The paths this session reads and writes
    pub fn paths(&self) -> &SpendlogPaths {
        &self.paths
    }

    /// Current user settings
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The user's display currency
    pub fn currency(&self) -> Currency {
        self.settings.currency
    }

    /// The active budget, if one has been set
    pub fn budget(&self) -> Option<&Budget> {
        self.state.budget.as_ref()
    }

    /// Expenses in the current period, oldest first
    pub fn current_expenses(&self) -> &[Expense] {
        &self.state.expenses
    }

    /// The full expense history across all periods
    pub fn history(&self) -> &[Expense] {
        &self.settings.expense_history
    }

    /// Sum of all expenses in the current period
    pub fn current_total(&self) -> Money {
        self.state.expenses.iter().map(|e| e.amount).sum()
    }

    /// Budget remaining in the current period, if a budget is active
    pub fn remaining(&self) -> Option<Money> {
        self.state
            .budget
            .as_ref()
            .map(|b| b.remaining(self.current_total()))
    }

    /// Set a new budget starting now
    ///
    /// Fails when a budget is already active; it must be reset first so
    /// the current period's expenses are never silently discarded.
    pub fn set_budget(
        &mut self,
        period_type: BudgetPeriodType,
        amount: Money,
        now: DateTime<Local>,
    ) -> SpendlogResult<Budget> {
        if !amount.is_positive() {
            return Err(SpendlogError::non_positive_amount("budget amount"));
        }
        if self.state.budget.is_some() {
            return Err(SpendlogError::Validation(
                "a budget is already active; run 'budget reset' first".to_string(),
            ));
        }

        let budget = Budget::new(period_type, amount, now);
        self.state.budget = Some(budget.clone());
        self.persist_state();

        Ok(budget)
    }

    /// Roll the period over if its reset boundary has passed
    ///
    /// Restarts the period at `now` and clears the current expenses,
    /// keeping type and amount. Returns whether a rollover happened.
    /// Called before any read of budget state so stale periods are never
    /// shown.
    pub fn check_rollover(&mut self, now: DateTime<Local>) -> bool {
        let due = self
            .state
            .budget
            .as_ref()
            .is_some_and(|b| b.is_reset_due(now));
        if !due {
            return false;
        }

        if let Some(budget) = self.state.budget.as_mut() {
            budget.restart(now);
        }
        self.state.expenses.clear();
        self.persist_state();

        true
    }

    /// Clear the budget entirely, discarding the current period's expenses
    ///
    /// The long-term history is untouched.
    pub fn reset_budget(&mut self) -> SpendlogResult<()> {
        if self.state.budget.is_none() {
            return Err(SpendlogError::no_active_budget());
        }

        self.state.budget = None;
        self.state.expenses.clear();
        self.persist_state();

        Ok(())
    }

    /// Record an expense against the active budget
    ///
    /// The expense lands in both the current period and the permanent
    /// history. Returns the remaining budget and any threshold
    /// notification, gated on the notification preferences.
    pub fn add_expense(
        &mut self,
        amount: Money,
        description: Option<String>,
        category: Category,
        now: DateTime<Local>,
    ) -> SpendlogResult<LoggedExpense> {
        if !amount.is_positive() {
            return Err(SpendlogError::non_positive_amount("amount"));
        }
        let budget = self
            .state
            .budget
            .clone()
            .ok_or_else(SpendlogError::no_active_budget)?;

        let expense = Expense::new(
            now,
            amount,
            description,
            category,
            self.settings.currency,
            &budget,
        );

        self.state.expenses.push(expense.clone());
        self.settings.expense_history.push(expense.clone());
        self.persist_state();
        self.persist_settings();

        let remaining = budget.remaining(self.current_total());
        let notification = if self.settings.notifications_enabled {
            budget.notification(remaining, self.settings.critical_warning_enabled)
        } else {
            None
        };

        Ok(LoggedExpense {
            expense,
            remaining,
            notification,
        })
    }

    /// Change the display currency
    pub fn set_currency(&mut self, currency: Currency) {
        self.settings.currency = currency;
        self.persist_settings();
    }

    /// Change the terminal theme
    pub fn set_theme(&mut self, theme: Theme) {
        self.settings.theme = theme;
        self.persist_settings();
    }

    /// Turn budget notifications on or off
    pub fn set_notifications_enabled(&mut self, enabled: bool) {
        self.settings.notifications_enabled = enabled;
        self.persist_settings();
    }

    /// Turn the critical 1% warning on or off
    pub fn set_critical_warning_enabled(&mut self, enabled: bool) {
        self.settings.critical_warning_enabled = enabled;
        self.persist_settings();
    }

    fn persist_state(&self) {
        if let Err(e) = self.state.save(&self.paths) {
            tracing::warn!("could not save session state: {}", e);
        }
    }

    fn persist_settings(&self) {
        if let Err(e) = self.settings.save(&self.paths) {
            tracing::warn!("could not save settings: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use tempfile::TempDir;

    fn session(temp_dir: &TempDir) -> LedgerSession {
        LedgerSession::open(SpendlogPaths::with_base_dir(temp_dir.path().to_path_buf()))
    }

    fn start() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap()
    }

    #[test]
    fn test_add_expense_requires_budget() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = session(&temp_dir);

        let err = session
            .add_expense(
                Money::from_units_cents(10, 0),
                None,
                Category::Food,
                start(),
            )
            .unwrap_err();

        assert!(err.is_validation());
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_set_budget_then_spend() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = session(&temp_dir);
        let now = start();

        session
            .set_budget(
                BudgetPeriodType::Monthly,
                Money::from_units_cents(1000, 0),
                now,
            )
            .unwrap();

        let logged = session
            .add_expense(
                Money::from_units_cents(45, 50),
                Some("lunch".to_string()),
                Category::Food,
                now + Duration::hours(1),
            )
            .unwrap();

        assert_eq!(session.current_total(), Money::from_units_cents(45, 50));
        assert_eq!(logged.remaining, Money::from_units_cents(954, 50));
        assert_eq!(logged.notification, None);
        assert_eq!(session.current_expenses().len(), 1);
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_set_budget_rejects_second_budget() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = session(&temp_dir);

        session
            .set_budget(
                BudgetPeriodType::Weekly,
                Money::from_units_cents(200, 0),
                start(),
            )
            .unwrap();

        let err = session
            .set_budget(
                BudgetPeriodType::Daily,
                Money::from_units_cents(50, 0),
                start(),
            )
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_set_budget_rejects_non_positive_amount() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = session(&temp_dir);

        let err = session
            .set_budget(BudgetPeriodType::Daily, Money::zero(), start())
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_state_survives_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let now = start();

        {
            let mut session = session(&temp_dir);
            session
                .set_budget(
                    BudgetPeriodType::Monthly,
                    Money::from_units_cents(500, 0),
                    now,
                )
                .unwrap();
            session
                .add_expense(Money::from_units_cents(20, 0), None, Category::Gas, now)
                .unwrap();
        }

        let session = session(&temp_dir);
        assert!(session.budget().is_some());
        assert_eq!(session.current_total(), Money::from_units_cents(20, 0));
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_rollover_clears_current_but_not_history() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = session(&temp_dir);
        let now = start();

        session
            .set_budget(BudgetPeriodType::Daily, Money::from_units_cents(50, 0), now)
            .unwrap();
        session
            .add_expense(Money::from_units_cents(10, 0), None, Category::Food, now)
            .unwrap();

        let next_day = now + Duration::days(1);
        assert!(session.check_rollover(next_day));

        assert!(session.current_expenses().is_empty());
        assert_eq!(session.history().len(), 1);
        let budget = session.budget().unwrap();
        assert_eq!(budget.start, next_day);
        assert_eq!(budget.amount, Money::from_units_cents(50, 0));
    }

    #[test]
    fn test_rollover_not_due() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = session(&temp_dir);
        let now = start();

        session
            .set_budget(BudgetPeriodType::Weekly, Money::from_units_cents(200, 0), now)
            .unwrap();

        assert!(!session.check_rollover(now + Duration::days(3)));
        assert!(!session.check_rollover(now));
    }

    #[test]
    fn test_reset_clears_budget_and_current() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = session(&temp_dir);
        let now = start();

        session
            .set_budget(
                BudgetPeriodType::Monthly,
                Money::from_units_cents(1000, 0),
                now,
            )
            .unwrap();
        session
            .add_expense(Money::from_units_cents(10, 0), None, Category::Food, now)
            .unwrap();

        session.reset_budget().unwrap();

        assert!(session.budget().is_none());
        assert!(session.current_expenses().is_empty());
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_reset_without_budget_fails() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = session(&temp_dir);

        let err = session.reset_budget().unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_notifications_gated_by_master_switch() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = session(&temp_dir);
        let now = start();

        session
            .set_budget(
                BudgetPeriodType::Monthly,
                Money::from_units_cents(100, 0),
                now,
            )
            .unwrap();
        session.set_notifications_enabled(false);

        let logged = session
            .add_expense(
                Money::from_units_cents(100, 0),
                None,
                Category::Shopping,
                now,
            )
            .unwrap();

        assert_eq!(logged.remaining, Money::zero());
        assert_eq!(logged.notification, None);
    }

    #[test]
    fn test_depleted_notification_fires() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = session(&temp_dir);
        let now = start();

        session
            .set_budget(
                BudgetPeriodType::Monthly,
                Money::from_units_cents(100, 0),
                now,
            )
            .unwrap();

        let logged = session
            .add_expense(
                Money::from_units_cents(150, 0),
                None,
                Category::Shopping,
                now,
            )
            .unwrap();

        assert_eq!(logged.remaining, Money::from_cents(-5000));
        assert_eq!(logged.notification, Some(BudgetNotification::Depleted));
    }

    #[test]
    fn test_expense_uses_session_currency() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = session(&temp_dir);
        let now = start();

        session.set_currency(Currency::Eur);
        session
            .set_budget(
                BudgetPeriodType::Monthly,
                Money::from_units_cents(500, 0),
                now,
            )
            .unwrap();

        let logged = session
            .add_expense(Money::from_units_cents(9, 99), None, Category::Food, now)
            .unwrap();

        assert_eq!(logged.expense.currency, Currency::Eur);
        assert_eq!(logged.expense.budget_type, BudgetPeriodType::Monthly);
    }

    #[test]
    fn test_settings_changes_persist() {
        let temp_dir = TempDir::new().unwrap();

        {
            let mut session = session(&temp_dir);
            session.set_currency(Currency::Jpy);
            session.set_theme(Theme::Dark);
            session.set_critical_warning_enabled(false);
        }

        let session = session(&temp_dir);
        assert_eq!(session.settings().currency, Currency::Jpy);
        assert_eq!(session.settings().theme, Theme::Dark);
        assert!(!session.settings().critical_warning_enabled);
        assert!(session.settings().notifications_enabled);
    }
}
