//! End-to-end tests for the spendlog binary.
//!
//! Each test runs against its own data directory via `SPENDLOG_DATA_DIR`
//! so state never leaks between tests.

use std::error::Error;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn spendlog(data_dir: &TempDir) -> Result<Command, Box<dyn Error>> {
    let mut cmd = Command::cargo_bin("spendlog")?;
    cmd.env("SPENDLOG_DATA_DIR", data_dir.path());
    Ok(cmd)
}

#[test]
fn first_run_shows_getting_started_hint() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;

    spendlog(&dir)?.assert().success().stdout(
        predicate::str::contains("first run")
            .and(predicate::str::contains("spendlog budget set monthly 1500")),
    );

    Ok(())
}

#[test]
fn budget_set_spend_and_status_flow() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;

    spendlog(&dir)?
        .args(["budget", "set", "monthly", "1500"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Set Monthly budget of $1500.00")
                .and(predicate::str::contains("Next reset:")),
        );

    spendlog(&dir)?
        .args(["expense", "add", "45.50", "--category", "food"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Added Food expense: $45.50")
                .and(predicate::str::contains("Remaining budget: $1454.50")),
        );

    spendlog(&dir)?
        .args(["budget", "status"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Remaining Monthly Budget: $1454.50")
                .and(predicate::str::contains("[OK]")),
        );

    Ok(())
}

#[test]
fn expense_add_requires_active_budget() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;

    spendlog(&dir)?
        .args(["expense", "add", "10.00", "--category", "food"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no active budget"));

    Ok(())
}

#[test]
fn second_budget_rejected_while_one_is_active() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;

    spendlog(&dir)?
        .args(["budget", "set", "weekly", "200"])
        .assert()
        .success();

    spendlog(&dir)?
        .args(["budget", "set", "daily", "50"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already active"));

    Ok(())
}

#[test]
fn budget_reset_clears_the_active_budget() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;

    spendlog(&dir)?
        .args(["budget", "set", "weekly", "200"])
        .assert()
        .success();

    spendlog(&dir)?
        .args(["budget", "reset"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Budget cleared"));

    spendlog(&dir)?
        .args(["budget", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No active budget"));

    Ok(())
}

#[test]
fn calc_item_reports_total_without_logging() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;

    spendlog(&dir)?
        .args(["calc", "item", "--price", "4.50", "--quantity", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total food expense: $13.50"));

    spendlog(&dir)?
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses recorded this period."));

    Ok(())
}

#[test]
fn calc_fuel_with_add_logs_the_expense() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;

    spendlog(&dir)?
        .args(["budget", "set", "monthly", "500"])
        .assert()
        .success();

    spendlog(&dir)?
        .args(["calc", "fuel", "--price", "3.20", "--gallons", "10", "--add"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Total gas expense: $32.00")
                .and(predicate::str::contains("Remaining: $468.00")),
        );

    Ok(())
}

#[test]
fn history_summarizes_logged_expenses() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;

    spendlog(&dir)?
        .args(["budget", "set", "monthly", "1000"])
        .assert()
        .success();
    spendlog(&dir)?
        .args(["expense", "add", "25.00", "--category", "food"])
        .assert()
        .success();
    spendlog(&dir)?
        .args(["expense", "add", "15.00", "--category", "gas"])
        .assert()
        .success();

    spendlog(&dir)?
        .args(["history"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Spending Summary (All time)")
                .and(predicate::str::contains("Total Spent:"))
                .and(predicate::str::contains("Spending by Category")),
        );

    Ok(())
}

#[test]
fn history_expenses_survive_budget_reset() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;

    spendlog(&dir)?
        .args(["budget", "set", "monthly", "1000"])
        .assert()
        .success();
    spendlog(&dir)?
        .args(["expense", "add", "25.00", "--category", "food"])
        .assert()
        .success();
    spendlog(&dir)?
        .args(["budget", "reset"])
        .assert()
        .success();

    spendlog(&dir)?
        .args(["history", "--category", "food"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Spent:"));

    Ok(())
}

#[test]
fn settings_currency_change_applies_to_new_expenses() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;

    spendlog(&dir)?
        .args(["settings", "currency", "eur"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Currency set to"));

    spendlog(&dir)?
        .args(["budget", "set", "monthly", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{20ac}100.00"));

    Ok(())
}

#[test]
fn config_reports_paths_and_file_state() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;

    spendlog(&dir)?
        .args(["config"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Data directory")
                .and(predicate::str::contains("(missing)")),
        );

    Ok(())
}

#[test]
fn unknown_category_lists_the_valid_ones() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;

    spendlog(&dir)?
        .args(["budget", "set", "monthly", "100"])
        .assert()
        .success();

    spendlog(&dir)?
        .args(["expense", "add", "5.00", "--category", "snacks"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown category 'snacks'"));

    Ok(())
}
