use anyhow::Result;
use clap::{Parser, Subcommand};

use spendlog::cli::{
    handle_budget_command, handle_calc_command, handle_expense_command, handle_history_command,
    handle_settings_command,
};
use spendlog::config::paths::SpendlogPaths;
use spendlog::display::format_settings;
use spendlog::services::LedgerSession;
use spendlog::storage::json_file_valid;

#[derive(Parser)]
#[command(
    name = "spendlog",
    version,
    about = "Terminal-based personal budget tracker",
    long_about = "Spendlog is a terminal-based personal budget tracker. Set a daily, \
                  weekly, monthly, or yearly budget, log expenses against it, and \
                  review where your money goes without leaving the command line."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Budget management commands
    #[command(subcommand)]
    Budget(spendlog::cli::BudgetCommands),

    /// Expense logging commands
    #[command(subcommand, alias = "exp")]
    Expense(spendlog::cli::ExpenseCommands),

    /// Purchase calculators (item totals, fuel fill-ups)
    #[command(subcommand)]
    Calc(spendlog::cli::CalcCommands),

    /// Browse and summarize expense history
    History(spendlog::cli::HistoryArgs),

    /// Application settings commands
    #[command(subcommand)]
    Settings(spendlog::cli::SettingsCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    spendlog::init_tracing();

    let cli = Cli::parse();

    let paths = SpendlogPaths::new()?;
    let mut session = LedgerSession::open(paths);

    match cli.command {
        Some(Commands::Budget(cmd)) => {
            handle_budget_command(&mut session, cmd)?;
        }
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&mut session, cmd)?;
        }
        Some(Commands::Calc(cmd)) => {
            handle_calc_command(&mut session, cmd)?;
        }
        Some(Commands::History(args)) => {
            handle_history_command(&session, args)?;
        }
        Some(Commands::Settings(cmd)) => {
            handle_settings_command(&mut session, cmd)?;
        }
        Some(Commands::Config) => {
            let paths = session.paths();
            println!("Spendlog Configuration");
            println!("======================");
            println!("Data directory: {}", paths.base_dir().display());
            println!(
                "Settings file:  {} ({})",
                paths.settings_file().display(),
                file_state(&paths.settings_file())
            );
            println!(
                "Session file:   {} ({})",
                paths.session_file().display(),
                file_state(&paths.session_file())
            );
            println!();
            print!("{}", format_settings(session.settings()));
        }
        None => {
            println!("Spendlog - Terminal-based personal budget tracker");
            println!();
            if !session.paths().is_initialized() {
                println!("Looks like a first run. Set a budget to get started:");
                println!("  spendlog budget set monthly 1500");
                println!();
            }
            println!("Run 'spendlog --help' for usage information.");
        }
    }

    Ok(())
}

/// Describe the on-disk state of a data file for `spendlog config`.
fn file_state(path: &std::path::Path) -> &'static str {
    if !path.exists() {
        "missing"
    } else if json_file_valid(path) {
        "ok"
    } else {
        "unreadable"
    }
}
