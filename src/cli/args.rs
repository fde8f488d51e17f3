use crate::types::{AccountConfig, WithdrawalWindow};
use clap::{Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;
use std::path::PathBuf;

/// Keep clients, accounts and their transaction history
#[derive(Parser, Debug)]
#[command(name = "bank-ledger")]
#[command(about = "Keep clients, accounts and their transaction history", long_about = None)]
pub struct CliArgs {
    #[command(subcommand)]
    pub mode: Mode,

    /// Branch code for newly opened accounts
    #[arg(
        long = "branch",
        value_name = "CODE",
        global = true,
        help = "Branch code for new accounts (default: 0001)"
    )]
    pub branch: Option<String>,

    /// Per-withdrawal ceiling for newly opened accounts
    #[arg(
        long = "withdrawal-limit",
        value_name = "AMOUNT",
        global = true,
        help = "Largest amount a single withdrawal may take (default: 500.00)"
    )]
    pub withdrawal_limit: Option<Decimal>,

    /// Maximum withdrawals per window for newly opened accounts
    #[arg(
        long = "max-withdrawals",
        value_name = "COUNT",
        global = true,
        help = "Number of withdrawals allowed per window (default: 3)"
    )]
    pub max_withdrawals: Option<u32>,

    /// Window over which withdrawals are counted
    #[arg(
        long = "withdrawal-window",
        value_name = "WINDOW",
        global = true,
        default_value = "lifetime",
        help = "'lifetime' never resets the withdrawal count, 'daily' resets it each day"
    )]
    pub withdrawal_window: WindowType,
}

/// How the program collects commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Mode {
    /// Run a CSV command script and print the final accounts as CSV
    Run {
        /// Input CSV file path containing commands
        #[arg(value_name = "INPUT", help = "Path to the command script")]
        input_file: PathBuf,
    },
    /// Interactive menu on stdin/stdout
    Shell,
}

/// Available withdrawal windows
#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
pub enum WindowType {
    Lifetime,
    Daily,
}

impl From<WindowType> for WithdrawalWindow {
    fn from(window: WindowType) -> Self {
        match window {
            WindowType::Lifetime => WithdrawalWindow::Lifetime,
            WindowType::Daily => WithdrawalWindow::Daily,
        }
    }
}

impl CliArgs {
    /// Create an AccountConfig from CLI arguments
    ///
    /// Options that were not given fall back to the defaults; invalid values
    /// are replaced by `AccountConfig::new` with a warning.
    pub fn to_account_config(&self) -> AccountConfig {
        let default = AccountConfig::default();
        AccountConfig::new(
            self.branch.as_deref().unwrap_or(&default.branch),
            self.withdrawal_limit.unwrap_or(default.withdrawal_limit),
            self.max_withdrawals.unwrap_or(default.max_withdrawals),
            self.withdrawal_window.into(),
        )
    }
}
