//! CSV format handling for command scripts and account output
//!
//! This module centralizes all CSV format concerns, providing:
//! - CsvCommand structure for deserialization
//! - Conversion from CSV rows to engine commands
//! - Account summary serialization
//!
//! All functions are pure (no I/O beyond the given writer) for easy testing.

use crate::types::{AccountNumber, AccountSummary, Command};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Write;
use std::str::FromStr;

/// Header row expected at the top of a command script
pub const SCRIPT_HEADER: &str = "command,tax_id,account,amount,name,birth_date,address";

/// CSV record structure for deserialization
///
/// Matches the script format with columns:
/// `command,tax_id,account,amount,name,birth_date,address`.
/// Every column but `command` is optional because each command only uses a
/// subset of them.
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct CsvCommand {
    pub command: String,
    pub tax_id: Option<String>,
    pub account: Option<AccountNumber>,
    pub amount: Option<String>,
    pub name: Option<String>,
    pub birth_date: Option<String>,
    pub address: Option<String>,
}

/// Convert a CsvCommand to a Command
///
/// This function:
/// - Parses the command name (case insensitive)
/// - Parses the amount string into a Decimal for deposits and withdrawals
/// - Validates that each command has the columns it needs
///
/// # Returns
///
/// Result containing either:
/// - Ok(Command) - Successfully converted row
/// - Err(String) - Error message describing the conversion failure
pub fn convert_csv_command(row: CsvCommand) -> Result<Command, String> {
    let command = row.command.trim().to_lowercase();

    match command.as_str() {
        "register" => Ok(Command::RegisterClient {
            name: required(row.name, "name", &command)?,
            tax_id: required(row.tax_id, "tax_id", &command)?,
            birth_date: row.birth_date.unwrap_or_default(),
            address: row.address.unwrap_or_default(),
        }),
        "open" => Ok(Command::OpenAccount {
            tax_id: required(row.tax_id, "tax_id", &command)?,
        }),
        "deposit" => Ok(Command::Deposit {
            tax_id: required(row.tax_id, "tax_id", &command)?,
            account: row.account.ok_or_else(|| missing("account", &command))?,
            amount: parse_amount(row.amount, &command)?,
        }),
        "withdraw" | "withdrawal" => Ok(Command::Withdraw {
            tax_id: required(row.tax_id, "tax_id", &command)?,
            account: row.account.ok_or_else(|| missing("account", &command))?,
            amount: parse_amount(row.amount, &command)?,
        }),
        "statement" => Ok(Command::Statement {
            tax_id: required(row.tax_id, "tax_id", &command)?,
            account: row.account.ok_or_else(|| missing("account", &command))?,
        }),
        "list" => Ok(Command::ListAccounts),
        _ => Err(format!("Invalid command: '{}'", row.command)),
    }
}

fn missing(field: &str, command: &str) -> String {
    format!("{} command requires {}", command, field)
}

fn required(value: Option<String>, field: &str, command: &str) -> Result<String, String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ => Err(missing(field, command)),
    }
}

fn parse_amount(amount: Option<String>, command: &str) -> Result<Decimal, String> {
    let amount = required(amount, "an amount", command)?;
    Decimal::from_str(&amount).map_err(|_| format!("Invalid amount '{}'", amount))
}

/// Write account summaries to CSV format
///
/// Writes accounts with columns: branch, account, holder, tax_id, balance, withdrawals
/// Accounts are sorted by account number for deterministic output.
///
/// # Returns
///
/// * `Ok(())` if writing succeeded
/// * `Err(String)` if a write error occurred
pub fn write_accounts_csv(accounts: &[AccountSummary], output: &mut dyn Write) -> Result<(), String> {
    use csv::Writer;

    let mut writer = Writer::from_writer(output);

    writer
        .write_record(["branch", "account", "holder", "tax_id", "balance", "withdrawals"])
        .map_err(|e| format!("Failed to write CSV header: {}", e))?;

    let mut sorted_accounts = accounts.to_vec();
    sorted_accounts.sort_by_key(|account| account.number);

    for account in sorted_accounts {
        writer
            .write_record(&[
                account.branch,
                account.number.to_string(),
                account.holder,
                account.tax_id,
                format!("{:.2}", account.balance),
                account.withdrawals_made.to_string(),
            ])
            .map_err(|e| format!("Failed to write account record: {}", e))?;
    }

    writer
        .flush()
        .map_err(|e| format!("Failed to flush output: {}", e))?;

    Ok(())
}
