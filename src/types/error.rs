//! Error types for the banking ledger
//!
//! This module defines all error types that can occur while operating the ledger.
//! Errors are designed to be descriptive and user-friendly for CLI output.
//!
//! # Error Categories
//!
//! - **Operation Errors**: Invalid amounts, insufficient funds, withdrawal limits
//! - **Directory Errors**: Unknown clients or accounts, duplicate tax ids
//! - **Arithmetic Errors**: Overflow in balance calculations
//! - **Script Errors**: File not found, I/O failures, malformed CSV rows

use super::transaction::{AccountNumber, TaxId};
use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the ledger
///
/// Every variant is a recoverable outcome: the rejected operation leaves all
/// state untouched and the caller decides whether to report or retry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// Amount is zero or negative
    #[error("Invalid amount {amount}: amounts must be greater than zero")]
    InvalidAmount {
        /// The rejected amount
        amount: Decimal,
    },

    /// Withdrawal larger than the current balance
    #[error(
        "Insufficient funds in account {account}: balance {balance}, requested {requested}"
    )]
    InsufficientFunds {
        /// Account number
        account: AccountNumber,
        /// Current balance
        balance: Decimal,
        /// Requested withdrawal amount
        requested: Decimal,
    },

    /// Withdrawal larger than the per-transaction ceiling
    #[error("Withdrawal of {requested} from account {account} exceeds the limit of {limit}")]
    ExceedsPerTransactionLimit {
        /// Account number
        account: AccountNumber,
        /// Configured per-withdrawal ceiling
        limit: Decimal,
        /// Requested withdrawal amount
        requested: Decimal,
    },

    /// Maximum number of withdrawals already reached
    #[error("Account {account} has reached the maximum of {max} withdrawals")]
    WithdrawalCountExceeded {
        /// Account number
        account: AccountNumber,
        /// Configured maximum withdrawals per period
        max: u32,
    },

    /// No client registered under the tax id
    #[error("Client with tax id {tax_id} not found")]
    ClientNotFound {
        /// The tax id that was looked up
        tax_id: TaxId,
    },

    /// The client does not own an account with this number
    #[error("Account {account} not found for client {tax_id}")]
    AccountNotFound {
        /// Client tax id
        tax_id: TaxId,
        /// Account number that was looked up
        account: AccountNumber,
    },

    /// A client with this tax id is already registered
    #[error("A client with tax id {tax_id} already exists")]
    DuplicateClient {
        /// The duplicated tax id
        tax_id: TaxId,
    },

    /// Arithmetic overflow would occur
    #[error("Arithmetic overflow in {operation} for account {account}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// Account number
        account: AccountNumber,
    },

    /// Script file not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// Malformed script row
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },
}

impl From<std::io::Error> for LedgerError {
    fn from(error: std::io::Error) -> Self {
        LedgerError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for LedgerError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        LedgerError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl LedgerError {
    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: Decimal) -> Self {
        LedgerError::InvalidAmount { amount }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(account: AccountNumber, balance: Decimal, requested: Decimal) -> Self {
        LedgerError::InsufficientFunds {
            account,
            balance,
            requested,
        }
    }

    /// Create an ExceedsPerTransactionLimit error
    pub fn exceeds_limit(account: AccountNumber, limit: Decimal, requested: Decimal) -> Self {
        LedgerError::ExceedsPerTransactionLimit {
            account,
            limit,
            requested,
        }
    }

    /// Create a WithdrawalCountExceeded error
    pub fn withdrawal_count_exceeded(account: AccountNumber, max: u32) -> Self {
        LedgerError::WithdrawalCountExceeded { account, max }
    }

    /// Create a ClientNotFound error
    pub fn client_not_found(tax_id: &str) -> Self {
        LedgerError::ClientNotFound {
            tax_id: tax_id.to_string(),
        }
    }

    /// Create an AccountNotFound error
    pub fn account_not_found(tax_id: &str, account: AccountNumber) -> Self {
        LedgerError::AccountNotFound {
            tax_id: tax_id.to_string(),
            account,
        }
    }

    /// Create a DuplicateClient error
    pub fn duplicate_client(tax_id: &str) -> Self {
        LedgerError::DuplicateClient {
            tax_id: tax_id.to_string(),
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, account: AccountNumber) -> Self {
        LedgerError::ArithmeticOverflow {
            operation: operation.to_string(),
            account,
        }
    }

    /// Whether the error was raised by an account operation, as opposed to
    /// a directory lookup or script handling
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            LedgerError::InvalidAmount { .. }
                | LedgerError::InsufficientFunds { .. }
                | LedgerError::ExceedsPerTransactionLimit { .. }
                | LedgerError::WithdrawalCountExceeded { .. }
                | LedgerError::ArithmeticOverflow { .. }
        )
    }
}
