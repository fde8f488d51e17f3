//! Rust Bank Ledger Library
//! # Overview
//!
//! This library keeps a single-process banking ledger: clients, their accounts,
//! deposits, withdrawals and per-account transaction history.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, Client, History, TransactionRecord, etc.)
//! - [`core`] - Business logic components:
//!   - [`core::registry`] - Client directory and account opening
//!   - [`core::engine`] - Command processing orchestration
//! - [`io`] - CSV command scripts and account output
//! - [`runner`] - Batch script execution
//! - [`cli`] - CLI arguments parsing and the interactive menu
//!
//! # Account Rules
//!
//! - Deposits must be strictly positive
//! - Withdrawals must be strictly positive, covered by the balance, within the
//!   per-withdrawal limit, and within the number of withdrawals allowed per window
//! - Only accepted operations are recorded in the account history
//! - A client can only operate on accounts it owns

pub mod cli;
pub mod core;
pub mod io;
pub mod runner;
pub mod types;

pub use core::{Bank, Directory, Registry};
pub use io::write_accounts_csv;
pub use types::{
    Account, AccountConfig, AccountNumber, Client, Command, History, LedgerError, Outcome,
    TaxId, TransactionKind, TransactionRecord, TransactionRequest, WithdrawalWindow,
};
