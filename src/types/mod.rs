//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: Account state and its deposit/withdrawal operations
//! - `client`: Clients and the accounts they own
//! - `command`: Commands accepted by the bank engine and their outcomes
//! - `config`: Limits applied to newly opened accounts
//! - `history`: Append-only per-account transaction log
//! - `transaction`: Transaction records, requests and identifiers
//! - `error`: Error types for the ledger

pub mod account;
pub mod client;
pub mod command;
pub mod config;
pub mod error;
pub mod history;
pub mod transaction;

pub use account::Account;
pub use client::Client;
pub use command::{AccountSummary, Command, Outcome};
pub use config::{AccountConfig, WithdrawalWindow};
pub use error::LedgerError;
pub use history::{History, NO_MOVEMENTS};
pub use transaction::{
    AccountNumber, TaxId, TransactionKind, TransactionRecord, TransactionRequest,
};
