//! Transaction-related types for the banking ledger
//!
//! This module defines the identifiers, the recorded movements that make up an
//! account's history, and the requests a client submits against an account.

use chrono::{DateTime, Local};
use rust_decimal::Decimal;
use std::fmt;

/// Account number, assigned sequentially by the registry
pub type AccountNumber = u32;

/// Client tax id, the natural key of a client
pub type TaxId = String;

/// Timestamp layout used when rendering statements
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Kinds of monetary movement an account records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    /// Credit funds to an account
    Deposit,

    /// Debit funds from an account, subject to the account's withdrawal limits
    Withdrawal,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionKind::Deposit => write!(f, "Deposit"),
            TransactionKind::Withdrawal => write!(f, "Withdrawal"),
        }
    }
}

/// Immutable record of one completed movement
///
/// Only operations that passed validation are recorded, so `amount` is
/// always strictly positive.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRecord {
    kind: TransactionKind,
    amount: Decimal,
    timestamp: DateTime<Local>,
}

impl TransactionRecord {
    pub(crate) fn new(kind: TransactionKind, amount: Decimal, timestamp: DateTime<Local>) -> Self {
        debug_assert!(amount > Decimal::ZERO);
        TransactionRecord {
            kind,
            amount,
            timestamp,
        }
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }
}

impl fmt::Display for TransactionRecord {
    /// Renders as `Deposit:    1000.00 at 17/10/2026 14:03:12`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = format!("{}:", self.kind);
        write!(
            f,
            "{:<12}{:.2} at {}",
            label,
            self.amount,
            self.timestamp.format(TIMESTAMP_FORMAT)
        )
    }
}

/// A movement a client asks to perform on one of its accounts
///
/// Each variant is dispatched to the matching account operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionRequest {
    Deposit(Decimal),
    Withdrawal(Decimal),
}

impl TransactionRequest {
    pub fn kind(&self) -> TransactionKind {
        match self {
            TransactionRequest::Deposit(_) => TransactionKind::Deposit,
            TransactionRequest::Withdrawal(_) => TransactionKind::Withdrawal,
        }
    }

    pub fn amount(&self) -> Decimal {
        match self {
            TransactionRequest::Deposit(amount) | TransactionRequest::Withdrawal(amount) => *amount,
        }
    }
}
