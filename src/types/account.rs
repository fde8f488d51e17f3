//! Account-related types for the banking ledger
//!
//! This module defines the Account structure and the deposit/withdrawal
//! operations that are the only way its balance changes.

use super::config::{AccountConfig, WithdrawalWindow};
use super::error::LedgerError;
use super::history::History;
use super::transaction::{
    AccountNumber, TaxId, TransactionKind, TransactionRecord, TransactionRequest,
};
use chrono::{DateTime, Local, NaiveDate};
use rust_decimal::Decimal;

/// Client account state
///
/// Holds the balance, the withdrawal limits it was opened with, and its own
/// history.
///
/// # Invariants
///
/// - `balance` is never negative
/// - `withdrawals_made` never exceeds `max_withdrawals` within a window
/// - `history` holds exactly one record per accepted operation
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    number: AccountNumber,
    branch: String,
    /// Tax id of the owning client
    owner: TaxId,
    balance: Decimal,
    withdrawal_limit: Decimal,
    max_withdrawals: u32,
    withdrawals_made: u32,
    window: WithdrawalWindow,
    /// Local date of the last counted withdrawal, used by daily windows
    last_withdrawal: Option<NaiveDate>,
    history: History,
}

impl Account {
    /// Create a new account with zero balance and empty history
    ///
    /// # Arguments
    ///
    /// * `owner` - Tax id of the client the account belongs to
    /// * `number` - Account number
    /// * `config` - Branch and withdrawal limits for the account
    pub fn new(owner: &str, number: AccountNumber, config: &AccountConfig) -> Self {
        Account {
            number,
            branch: config.branch.clone(),
            owner: owner.to_string(),
            balance: Decimal::ZERO,
            withdrawal_limit: config.withdrawal_limit,
            max_withdrawals: config.max_withdrawals,
            withdrawals_made: 0,
            window: config.window,
            last_withdrawal: None,
            history: History::new(),
        }
    }

    pub fn number(&self) -> AccountNumber {
        self.number
    }

    pub fn branch(&self) -> &str {
        &self.branch
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn withdrawal_limit(&self) -> Decimal {
        self.withdrawal_limit
    }

    pub fn max_withdrawals(&self) -> u32 {
        self.max_withdrawals
    }

    /// Withdrawals counted against the current window
    ///
    /// For a daily window this is zero once the local date has moved past the
    /// day of the last withdrawal.
    pub fn withdrawals_made(&self) -> u32 {
        self.withdrawals_made_on(Local::now().date_naive())
    }

    pub(crate) fn withdrawals_made_on(&self, today: NaiveDate) -> u32 {
        self.withdrawals_in_window(today)
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Apply a request, dispatching on its kind
    pub fn apply(&mut self, request: TransactionRequest) -> Result<(), LedgerError> {
        match request {
            TransactionRequest::Deposit(amount) => self.deposit(amount),
            TransactionRequest::Withdrawal(amount) => self.withdraw(amount),
        }
    }

    /// Deposit funds into the account
    ///
    /// # Errors
    ///
    /// - `InvalidAmount` if `amount` is zero or negative
    /// - `ArithmeticOverflow` if the balance cannot hold the result
    pub fn deposit(&mut self, amount: Decimal) -> Result<(), LedgerError> {
        self.deposit_at(amount, Local::now())
    }

    /// Withdraw funds from the account
    ///
    /// Checks run in a fixed order and the first failure is reported:
    ///
    /// 1. `InvalidAmount` if `amount` is zero or negative
    /// 2. `InsufficientFunds` if `amount` exceeds the balance
    /// 3. `ExceedsPerTransactionLimit` if `amount` exceeds the withdrawal limit
    /// 4. `WithdrawalCountExceeded` if the window's withdrawals are used up
    ///
    /// A rejected withdrawal leaves the account untouched.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), LedgerError> {
        self.withdraw_at(amount, Local::now())
    }

    pub(crate) fn deposit_at(
        &mut self,
        amount: Decimal,
        at: DateTime<Local>,
    ) -> Result<(), LedgerError> {
        ensure_positive(amount)?;

        let new_balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| LedgerError::arithmetic_overflow("deposit", self.number))?;

        self.balance = new_balance;
        self.history
            .append(TransactionRecord::new(TransactionKind::Deposit, amount, at));

        Ok(())
    }

    pub(crate) fn withdraw_at(
        &mut self,
        amount: Decimal,
        at: DateTime<Local>,
    ) -> Result<(), LedgerError> {
        ensure_positive(amount)?;

        if amount > self.balance {
            return Err(LedgerError::insufficient_funds(
                self.number,
                self.balance,
                amount,
            ));
        }

        if amount > self.withdrawal_limit {
            return Err(LedgerError::exceeds_limit(
                self.number,
                self.withdrawal_limit,
                amount,
            ));
        }

        let today = at.date_naive();
        let made = self.withdrawals_in_window(today);
        if made >= self.max_withdrawals {
            return Err(LedgerError::withdrawal_count_exceeded(
                self.number,
                self.max_withdrawals,
            ));
        }

        // amount <= balance was checked above
        self.balance -= amount;
        self.withdrawals_made = made + 1;
        self.last_withdrawal = Some(today);
        self.history
            .append(TransactionRecord::new(TransactionKind::Withdrawal, amount, at));

        Ok(())
    }

    /// Withdrawals counted against the window containing `today`
    fn withdrawals_in_window(&self, today: NaiveDate) -> u32 {
        match (self.window, self.last_withdrawal) {
            (WithdrawalWindow::Daily, Some(last)) if last < today => 0,
            _ => self.withdrawals_made,
        }
    }

    /// Render the history followed by the current balance
    pub fn statement(&self) -> String {
        format!(
            "{}\n\nBalance: {:.2}",
            self.history.statement(),
            self.balance
        )
    }
}

fn ensure_positive(amount: Decimal) -> Result<(), LedgerError> {
    if amount <= Decimal::ZERO {
        return Err(LedgerError::invalid_amount(amount));
    }
    Ok(())
}
