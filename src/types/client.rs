//! Client-related types for the banking ledger

use super::account::Account;
use super::error::LedgerError;
use super::transaction::{AccountNumber, TaxId, TransactionRequest};

/// A registered person owning zero or more accounts
///
/// Tax id uniqueness is enforced by the registry, not here.
#[derive(Debug, Clone, PartialEq)]
pub struct Client {
    pub name: String,
    pub tax_id: TaxId,
    /// Birth date exactly as entered (dd-mm-yyyy by convention)
    pub birth_date: String,
    pub address: String,
    accounts: Vec<Account>,
}

impl Client {
    pub fn new(name: &str, tax_id: &str, birth_date: &str, address: &str) -> Self {
        Client {
            name: name.to_string(),
            tax_id: tax_id.to_string(),
            birth_date: birth_date.to_string(),
            address: address.to_string(),
            accounts: Vec::new(),
        }
    }

    /// Accounts in the order they were added
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Link an account to this client
    ///
    /// No duplicate check is made; callers add each account once.
    pub fn add_account(&mut self, account: Account) {
        self.accounts.push(account);
    }

    pub fn account(&self, number: AccountNumber) -> Option<&Account> {
        self.accounts.iter().find(|account| account.number() == number)
    }

    pub fn account_mut(&mut self, number: AccountNumber) -> Option<&mut Account> {
        self.accounts
            .iter_mut()
            .find(|account| account.number() == number)
    }

    /// Perform a transaction on one of this client's accounts
    ///
    /// # Errors
    ///
    /// Returns `AccountNotFound` if the client owns no account with `number`,
    /// otherwise whatever the account operation reports.
    pub fn perform_transaction(
        &mut self,
        number: AccountNumber,
        request: TransactionRequest,
    ) -> Result<(), LedgerError> {
        let tax_id = self.tax_id.clone();
        let account = self
            .account_mut(number)
            .ok_or_else(|| LedgerError::account_not_found(&tax_id, number))?;

        account.apply(request)
    }
}
