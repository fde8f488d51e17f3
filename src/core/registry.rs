//! Client registry module
//!
//! This module provides the `Registry` struct which maintains every registered
//! client, keyed by tax id, together with the accounts each one owns.
//!
//! The Registry is responsible for:
//! - Rejecting a second client with an already registered tax id
//! - Assigning sequential account numbers when accounts are opened
//! - Providing sorted account listings for output

use crate::core::traits::Directory;
use crate::types::{Account, AccountConfig, AccountNumber, Client, LedgerError};
use std::collections::HashMap;

/// In-memory directory of clients and their accounts
///
/// Owned by the program entry point and passed down by reference; there is
/// no global instance.
#[derive(Debug)]
pub struct Registry {
    /// Map of tax ids to clients
    clients: HashMap<String, Client>,
    /// Number the next opened account receives
    next_account: AccountNumber,
    /// Limits applied to every opened account
    config: AccountConfig,
}

impl Registry {
    /// Create an empty registry whose accounts use `config`
    pub fn new(config: AccountConfig) -> Self {
        Registry {
            clients: HashMap::new(),
            next_account: 1,
            config,
        }
    }

    pub fn client_count(&self) -> usize {
        self.clients.len()
    }

    /// Register a new client
    ///
    /// # Errors
    ///
    /// Returns `DuplicateClient` if a client with the same tax id exists; the
    /// registered client is left unchanged.
    pub fn register_client(&mut self, client: Client) -> Result<&Client, LedgerError> {
        if self.clients.contains_key(&client.tax_id) {
            return Err(LedgerError::duplicate_client(&client.tax_id));
        }

        let tax_id = client.tax_id.clone();
        Ok(&*self.clients.entry(tax_id).or_insert(client))
    }

    pub fn find_client_mut(&mut self, tax_id: &str) -> Option<&mut Client> {
        self.clients.get_mut(tax_id)
    }

    /// Open a new account for the client with `tax_id`
    ///
    /// # Returns
    ///
    /// The number assigned to the new account
    ///
    /// # Errors
    ///
    /// Returns `ClientNotFound` if no client has `tax_id`. No account number
    /// is consumed in that case. This departs on purpose from a menu-style
    /// running counter that is bumped before the client lookup: a failed
    /// open leaves no gap in the numbering.
    pub fn open_account(&mut self, tax_id: &str) -> Result<AccountNumber, LedgerError> {
        let number = self.next_account;
        let client = self
            .clients
            .get_mut(tax_id)
            .ok_or_else(|| LedgerError::client_not_found(tax_id))?;

        client.add_account(Account::new(tax_id, number, &self.config));
        self.next_account += 1;

        Ok(number)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new(AccountConfig::default())
    }
}

impl Directory for Registry {
    fn find_client(&self, tax_id: &str) -> Option<&Client> {
        self.clients.get(tax_id)
    }

    fn list_accounts(&self) -> Vec<&Account> {
        let mut accounts: Vec<&Account> = self
            .clients
            .values()
            .flat_map(|client| client.accounts())
            .collect();
        accounts.sort_by_key(|account| account.number());
        accounts
    }
}
