//! Core traits for client and account lookup
//!
//! The command engine only needs two read queries from whatever directory
//! holds clients; they are captured here so the lookup side can be swapped
//! without touching account logic.

use crate::types::{Account, Client};

/// Read access to the registered clients and their accounts
pub trait Directory {
    /// Find a client by tax id
    fn find_client(&self, tax_id: &str) -> Option<&Client>;

    /// All accounts, ordered by account number
    fn list_accounts(&self) -> Vec<&Account>;
}
