//! Command processing engine
//!
//! This module provides the `Bank` engine, which resolves clients and accounts
//! through the `Registry` and applies one command at a time.
//!
//! The engine enforces business rules such as:
//! - Client lookup by tax id before any account operation
//! - Account ownership: a client can only operate on its own accounts
//! - Every accepted command is logged at `info`, every rejection at `warn`

use crate::core::registry::Registry;
use crate::core::traits::Directory;
use crate::types::{
    AccountConfig, AccountNumber, AccountSummary, Client, Command, LedgerError, Outcome,
    TransactionRequest,
};

/// Command processing engine
///
/// Owns the registry for the lifetime of a session and applies commands to it
/// synchronously.
#[derive(Debug, Default)]
pub struct Bank {
    registry: Registry,
}

impl Bank {
    /// Create an empty bank whose accounts use `config`
    pub fn new(config: AccountConfig) -> Self {
        Bank {
            registry: Registry::new(config),
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Process a single command
    ///
    /// # Errors
    ///
    /// Returns the reason the command was rejected. State is unchanged after
    /// a rejection.
    pub fn process(&mut self, command: Command) -> Result<Outcome, LedgerError> {
        let kind = command.name();

        let result = match command {
            Command::RegisterClient {
                name,
                tax_id,
                birth_date,
                address,
            } => self.register_client(Client::new(&name, &tax_id, &birth_date, &address)),
            Command::OpenAccount { tax_id } => self.open_account(&tax_id),
            Command::Deposit {
                tax_id,
                account,
                amount,
            } => self.transact(&tax_id, account, TransactionRequest::Deposit(amount)),
            Command::Withdraw {
                tax_id,
                account,
                amount,
            } => self.transact(&tax_id, account, TransactionRequest::Withdrawal(amount)),
            Command::Statement { tax_id, account } => self.statement(&tax_id, account),
            Command::ListAccounts => Ok(Outcome::Accounts(self.summaries())),
        };

        match &result {
            Ok(outcome) => tracing::info!(command = kind, "{}", outcome),
            Err(e) => tracing::warn!(command = kind, "rejected: {}", e),
        }

        result
    }

    fn register_client(&mut self, client: Client) -> Result<Outcome, LedgerError> {
        let client = self.registry.register_client(client)?;
        Ok(Outcome::ClientRegistered {
            tax_id: client.tax_id.clone(),
        })
    }

    fn open_account(&mut self, tax_id: &str) -> Result<Outcome, LedgerError> {
        let account = self.registry.open_account(tax_id)?;
        Ok(Outcome::AccountOpened {
            tax_id: tax_id.to_string(),
            account,
        })
    }

    fn transact(
        &mut self,
        tax_id: &str,
        account: AccountNumber,
        request: TransactionRequest,
    ) -> Result<Outcome, LedgerError> {
        let client = self
            .registry
            .find_client_mut(tax_id)
            .ok_or_else(|| LedgerError::client_not_found(tax_id))?;

        client.perform_transaction(account, request)?;

        let balance = client
            .account(account)
            .map(|a| a.balance())
            .ok_or_else(|| LedgerError::account_not_found(tax_id, account))?;

        Ok(match request {
            TransactionRequest::Deposit(amount) => Outcome::Deposited {
                account,
                amount,
                balance,
            },
            TransactionRequest::Withdrawal(amount) => Outcome::Withdrawn {
                account,
                amount,
                balance,
            },
        })
    }

    fn statement(&self, tax_id: &str, account: AccountNumber) -> Result<Outcome, LedgerError> {
        let client = self
            .registry
            .find_client(tax_id)
            .ok_or_else(|| LedgerError::client_not_found(tax_id))?;

        let text = client
            .account(account)
            .map(|a| a.statement())
            .ok_or_else(|| LedgerError::account_not_found(tax_id, account))?;

        Ok(Outcome::Statement { account, text })
    }

    /// Summaries of every account, ordered by account number
    pub fn summaries(&self) -> Vec<AccountSummary> {
        self.registry
            .list_accounts()
            .into_iter()
            .map(|account| AccountSummary {
                branch: account.branch().to_string(),
                number: account.number(),
                holder: self
                    .registry
                    .find_client(account.owner())
                    .map(|client| client.name.clone())
                    .unwrap_or_default(),
                tax_id: account.owner().to_string(),
                balance: account.balance(),
                withdrawals_made: account.withdrawals_made(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NO_MOVEMENTS;
    use rstest::rstest;
    use rust_decimal::Decimal;

    fn register(tax_id: &str) -> Command {
        Command::RegisterClient {
            name: format!("Client {}", tax_id),
            tax_id: tax_id.to_string(),
            birth_date: "01-01-1980".to_string(),
            address: "Rua A, 123".to_string(),
        }
    }

    fn open(tax_id: &str) -> Command {
        Command::OpenAccount {
            tax_id: tax_id.to_string(),
        }
    }

    fn deposit(tax_id: &str, account: AccountNumber, amount: i64) -> Command {
        Command::Deposit {
            tax_id: tax_id.to_string(),
            account,
            amount: Decimal::new(amount, 0),
        }
    }

    fn withdraw(tax_id: &str, account: AccountNumber, amount: i64) -> Command {
        Command::Withdraw {
            tax_id: tax_id.to_string(),
            account,
            amount: Decimal::new(amount, 0),
        }
    }

    /// Bank with client "111" owning account 1 and client "222" owning account 2
    fn bank() -> Bank {
        let mut bank = Bank::default();
        for command in [register("111"), register("222"), open("111"), open("222")] {
            bank.process(command).unwrap();
        }
        bank
    }

    #[test]
    fn test_register_and_open() {
        let mut bank = Bank::default();

        assert_eq!(
            bank.process(register("111")),
            Ok(Outcome::ClientRegistered {
                tax_id: "111".to_string()
            })
        );
        assert_eq!(
            bank.process(open("111")),
            Ok(Outcome::AccountOpened {
                tax_id: "111".to_string(),
                account: 1
            })
        );
    }

    #[test]
    fn test_register_duplicate_client() {
        let mut bank = bank();
        assert_eq!(
            bank.process(register("111")),
            Err(LedgerError::duplicate_client("111"))
        );
    }

    #[test]
    fn test_deposit_and_withdraw_report_balance() {
        let mut bank = bank();

        assert_eq!(
            bank.process(deposit("111", 1, 1000)),
            Ok(Outcome::Deposited {
                account: 1,
                amount: Decimal::new(1000, 0),
                balance: Decimal::new(1000, 0)
            })
        );
        assert_eq!(
            bank.process(withdraw("111", 1, 200)),
            Ok(Outcome::Withdrawn {
                account: 1,
                amount: Decimal::new(200, 0),
                balance: Decimal::new(800, 0)
            })
        );
    }

    #[rstest]
    #[case::unknown_client(deposit("999", 1, 10), LedgerError::client_not_found("999"))]
    #[case::unknown_account(deposit("111", 9, 10), LedgerError::account_not_found("111", 9))]
    #[case::foreign_account(deposit("111", 2, 10), LedgerError::account_not_found("111", 2))]
    #[case::foreign_withdrawal(withdraw("222", 1, 10), LedgerError::account_not_found("222", 1))]
    #[case::open_unknown(open("999"), LedgerError::client_not_found("999"))]
    #[case::statement_unknown(
        Command::Statement { tax_id: "999".to_string(), account: 1 },
        LedgerError::client_not_found("999")
    )]
    fn test_lookup_failures(#[case] command: Command, #[case] expected: LedgerError) {
        let mut bank = bank();
        assert_eq!(bank.process(command), Err(expected));
        assert!(bank.summaries().iter().all(|s| s.balance == Decimal::ZERO));
    }

    #[test]
    fn test_rejected_withdrawal_leaves_state() {
        let mut bank = bank();
        bank.process(deposit("111", 1, 100)).unwrap();

        let result = bank.process(withdraw("111", 1, 150));

        assert!(matches!(result, Err(LedgerError::InsufficientFunds { .. })));
        assert_eq!(bank.summaries()[0].balance, Decimal::new(100, 0));
        assert_eq!(bank.summaries()[0].withdrawals_made, 0);
    }

    #[test]
    fn test_statement_of_empty_account() {
        let mut bank = bank();

        let outcome = bank
            .process(Command::Statement {
                tax_id: "222".to_string(),
                account: 2,
            })
            .unwrap();

        match outcome {
            Outcome::Statement { account, text } => {
                assert_eq!(account, 2);
                assert!(text.starts_with(NO_MOVEMENTS));
                assert!(text.ends_with("Balance: 0.00"));
            }
            other => panic!("Expected statement, got {:?}", other),
        }
    }

    #[test]
    fn test_list_accounts_includes_holders() {
        let mut bank = bank();
        bank.process(deposit("222", 2, 40)).unwrap();

        let outcome = bank.process(Command::ListAccounts).unwrap();

        let Outcome::Accounts(summaries) = outcome else {
            panic!("Expected account listing");
        };
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].number, 1);
        assert_eq!(summaries[0].holder, "Client 111");
        assert_eq!(summaries[1].tax_id, "222");
        assert_eq!(summaries[1].balance, Decimal::new(40, 0));
    }
}
