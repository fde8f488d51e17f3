//! Commands accepted by the bank engine and the outcomes it reports
//!
//! A command is one user action from the menu or one row of a script. The
//! outcome carries whatever the shell needs to display afterwards.

use super::transaction::{AccountNumber, TaxId};
use rust_decimal::Decimal;
use std::fmt;

/// A single user action against the bank
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    RegisterClient {
        name: String,
        tax_id: TaxId,
        birth_date: String,
        address: String,
    },
    OpenAccount {
        tax_id: TaxId,
    },
    Deposit {
        tax_id: TaxId,
        account: AccountNumber,
        amount: Decimal,
    },
    Withdraw {
        tax_id: TaxId,
        account: AccountNumber,
        amount: Decimal,
    },
    Statement {
        tax_id: TaxId,
        account: AccountNumber,
    },
    ListAccounts,
}

impl Command {
    /// Short name used in log events
    pub fn name(&self) -> &'static str {
        match self {
            Command::RegisterClient { .. } => "register",
            Command::OpenAccount { .. } => "open",
            Command::Deposit { .. } => "deposit",
            Command::Withdraw { .. } => "withdraw",
            Command::Statement { .. } => "statement",
            Command::ListAccounts => "list",
        }
    }
}

/// Snapshot of one account for listings and CSV output
#[derive(Debug, Clone, PartialEq)]
pub struct AccountSummary {
    pub branch: String,
    pub number: AccountNumber,
    pub holder: String,
    pub tax_id: TaxId,
    pub balance: Decimal,
    pub withdrawals_made: u32,
}

/// Result of a successfully processed command
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    ClientRegistered {
        tax_id: TaxId,
    },
    AccountOpened {
        tax_id: TaxId,
        account: AccountNumber,
    },
    Deposited {
        account: AccountNumber,
        amount: Decimal,
        balance: Decimal,
    },
    Withdrawn {
        account: AccountNumber,
        amount: Decimal,
        balance: Decimal,
    },
    Statement {
        account: AccountNumber,
        text: String,
    },
    Accounts(Vec<AccountSummary>),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::ClientRegistered { tax_id } => {
                write!(f, "Client {} registered", tax_id)
            }
            Outcome::AccountOpened { tax_id, account } => {
                write!(f, "Account {} opened for client {}", account, tax_id)
            }
            Outcome::Deposited {
                account,
                amount,
                balance,
            } => write!(
                f,
                "Deposit of {:.2} into account {} accepted, balance {:.2}",
                amount, account, balance
            ),
            Outcome::Withdrawn {
                account,
                amount,
                balance,
            } => write!(
                f,
                "Withdrawal of {:.2} from account {} accepted, balance {:.2}",
                amount, account, balance
            ),
            Outcome::Statement { account, text } => {
                writeln!(f, "================ STATEMENT {} ================", account)?;
                writeln!(f, "{}", text)?;
                write!(f, "==============================================")
            }
            Outcome::Accounts(accounts) => {
                if accounts.is_empty() {
                    return write!(f, "No accounts opened.");
                }
                for (i, summary) in accounts.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    writeln!(f, "Branch:  {}", summary.branch)?;
                    writeln!(f, "Account: {}", summary.number)?;
                    writeln!(f, "Holder:  {}", summary.holder)?;
                    write!(f, "----------------------------")?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::registered(
        Outcome::ClientRegistered { tax_id: "111".to_string() },
        "Client 111 registered"
    )]
    #[case::opened(
        Outcome::AccountOpened { tax_id: "111".to_string(), account: 4 },
        "Account 4 opened for client 111"
    )]
    #[case::deposited(
        Outcome::Deposited { account: 1, amount: Decimal::new(1000, 0), balance: Decimal::new(1000, 0) },
        "Deposit of 1000.00 into account 1 accepted, balance 1000.00"
    )]
    #[case::withdrawn(
        Outcome::Withdrawn { account: 1, amount: Decimal::new(2005, 1), balance: Decimal::new(7995, 1) },
        "Withdrawal of 200.50 from account 1 accepted, balance 799.50"
    )]
    #[case::no_accounts(Outcome::Accounts(Vec::new()), "No accounts opened.")]
    fn test_outcome_display(#[case] outcome: Outcome, #[case] expected: &str) {
        assert_eq!(outcome.to_string(), expected);
    }

    #[test]
    fn test_accounts_listing_display() {
        let outcome = Outcome::Accounts(vec![AccountSummary {
            branch: "0001".to_string(),
            number: 1,
            holder: "Ana Souza".to_string(),
            tax_id: "111".to_string(),
            balance: Decimal::ZERO,
            withdrawals_made: 0,
        }]);

        assert_eq!(
            outcome.to_string(),
            "Branch:  0001\nAccount: 1\nHolder:  Ana Souza\n----------------------------"
        );
    }

    #[test]
    fn test_command_names() {
        assert_eq!(Command::ListAccounts.name(), "list");
        assert_eq!(
            Command::OpenAccount {
                tax_id: "1".to_string()
            }
            .name(),
            "open"
        );
    }
}
