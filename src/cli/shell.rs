//! Interactive menu
//!
//! Reads menu options and their prompts line by line, turns them into
//! commands for the `Bank`, and prints the outcome or the rejection reason.
//! Reaching end of input behaves like `q`.

use crate::core::{Bank, Directory};
use crate::types::{AccountNumber, Command};
use rust_decimal::Decimal;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

const MENU: &str = "
[d]  Deposit
[s]  Withdraw
[e]  Statement
[nu] New client
[nc] New account
[lc] List accounts
[q]  Quit
=> ";

/// Interactive session over a line-based input and an output
pub struct Shell<'a, R, W> {
    bank: &'a mut Bank,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(bank: &'a mut Bank, input: R, output: W) -> Self {
        Shell {
            bank,
            input,
            output,
        }
    }

    /// Run the menu loop until `q` or end of input
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            let Some(option) = self.prompt(MENU)? else {
                break;
            };

            match option.as_str() {
                "nu" => self.new_client()?,
                "nc" => self.new_account()?,
                "lc" => self.execute(Command::ListAccounts)?,
                "d" | "s" | "e" => self.account_operation(&option)?,
                "q" => break,
                _ => writeln!(self.output, "Invalid option, try again.")?,
            }
        }

        writeln!(self.output, "Goodbye.")?;
        self.output.flush()
    }

    /// Print `message` and read one trimmed line; `None` at end of input
    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn execute(&mut self, command: Command) -> io::Result<()> {
        match self.bank.process(command) {
            Ok(outcome) => writeln!(self.output, "{}", outcome),
            Err(e) => writeln!(self.output, "Error: {}", e),
        }
    }

    fn new_client(&mut self) -> io::Result<()> {
        let Some(tax_id) = self.prompt("Tax id (digits only): ")? else {
            return Ok(());
        };
        if self.bank.registry().find_client(&tax_id).is_some() {
            return writeln!(self.output, "A client with that tax id already exists.");
        }

        let Some(name) = self.prompt("Full name: ")? else {
            return Ok(());
        };
        let Some(birth_date) = self.prompt("Birth date (dd-mm-yyyy): ")? else {
            return Ok(());
        };
        let Some(address) = self.prompt("Address (street, number - district - city/state): ")? else {
            return Ok(());
        };

        self.execute(Command::RegisterClient {
            name,
            tax_id,
            birth_date,
            address,
        })
    }

    fn new_account(&mut self) -> io::Result<()> {
        let Some(tax_id) = self.prompt("Client tax id: ")? else {
            return Ok(());
        };
        self.execute(Command::OpenAccount { tax_id })
    }

    fn account_operation(&mut self, option: &str) -> io::Result<()> {
        let Some(tax_id) = self.prompt("Client tax id: ")? else {
            return Ok(());
        };
        let Some(account) = self.select_account(&tax_id)? else {
            return Ok(());
        };

        if option == "e" {
            return self.execute(Command::Statement { tax_id, account });
        }

        let label = if option == "d" {
            "Deposit amount: "
        } else {
            "Withdrawal amount: "
        };
        let Some(raw) = self.prompt(label)? else {
            return Ok(());
        };
        let Ok(amount) = Decimal::from_str(&raw) else {
            return writeln!(self.output, "Invalid amount '{}'.", raw);
        };

        let command = if option == "d" {
            Command::Deposit {
                tax_id,
                account,
                amount,
            }
        } else {
            Command::Withdraw {
                tax_id,
                account,
                amount,
            }
        };
        self.execute(command)
    }

    /// List the client's accounts and let the user pick one by index
    fn select_account(&mut self, tax_id: &str) -> io::Result<Option<AccountNumber>> {
        let Some(client) = self.bank.registry().find_client(tax_id) else {
            writeln!(self.output, "Client not found.")?;
            return Ok(None);
        };
        if client.accounts().is_empty() {
            writeln!(self.output, "Client has no accounts.")?;
            return Ok(None);
        }

        let choices: Vec<(AccountNumber, Decimal)> = client
            .accounts()
            .iter()
            .map(|account| (account.number(), account.balance()))
            .collect();

        writeln!(self.output, "Available accounts:")?;
        for (i, (number, balance)) in choices.iter().enumerate() {
            writeln!(self.output, "[{}] Account {} - Balance: {:.2}", i, number, balance)?;
        }

        let Some(raw) = self.prompt("Choose an account: ")? else {
            return Ok(None);
        };
        match raw.parse::<usize>().ok().and_then(|i| choices.get(i)) {
            Some((number, _)) => Ok(Some(*number)),
            None => {
                writeln!(self.output, "Invalid index.")?;
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AccountConfig, NO_MOVEMENTS};

    fn run_session(bank: &mut Bank, input: &str) -> String {
        let mut output = Vec::new();
        Shell::new(bank, input.as_bytes(), &mut output).run().unwrap();
        String::from_utf8(output).unwrap()
    }

    const REGISTER_AND_OPEN: &str = "nu\n111\nAna Souza\n01-01-1980\nRua A, 123\nnc\n111\n";

    #[test]
    fn test_register_open_deposit_withdraw() {
        let mut bank = Bank::new(AccountConfig::default());
        let input = format!("{}d\n111\n0\n1000\ns\n111\n0\n200\nq\n", REGISTER_AND_OPEN);

        let output = run_session(&mut bank, &input);

        assert!(output.contains("Client 111 registered"));
        assert!(output.contains("Account 1 opened for client 111"));
        assert!(output.contains("[0] Account 1 - Balance: 1000.00"));
        assert!(output.contains("balance 800.00"));
        assert!(output.ends_with("Goodbye.\n"));
        assert_eq!(bank.summaries()[0].balance, Decimal::new(800, 0));
    }

    #[test]
    fn test_rejection_is_reported() {
        let mut bank = Bank::default();
        let input = format!("{}s\n111\n0\n50\nq\n", REGISTER_AND_OPEN);

        let output = run_session(&mut bank, &input);

        assert!(output.contains("Error: Insufficient funds in account 1"));
    }

    #[test]
    fn test_duplicate_client_stops_before_details() {
        let mut bank = Bank::default();
        let input = "nu\n111\nAna\n01-01-1980\nRua A\nnu\n111\nq\n";

        let output = run_session(&mut bank, input);

        assert!(output.contains("A client with that tax id already exists."));
        assert_eq!(bank.registry().client_count(), 1);
    }

    #[test]
    fn test_statement_of_new_account() {
        let mut bank = Bank::default();
        let input = format!("{}e\n111\n0\n", REGISTER_AND_OPEN);

        let output = run_session(&mut bank, &input);

        assert!(output.contains(NO_MOVEMENTS));
        assert!(output.contains("Balance: 0.00"));
    }

    #[test]
    fn test_unknown_client_and_bad_inputs() {
        let mut bank = Bank::default();
        let input = format!(
            "d\n999\nxyz\n{}d\n111\n7\nd\n111\n0\nten\nq\n",
            REGISTER_AND_OPEN
        );

        let output = run_session(&mut bank, &input);

        assert!(output.contains("Client not found."));
        assert!(output.contains("Invalid option, try again."));
        assert!(output.contains("Invalid index."));
        assert!(output.contains("Invalid amount 'ten'."));
    }

    #[test]
    fn test_client_without_accounts() {
        let mut bank = Bank::default();
        let output = run_session(&mut bank, "nu\n111\nAna\n01-01-1980\nRua A\nd\n111\nq\n");
        assert!(output.contains("Client has no accounts."));
    }

    #[test]
    fn test_list_accounts() {
        let mut bank = Bank::default();
        let input = format!("lc\n{}lc\nq\n", REGISTER_AND_OPEN);

        let output = run_session(&mut bank, &input);

        assert!(output.contains("No accounts opened."));
        assert!(output.contains("Holder:  Ana Souza"));
    }

    #[test]
    fn test_end_of_input_quits() {
        let mut bank = Bank::default();
        let output = run_session(&mut bank, "");
        assert!(output.ends_with("Goodbye.\n"));
    }
}
