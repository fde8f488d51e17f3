//! Bank Ledger CLI
//!
//! Command-line interface for keeping clients, accounts and their history.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- shell
//! cargo run -- run script.csv > accounts.csv
//! cargo run -- --withdrawal-limit 1000 --max-withdrawals 5 --withdrawal-window daily shell
//! ```
//!
//! `shell` starts the interactive menu. `run` executes a CSV command script and
//! prints the final account states to stdout.
//!
//! Log output goes to stderr and is controlled with `RUST_LOG` (default `warn`).
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (script not found, file not readable, output not writable)

use rust_bank_ledger::cli::{self, Mode, Shell};
use rust_bank_ledger::core::Bank;
use rust_bank_ledger::runner::run_script;
use std::io;
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = cli::parse_args();
    let mut bank = Bank::new(args.to_account_config());

    let result = match &args.mode {
        Mode::Run { input_file } => {
            let mut output = io::stdout();
            run_script(input_file, &mut bank, &mut output)
                .map(|_| ())
                .map_err(|e| e.to_string())
        }
        Mode::Shell => {
            let stdin = io::stdin();
            Shell::new(&mut bank, stdin.lock(), io::stdout())
                .run()
                .map_err(|e| e.to_string())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
