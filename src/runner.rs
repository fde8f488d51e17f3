//! Batch script runner
//!
//! Runs every command of a CSV script through a `Bank` and writes the final
//! account states as CSV.
//!
//! # Design
//!
//! The runner focuses on orchestration, delegating:
//! - CSV parsing to `SyncReader` (iterator interface)
//! - Command processing to `Bank` (business logic)
//! - CSV output to `csv_format::write_accounts_csv` (format handling)
//!
//! Rejected commands and malformed rows are logged and skipped; only failures
//! to open the script or write the output stop the run.

use crate::core::Bank;
use crate::io::csv_format::write_accounts_csv;
use crate::io::sync_reader::SyncReader;
use crate::types::LedgerError;
use std::io::Write;
use std::path::Path;

/// Counts of what happened during a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Commands the bank accepted
    pub accepted: usize,
    /// Commands an account refused (amount, funds or withdrawal limits)
    pub rejected: usize,
    /// Commands naming an unknown client or account, or a taken tax id
    pub directory_errors: usize,
    /// Rows that could not be parsed
    pub malformed: usize,
}

/// Run the script at `input_path` against `bank`, then write all accounts to `output`
///
/// # Errors
///
/// - `FileNotFound` / `IoError` if the script cannot be opened
/// - `IoError` if the output cannot be written
pub fn run_script(
    input_path: &Path,
    bank: &mut Bank,
    output: &mut dyn Write,
) -> Result<RunSummary, LedgerError> {
    let reader = SyncReader::new(input_path)?;
    let mut summary = RunSummary::default();

    for result in reader {
        match result {
            Ok(command) => match bank.process(command) {
                Ok(_) => summary.accepted += 1,
                // already logged by the engine
                Err(e) if e.is_rejection() => summary.rejected += 1,
                Err(_) => summary.directory_errors += 1,
            },
            Err(e) => {
                tracing::warn!("skipping row: {}", e);
                summary.malformed += 1;
            }
        }
    }

    write_accounts_csv(&bank.summaries(), output)
        .map_err(|message| LedgerError::IoError { message })?;

    tracing::info!(
        accepted = summary.accepted,
        rejected = summary.rejected,
        directory_errors = summary.directory_errors,
        malformed = summary.malformed,
        "script finished"
    );

    Ok(summary)
}
