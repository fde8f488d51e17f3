//! Synchronous CSV reader with iterator interface
//!
//! Provides a streaming iterator over commands from a CSV script file.
//! Delegates CSV format concerns to the csv_format module.
//!
//! # Iterator Interface
//!
//! SyncReader implements the Iterator trait, yielding `Result<Command, LedgerError>`
//! for each CSV row:
//!
//! ```no_run
//! use rust_bank_ledger::io::sync_reader::SyncReader;
//! use std::path::Path;
//!
//! let reader = SyncReader::new(Path::new("script.csv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(command) => println!("Command: {:?}", command),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, I/O errors) are returned from `new()`
//! - Individual row errors are yielded as `ParseError` with the line number

use crate::io::csv_format::{convert_csv_command, CsvCommand};
use crate::types::{Command, LedgerError};
use csv::{ReaderBuilder, StringRecord, Terminator};
use std::fs::File;
use std::io::{Chain, ErrorKind, Read};
use std::path::Path;

/// Appended to every source so the last row is newline-terminated like the rest
const FINAL_NEWLINE: &[u8] = b"\n";

/// Synchronous CSV reader
///
/// Reads one script row at a time without loading the whole file.
#[derive(Debug)]
pub struct SyncReader<R: Read = File> {
    reader: csv::Reader<Chain<R, &'static [u8]>>,
    /// Trimmed header row, read before the first record
    headers: Option<StringRecord>,
    record: StringRecord,
}

impl SyncReader<File> {
    /// Create a new SyncReader from a file path
    ///
    /// # Errors
    ///
    /// - `FileNotFound` if nothing exists at `path`
    /// - `IoError` if the file exists but cannot be opened
    pub fn new(path: &Path) -> Result<Self, LedgerError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => LedgerError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => LedgerError::IoError {
                message: format!("Failed to open file '{}': {}", path.display(), e),
            },
        })?;

        Ok(Self::from_reader(file))
    }
}

impl<R: Read> SyncReader<R> {
    /// Create a SyncReader over any byte source
    ///
    /// The CSV reader is configured to:
    /// - End records on `\n` only, so a trailing `\r` is trimmed with the field
    /// - Allow flexible field counts (trailing optional columns)
    ///
    /// Blank lines are skipped. Fields are trimmed after the record's line
    /// is known.
    pub fn from_reader(source: R) -> Self {
        let reader = ReaderBuilder::new()
            .terminator(Terminator::Any(b'\n'))
            .flexible(true)
            .buffer_capacity(8 * 1024)
            .from_reader(source.chain(FINAL_NEWLINE));

        Self {
            reader,
            headers: None,
            record: StringRecord::new(),
        }
    }

    fn read_headers(&mut self) -> Result<(), LedgerError> {
        if self.headers.is_some() {
            return Ok(());
        }

        let headers = self.reader.headers().map(|headers| {
            let mut headers = headers.clone();
            headers.trim();
            headers
        });

        match headers {
            Ok(headers) => {
                self.headers = Some(headers);
                Ok(())
            }
            Err(e) => {
                // rows are still read, each one then fails on the missing columns
                self.headers = Some(StringRecord::new());
                Err(e.into())
            }
        }
    }

    /// Whitespace-only lines, including the `\r` left by CRLF blank lines
    fn is_blank(&self) -> bool {
        self.record.len() == 1 && self.record[0].trim().is_empty()
    }

    /// Line on which the record just read starts
    ///
    /// Every record ends with a newline, so the reader sits one line past the
    /// record's last line. Newlines inside quoted fields are walked back.
    fn record_line(&self) -> u64 {
        let embedded: u64 = self
            .record
            .iter()
            .map(|field| field.matches('\n').count() as u64)
            .sum();

        self.reader
            .position()
            .line()
            .saturating_sub(1 + embedded)
            .max(1)
    }
}

fn row_error(line: u64, error: csv::Error) -> LedgerError {
    let message = match error.kind() {
        csv::ErrorKind::Deserialize { err, .. } => err.to_string(),
        _ => error.to_string(),
    };

    LedgerError::ParseError {
        line: Some(line),
        message,
    }
}

impl<R: Read> Iterator for SyncReader<R> {
    type Item = Result<Command, LedgerError>;

    /// Get the next command from the script
    ///
    /// # Returns
    ///
    /// * `Some(Ok(Command))` - Successfully parsed row
    /// * `Some(Err(LedgerError::ParseError))` - Parse or conversion error with
    ///   the line the row starts on
    /// * `None` - End of file reached
    fn next(&mut self) -> Option<Self::Item> {
        if let Err(e) = self.read_headers() {
            return Some(Err(e));
        }

        loop {
            match self.reader.read_record(&mut self.record) {
                Ok(false) => return None,
                Ok(true) if self.is_blank() => continue,
                Ok(true) => break,
                Err(e) => return Some(Err(e.into())),
            }
        }

        let line = self.record_line();
        self.record.trim();

        Some(
            self.record
                .deserialize::<CsvCommand>(self.headers.as_ref())
                .map_err(|e| row_error(line, e))
                .and_then(|row| {
                    convert_csv_command(row)
                        .map_err(|message| LedgerError::ParseError {
                            line: Some(line),
                            message,
                        })
                }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::csv_format::SCRIPT_HEADER;
    use rstest::rstest;
    use rust_decimal::Decimal;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    #[test]
    fn test_reads_commands_in_order() {
        let file = create_temp_csv(
            "command,tax_id,account,amount,name,birth_date,address\n\
             register,111,,,Ana Souza,01-01-1980,\"Rua A, 123\"\n\
             open,111,,,,,\n\
             deposit,111,1,100.00,,,\n",
        );

        let commands: Vec<Command> = SyncReader::new(file.path())
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(commands.len(), 3);
        assert!(matches!(
            &commands[0],
            Command::RegisterClient { address, .. } if address == "Rua A, 123"
        ));
        assert_eq!(
            commands[2],
            Command::Deposit {
                tax_id: "111".to_string(),
                account: 1,
                amount: Decimal::new(10000, 2),
            }
        );
    }

    #[test]
    fn test_short_rows_are_accepted() {
        let reader = SyncReader::from_reader("command,tax_id,account,amount\nlist\nopen,111\n".as_bytes());

        let commands: Vec<Command> = reader.collect::<Result<_, _>>().unwrap();

        assert_eq!(commands[0], Command::ListAccounts);
        assert_eq!(
            commands[1],
            Command::OpenAccount {
                tax_id: "111".to_string()
            }
        );
    }

    #[test]
    fn test_bad_row_reports_line_and_continues() {
        let source = "command,tax_id,account,amount\n\
                      deposit,111,1,abc\n\
                      deposit,111,x,5\n\
                      list,,,\n";
        let results: Vec<_> = SyncReader::from_reader(source.as_bytes()).collect();

        assert_eq!(results.len(), 3);
        assert!(matches!(
            &results[0],
            Err(LedgerError::ParseError { line: Some(2), message }) if message.contains("Invalid amount")
        ));
        assert!(matches!(
            &results[1],
            Err(LedgerError::ParseError { line: Some(3), .. })
        ));
        assert_eq!(results[2], Ok(Command::ListAccounts));
    }

    #[rstest]
    #[case::blank_line(
        "command,tax_id,account,amount\n\
         list,,,\n\
         \n\
         deposit,111,1,abc"
    )]
    #[case::multiline_address(
        "command,tax_id,account,amount,name,birth_date,address\n\
         register,111,,,Ana Souza,01-01-1980,\"Rua A\nCentro\"\n\
         deposit,111,1,abc\n"
    )]
    #[case::crlf_endings(
        "command,tax_id,account,amount\r\n\
         list,,,\r\n\
         \r\n\
         deposit,111,1,abc\r\n"
    )]
    fn test_bad_row_line_counts_physical_lines(#[case] source: &str) {
        let results: Vec<_> = SyncReader::from_reader(source.as_bytes()).collect();

        assert_eq!(results.len(), 2);
        assert!(results[0].is_ok());
        assert_eq!(
            results[1],
            Err(LedgerError::ParseError {
                line: Some(4),
                message: "Invalid amount 'abc'".to_string(),
            })
        );
    }

    #[test]
    fn test_multiline_field_keeps_its_newline() {
        let source = "command,tax_id,account,amount,name,birth_date,address\n\
                      register,111,,,Ana Souza,01-01-1980,\" Rua A\nCentro \"\n";

        let commands: Vec<Command> = SyncReader::from_reader(source.as_bytes())
            .collect::<Result<_, _>>()
            .unwrap();

        assert!(matches!(
            &commands[0],
            Command::RegisterClient { address, .. } if address == "Rua A\nCentro"
        ));
    }

    #[test]
    fn test_script_header_is_understood() {
        let source = format!("{}\nlist\n", SCRIPT_HEADER);

        let commands: Vec<Command> = SyncReader::from_reader(source.as_bytes())
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(commands, vec![Command::ListAccounts]);
    }

    #[test]
    fn test_missing_file() {
        let result = SyncReader::new(Path::new("nonexistent_script.csv"));
        assert!(matches!(result, Err(LedgerError::FileNotFound { .. })));
    }
}
