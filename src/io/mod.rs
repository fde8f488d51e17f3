//! I/O module
//!
//! Handles CSV script parsing and account output.
//!
//! # Components
//!
//! - `csv_format` - CSV format handling (row conversion, output serialization)
//! - `sync_reader` - Synchronous CSV reader with iterator interface

pub mod csv_format;
pub mod sync_reader;

pub use csv_format::{convert_csv_command, write_accounts_csv, CsvCommand};
pub use sync_reader::SyncReader;
