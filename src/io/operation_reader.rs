//! Streaming CSV reader for operation logs
//!
//! Provides an iterator over operation records from a CSV file with columns
//! `type,date,amount`. Delegates CSV format concerns to the csv_format module.
//!
//! ```no_run
//! use rust_wallet_engine::io::OperationReader;
//! use std::path::Path;
//!
//! let reader = OperationReader::new(Path::new("operations.csv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(operation) => println!("Applying operation: {:?}", operation),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, I/O errors) are returned from `new()`
//! - Individual row errors are yielded as `Err` items carrying the line number
//! - Records are read one at a time; the file is never loaded whole

use crate::io::csv_format::{convert_csv_record, CsvRecord};
use crate::types::{OperationRecord, WalletError};
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

/// Iterator over the operations of a CSV operation log
#[derive(Debug)]
pub struct OperationReader {
    reader: csv::Reader<File>,
    line_num: u64,
}

impl OperationReader {
    /// Open an operation log
    ///
    /// The CSV reader is configured to trim whitespace from all fields and to
    /// accept rows with missing trailing fields (date and amount are optional
    /// at the CSV level).
    ///
    /// # Errors
    ///
    /// Returns `FileNotFound` if `path` does not exist and `IoError` for any
    /// other failure to open it.
    pub fn new(path: &Path) -> Result<Self, WalletError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => WalletError::file_not_found(&path.display().to_string()),
            _ => WalletError::IoError {
                message: format!("Failed to open file '{}': {}", path.display(), e),
            },
        })?;

        let reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .buffer_capacity(8 * 1024)
            .from_reader(file);

        Ok(Self {
            reader,
            line_num: 1,
        })
    }
}

impl Iterator for OperationReader {
    type Item = Result<OperationRecord, WalletError>;

    /// Read and convert the next row
    ///
    /// Line numbers count the header as line 1.
    fn next(&mut self) -> Option<Self::Item> {
        let mut deserializer = self.reader.deserialize::<CsvRecord>();
        let result = deserializer.next()?;
        self.line_num += 1;

        Some(match result {
            Ok(csv_record) => convert_csv_record(csv_record)
                .map_err(|e| WalletError::invalid_record(self.line_num, e)),
            Err(e) => Err(WalletError::ParseError {
                line: Some(self.line_num),
                message: e.to_string(),
            }),
        })
    }
}
