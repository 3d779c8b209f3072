//! I/O module
//!
//! Handles CSV parsing and output.
//!
//! # Components
//!
//! - `csv_format` - CSV format handling (record conversion, report serialization)
//! - `operation_reader` - Streaming reader over an operation log

pub mod csv_format;
pub mod operation_reader;

pub use csv_format::{
    convert_csv_record, format_amount, write_balance_csv, write_movements_csv, CsvRecord,
};
pub use operation_reader::OperationReader;
