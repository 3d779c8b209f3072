//! CSV format handling for operation logs and account reports
//!
//! This module centralizes all CSV format concerns, providing:
//! - CsvRecord structure for deserialization
//! - Conversion from CSV records to operation records
//! - Movement and balance report serialization
//!
//! All functions are pure (no file I/O) for easy testing.

use crate::core::Account;
use crate::types::{Movement, MovementKind, OperationRecord, WalletError};
use chrono::NaiveDate;
use csv::Writer;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Write;
use std::str::FromStr;

/// Date format used in operation logs and movement reports
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// CSV record structure for deserialization
///
/// Matches the input CSV format with columns: type, date, amount.
/// The date is optional; rows without one are applied on "today".
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CsvRecord {
    #[serde(rename = "type")]
    pub op_type: String,
    pub date: Option<String>,
    pub amount: Option<String>,
}

/// Convert a CsvRecord to an OperationRecord
///
/// This function:
/// - Parses the type string (case insensitive) into a MovementKind
/// - Parses the date string as `YYYY-MM-DD` (if present)
/// - Parses the amount string into a Decimal (required)
///
/// The sign of the amount is not checked here; the account rejects
/// non-positive amounts with its own error.
pub fn convert_csv_record(csv_record: CsvRecord) -> Result<OperationRecord, WalletError> {
    let kind = match csv_record.op_type.to_lowercase().as_str() {
        "deposit" => MovementKind::Deposit,
        "withdrawal" => MovementKind::Withdrawal,
        _ => return Err(WalletError::invalid_operation_type(&csv_record.op_type)),
    };

    let date = match non_empty(csv_record.date.as_deref()) {
        Some(date_str) => Some(
            NaiveDate::parse_from_str(date_str, DATE_FORMAT)
                .map_err(|_| WalletError::invalid_date(date_str))?,
        ),
        None => None,
    };

    let amount = match non_empty(csv_record.amount.as_deref()) {
        Some(amount_str) => {
            Decimal::from_str(amount_str).map_err(|_| WalletError::invalid_amount(amount_str))?
        }
        None => return Err(WalletError::missing_amount(kind.as_str())),
    };

    Ok(OperationRecord { kind, date, amount })
}

fn non_empty(field: Option<&str>) -> Option<&str> {
    field.map(str::trim).filter(|value| !value.is_empty())
}

/// Render an amount without losing precision
///
/// Amounts are padded to at least two decimals but never rounded, so a
/// report can be replayed to the same state.
pub fn format_amount(amount: Decimal) -> String {
    let mut amount = amount;
    if amount.scale() < 2 {
        amount.rescale(2);
    }
    amount.to_string()
}

/// Write the movement history in CSV format
///
/// Columns: date, type, amount. Movements are written in recording order.
pub fn write_movements_csv(
    movements: &[Movement],
    output: &mut dyn Write,
) -> Result<(), WalletError> {
    let mut writer = Writer::from_writer(output);

    writer.write_record(["date", "type", "amount"])?;

    for movement in movements {
        writer.write_record(&[
            movement.date().format(DATE_FORMAT).to_string(),
            movement.kind().to_string(),
            format_amount(movement.amount()),
        ])?;
    }

    writer.flush()?;

    Ok(())
}

/// Write a one-line balance summary in CSV format
///
/// Columns: balance, deposits, withdrawals (movement counts).
pub fn write_balance_csv(account: &Account, output: &mut dyn Write) -> Result<(), WalletError> {
    let mut writer = Writer::from_writer(output);

    let deposits = account.movements().iter().filter(|m| m.is_deposit()).count();
    let withdrawals = account.movements().len() - deposits;

    writer.write_record(["balance", "deposits", "withdrawals"])?;
    writer.write_record(&[
        format_amount(account.balance()),
        deposits.to_string(),
        withdrawals.to_string(),
    ])?;

    writer.flush()?;

    Ok(())
}
