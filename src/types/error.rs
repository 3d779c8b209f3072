//! Error types for the Rust Wallet Engine
//!
//! This module defines every error a wallet operation or an operation-log
//! replay can produce.
//!
//! # Error Categories
//!
//! - **Business Rule Errors**: non-positive amount, daily deposit count
//!   exceeded, insufficient balance, daily withdrawal ceiling exceeded
//! - **Arithmetic Errors**: overflow in balance calculations
//! - **File I/O Errors**: file not found, permission denied, etc.
//! - **CSV Parsing Errors**: malformed rows, unknown operation types, bad
//!   amounts or dates

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the wallet engine
///
/// Every business rule violation has its own variant so callers can tell
/// them apart without inspecting message text. None of them are retryable:
/// the account is left untouched and the caller decides what to do.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WalletError {
    /// Amount supplied to a deposit or withdrawal was zero or negative
    #[error("Amount must be positive, got {amount}")]
    NegativeAmount {
        /// The rejected amount
        amount: Decimal,
    },

    /// The account already holds the maximum number of deposits for the date
    #[error("Daily deposit limit of {limit} reached for {date}")]
    DepositLimitExceeded {
        /// Date the deposit was attempted on
        date: NaiveDate,
        /// Configured maximum deposits per date
        limit: usize,
    },

    /// Withdrawal amount exceeds the current balance
    #[error("Insufficient balance: balance {balance}, requested {requested}")]
    InsufficientBalance {
        /// Balance at the time of the attempt
        balance: Decimal,
        /// Requested withdrawal amount
        requested: Decimal,
    },

    /// Withdrawal amount exceeds what is left of the daily withdrawal ceiling
    #[error("Daily withdrawal limit of {limit} exceeded for {date}: remaining {remaining}, requested {requested}")]
    DailyWithdrawalLimitExceeded {
        /// Date the withdrawal was attempted on
        date: NaiveDate,
        /// Configured maximum withdrawal amount per date
        limit: Decimal,
        /// Amount still withdrawable on that date
        remaining: Decimal,
        /// Requested withdrawal amount
        requested: Decimal,
    },

    /// Arithmetic overflow would occur
    ///
    /// The operation is rejected to keep the balance consistent.
    #[error("Arithmetic overflow in {operation}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
    },

    /// File not found at the specified path
    ///
    /// This is a fatal error that prevents a replay from starting.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing files
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// CSV parsing error occurred
    ///
    /// The malformed row is skipped and the replay continues.
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// Unknown operation type in the operation log
    #[error("Invalid operation type '{op_type}'")]
    InvalidOperationType {
        /// The unrecognized type string
        op_type: String,
    },

    /// Amount column could not be parsed as a decimal
    #[error("Invalid amount '{amount}'")]
    InvalidAmount {
        /// The raw amount string
        amount: String,
    },

    /// Date column could not be parsed as `YYYY-MM-DD`
    #[error("Invalid date '{date}'")]
    InvalidDate {
        /// The raw date string
        date: String,
    },

    /// Amount column is missing for a deposit or withdrawal
    #[error("{op_type} operation requires an amount")]
    MissingAmount {
        /// Operation type that requires an amount
        op_type: String,
    },

    /// A row of the operation log could not be turned into an operation
    #[error("Line {line}: {source}")]
    InvalidRecord {
        /// Line number of the offending row (header is line 1)
        line: u64,
        /// Underlying conversion error
        #[source]
        source: Box<WalletError>,
    },
}

// Conversion from io::Error to WalletError
impl From<std::io::Error> for WalletError {
    fn from(error: std::io::Error) -> Self {
        WalletError::IoError {
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to WalletError
impl From<csv::Error> for WalletError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        WalletError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl WalletError {
    /// Create a NegativeAmount error
    pub fn negative_amount(amount: Decimal) -> Self {
        WalletError::NegativeAmount { amount }
    }

    /// Create a DepositLimitExceeded error
    pub fn deposit_limit_exceeded(date: NaiveDate, limit: usize) -> Self {
        WalletError::DepositLimitExceeded { date, limit }
    }

    /// Create an InsufficientBalance error
    pub fn insufficient_balance(balance: Decimal, requested: Decimal) -> Self {
        WalletError::InsufficientBalance { balance, requested }
    }

    /// Create a DailyWithdrawalLimitExceeded error
    pub fn daily_withdrawal_limit_exceeded(
        date: NaiveDate,
        limit: Decimal,
        remaining: Decimal,
        requested: Decimal,
    ) -> Self {
        WalletError::DailyWithdrawalLimitExceeded {
            date,
            limit,
            remaining,
            requested,
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str) -> Self {
        WalletError::ArithmeticOverflow {
            operation: operation.to_string(),
        }
    }

    /// Create a FileNotFound error
    pub fn file_not_found(path: &str) -> Self {
        WalletError::FileNotFound {
            path: path.to_string(),
        }
    }

    /// Create an InvalidOperationType error
    pub fn invalid_operation_type(op_type: &str) -> Self {
        WalletError::InvalidOperationType {
            op_type: op_type.to_string(),
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: &str) -> Self {
        WalletError::InvalidAmount {
            amount: amount.to_string(),
        }
    }

    /// Create an InvalidDate error
    pub fn invalid_date(date: &str) -> Self {
        WalletError::InvalidDate {
            date: date.to_string(),
        }
    }

    /// Create a MissingAmount error
    pub fn missing_amount(op_type: &str) -> Self {
        WalletError::MissingAmount {
            op_type: op_type.to_string(),
        }
    }

    /// Wrap a conversion error with the line it came from
    pub fn invalid_record(line: u64, source: WalletError) -> Self {
        WalletError::InvalidRecord {
            line,
            source: Box::new(source),
        }
    }

    /// Whether this error is a business rule violation raised by an account
    pub fn is_rule_violation(&self) -> bool {
        matches!(
            self,
            WalletError::NegativeAmount { .. }
                | WalletError::DepositLimitExceeded { .. }
                | WalletError::InsufficientBalance { .. }
                | WalletError::DailyWithdrawalLimitExceeded { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    #[rstest]
    #[case::negative_amount(
        WalletError::NegativeAmount { amount: Decimal::new(-500, 0) },
        "Amount must be positive, got -500"
    )]
    #[case::deposit_limit_exceeded(
        WalletError::DepositLimitExceeded { date: date(), limit: 3 },
        "Daily deposit limit of 3 reached for 2024-03-01"
    )]
    #[case::insufficient_balance(
        WalletError::InsufficientBalance { balance: Decimal::new(90, 0), requested: Decimal::new(1001, 0) },
        "Insufficient balance: balance 90, requested 1001"
    )]
    #[case::daily_withdrawal_limit_exceeded(
        WalletError::DailyWithdrawalLimitExceeded {
            date: date(),
            limit: Decimal::new(1000, 0),
            remaining: Decimal::new(1000, 0),
            requested: Decimal::new(1001, 0),
        },
        "Daily withdrawal limit of 1000 exceeded for 2024-03-01: remaining 1000, requested 1001"
    )]
    #[case::arithmetic_overflow(
        WalletError::ArithmeticOverflow { operation: "deposit".to_string() },
        "Arithmetic overflow in deposit"
    )]
    #[case::file_not_found(
        WalletError::FileNotFound { path: "ops.csv".to_string() },
        "File not found: ops.csv"
    )]
    #[case::parse_error_with_line(
        WalletError::ParseError { line: Some(42), message: "Invalid field".to_string() },
        "CSV parse error at line 42: Invalid field"
    )]
    #[case::parse_error_without_line(
        WalletError::ParseError { line: None, message: "Invalid field".to_string() },
        "CSV parse error: Invalid field"
    )]
    #[case::missing_amount(
        WalletError::MissingAmount { op_type: "deposit".to_string() },
        "deposit operation requires an amount"
    )]
    #[case::invalid_record(
        WalletError::invalid_record(7, WalletError::invalid_date("03/01/2024")),
        "Line 7: Invalid date '03/01/2024'"
    )]
    fn test_error_display(#[case] error: WalletError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::negative_amount(
        WalletError::negative_amount(Decimal::new(-1, 0)),
        WalletError::NegativeAmount { amount: Decimal::new(-1, 0) }
    )]
    #[case::deposit_limit_exceeded(
        WalletError::deposit_limit_exceeded(date(), 3),
        WalletError::DepositLimitExceeded { date: date(), limit: 3 }
    )]
    #[case::insufficient_balance(
        WalletError::insufficient_balance(Decimal::new(90, 0), Decimal::new(1001, 0)),
        WalletError::InsufficientBalance { balance: Decimal::new(90, 0), requested: Decimal::new(1001, 0) }
    )]
    #[case::invalid_operation_type(
        WalletError::invalid_operation_type("transfer"),
        WalletError::InvalidOperationType { op_type: "transfer".to_string() }
    )]
    fn test_helper_functions(#[case] result: WalletError, #[case] expected: WalletError) {
        assert_eq!(result, expected);
    }

    #[rstest]
    #[case(WalletError::negative_amount(Decimal::ZERO), true)]
    #[case(WalletError::deposit_limit_exceeded(date(), 3), true)]
    #[case(WalletError::insufficient_balance(Decimal::ZERO, Decimal::ONE), true)]
    #[case(WalletError::daily_withdrawal_limit_exceeded(date(), Decimal::ONE, Decimal::ZERO, Decimal::ONE), true)]
    #[case(WalletError::arithmetic_overflow("deposit"), false)]
    #[case(WalletError::missing_amount("deposit"), false)]
    fn test_is_rule_violation(#[case] error: WalletError, #[case] expected: bool) {
        assert_eq!(error.is_rule_violation(), expected);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
        let error: WalletError = io_error.into();
        assert!(matches!(error, WalletError::IoError { .. }));
        assert_eq!(error.to_string(), "I/O error: Permission denied");
    }
}
