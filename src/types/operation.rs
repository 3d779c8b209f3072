//! Operation records for replaying an account's activity
//!
//! An operation is a request to deposit or withdraw, as read from an
//! operation log. Unlike a [`Movement`](super::Movement) it has not been
//! validated yet and may still be rejected by the account.

use super::movement::MovementKind;
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// A requested deposit or withdrawal
#[derive(Debug, Clone, PartialEq)]
pub struct OperationRecord {
    /// Whether this is a deposit or a withdrawal
    pub kind: MovementKind,

    /// Calendar date to apply the operation on
    ///
    /// `None` means "today" as reported by the engine's clock.
    pub date: Option<NaiveDate>,

    /// Requested amount, not yet validated
    pub amount: Decimal,
}

impl OperationRecord {
    /// Create a deposit request
    pub fn deposit(amount: Decimal, date: Option<NaiveDate>) -> Self {
        OperationRecord {
            kind: MovementKind::Deposit,
            date,
            amount,
        }
    }

    /// Create a withdrawal request
    pub fn withdrawal(amount: Decimal, date: Option<NaiveDate>) -> Self {
        OperationRecord {
            kind: MovementKind::Withdrawal,
            date,
            amount,
        }
    }
}
