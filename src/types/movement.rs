//! Movement-related types for the Rust Wallet Engine
//!
//! A movement is the immutable record left behind by a successful deposit
//! or withdrawal. Movements never validate themselves: the owning
//! [`Account`](crate::core::Account) checks every rule before creating one.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Kinds of movement recorded in an account history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementKind {
    /// Credit funds to the account
    ///
    /// Counts towards the daily deposit limit.
    Deposit,

    /// Debit funds from the account
    ///
    /// Counts towards the daily withdrawal limit.
    Withdrawal,
}

impl MovementKind {
    /// Lowercase name used in CSV input and output
    pub fn as_str(&self) -> &'static str {
        match self {
            MovementKind::Deposit => "deposit",
            MovementKind::Withdrawal => "withdrawal",
        }
    }
}

impl std::fmt::Display for MovementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single completed deposit or withdrawal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Movement {
    date: NaiveDate,
    amount: Decimal,
    kind: MovementKind,
}

impl Movement {
    /// Create a new movement
    ///
    /// No validation happens here; callers are expected to have checked
    /// that `amount` is strictly positive.
    pub fn new(date: NaiveDate, amount: Decimal, kind: MovementKind) -> Self {
        Movement { date, amount, kind }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn kind(&self) -> MovementKind {
        self.kind
    }

    pub fn is_deposit(&self) -> bool {
        self.kind == MovementKind::Deposit
    }

    pub fn is_withdrawal(&self) -> bool {
        self.kind == MovementKind::Withdrawal
    }

    /// Whether this movement happened on the given calendar date
    pub fn is_on_date(&self, date: NaiveDate) -> bool {
        self.date == date
    }

    /// Whether this movement is a deposit made on `date`
    pub fn was_deposited_on(&self, date: NaiveDate) -> bool {
        self.is_deposit() && self.is_on_date(date)
    }

    /// Whether this movement is a withdrawal made on `date`
    pub fn was_withdrawn_on(&self, date: NaiveDate) -> bool {
        self.is_withdrawal() && self.is_on_date(date)
    }
}
