//! Wallet engine
//!
//! This module provides the `WalletEngine` that couples an [`Account`] with a
//! [`Clock`]. It is the entry point for callers that do not carry a date
//! around: operations without an explicit date are recorded on the clock's
//! current day.

use crate::core::account::Account;
use crate::core::traits::{Clock, SystemClock};
use crate::types::{MovementKind, OperationRecord, WalletError};
use rust_decimal::Decimal;

/// Processes deposits and withdrawals against one account
pub struct WalletEngine<C: Clock = SystemClock> {
    account: Account,
    clock: C,
}

impl WalletEngine<SystemClock> {
    /// Create an engine around `account` that reads the system clock
    pub fn new(account: Account) -> Self {
        Self::with_clock(account, SystemClock)
    }
}

impl<C: Clock> WalletEngine<C> {
    /// Create an engine around `account` using `clock` for "today"
    pub fn with_clock(account: Account, clock: C) -> Self {
        WalletEngine { account, clock }
    }

    /// Deposit `amount` on the clock's current date
    pub fn deposit(&mut self, amount: Decimal) -> Result<(), WalletError> {
        let today = self.clock.today();
        self.account.deposit(amount, today)
    }

    /// Withdraw `amount` on the clock's current date
    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), WalletError> {
        let today = self.clock.today();
        self.account.withdraw(amount, today)
    }

    /// Process a single operation record
    ///
    /// Routes the record to a deposit or withdrawal. Records without a date
    /// are applied on the clock's current date.
    ///
    /// # Errors
    ///
    /// Returns whatever business rule error the account raises; the account
    /// is unchanged in that case.
    pub fn process(&mut self, record: OperationRecord) -> Result<(), WalletError> {
        let date = record.date.unwrap_or_else(|| self.clock.today());

        match record.kind {
            MovementKind::Deposit => self.account.deposit(record.amount, date),
            MovementKind::Withdrawal => self.account.withdraw(record.amount, date),
        }
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    pub fn into_account(self) -> Account {
        self.account
    }
}
