//! Account state and business rules
//!
//! This module provides the `Account` struct which owns the balance and the
//! movement history of a single wallet and enforces its business rules:
//! - Amounts must be strictly positive
//! - At most `daily_deposit_limit` deposits per calendar date
//! - At most `daily_withdrawal_limit` withdrawn per calendar date
//!
//! Every operation validates in full before touching any state, so a failed
//! deposit or withdrawal leaves the account exactly as it was.

use crate::types::{AccountLimits, Movement, MovementKind, WalletError};
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// A single wallet account
///
/// Holds the current balance and the append-only list of movements that
/// produced it. The only way to change an account outside of tests is
/// through [`Account::deposit`] and [`Account::withdraw`].
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    balance: Decimal,
    pub(crate) movements: Vec<Movement>,
    limits: AccountLimits,
}

impl Account {
    /// Create a new account with a zero balance and default limits
    pub fn new() -> Self {
        Self::with_initial_balance(Decimal::ZERO)
    }

    /// Create a new account starting from `initial_balance`
    ///
    /// The initial balance is not a movement and therefore does not count
    /// towards any daily limit.
    pub fn with_initial_balance(initial_balance: Decimal) -> Self {
        Account {
            balance: initial_balance,
            movements: Vec::new(),
            limits: AccountLimits::default(),
        }
    }

    /// Create a new zero-balance account with custom limits
    pub fn with_limits(limits: AccountLimits) -> Self {
        Self::new().limits(limits)
    }

    /// Replace the daily limits of this account
    pub fn limits(mut self, limits: AccountLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Movements in the order they were recorded
    pub fn movements(&self) -> &[Movement] {
        &self.movements
    }

    pub fn account_limits(&self) -> &AccountLimits {
        &self.limits
    }

    /// Deposit funds into the account
    ///
    /// # Arguments
    ///
    /// * `amount` - The amount to deposit (must be strictly positive)
    /// * `today` - The calendar date the deposit happens on
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `amount` is zero or negative (`NegativeAmount`)
    /// - the daily deposit count for `today` is already reached
    ///   (`DepositLimitExceeded`)
    /// - adding the amount to the balance would overflow
    pub fn deposit(&mut self, amount: Decimal, today: NaiveDate) -> Result<(), WalletError> {
        Self::ensure_positive(amount)?;

        if self.daily_deposit_count(today) >= self.limits.daily_deposit_limit {
            return Err(WalletError::deposit_limit_exceeded(
                today,
                self.limits.daily_deposit_limit,
            ));
        }

        let new_balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| WalletError::arithmetic_overflow("deposit"))?;

        self.record(Movement::new(today, amount, MovementKind::Deposit), new_balance);

        Ok(())
    }

    /// Withdraw funds from the account
    ///
    /// Checks run in a fixed order and stop at the first failure: amount sign,
    /// then balance, then the daily withdrawal ceiling. A request that is both
    /// above the balance and above the daily ceiling therefore reports
    /// `InsufficientBalance`.
    ///
    /// # Arguments
    ///
    /// * `amount` - The amount to withdraw (must be strictly positive)
    /// * `today` - The calendar date the withdrawal happens on
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `amount` is zero or negative (`NegativeAmount`)
    /// - `amount` exceeds the current balance (`InsufficientBalance`)
    /// - `amount` exceeds what remains of today's withdrawal ceiling
    ///   (`DailyWithdrawalLimitExceeded`)
    pub fn withdraw(&mut self, amount: Decimal, today: NaiveDate) -> Result<(), WalletError> {
        Self::ensure_positive(amount)?;

        if self.balance < amount {
            return Err(WalletError::insufficient_balance(self.balance, amount));
        }

        let remaining = self.remaining_daily_withdrawal(today);
        if amount > remaining {
            return Err(WalletError::daily_withdrawal_limit_exceeded(
                today,
                self.limits.daily_withdrawal_limit,
                remaining,
                amount,
            ));
        }

        let new_balance = self
            .balance
            .checked_sub(amount)
            .ok_or_else(|| WalletError::arithmetic_overflow("withdrawal"))?;

        self.record(
            Movement::new(today, amount, MovementKind::Withdrawal),
            new_balance,
        );

        Ok(())
    }

    /// Number of deposits recorded on `today`
    pub fn daily_deposit_count(&self, today: NaiveDate) -> usize {
        self.movements
            .iter()
            .filter(|movement| movement.was_deposited_on(today))
            .count()
    }

    /// Total amount withdrawn on `date`, zero if nothing was withdrawn
    ///
    /// Saturates at `Decimal::MAX` instead of overflowing.
    pub fn amount_withdrawn(&self, date: NaiveDate) -> Decimal {
        self.movements
            .iter()
            .filter(|movement| movement.was_withdrawn_on(date))
            .fold(Decimal::ZERO, |total, movement| {
                total.checked_add(movement.amount()).unwrap_or(Decimal::MAX)
            })
    }

    /// Amount that can still be withdrawn on `date`
    ///
    /// Never negative, even if seeded history already exceeds the ceiling.
    pub fn remaining_daily_withdrawal(&self, date: NaiveDate) -> Decimal {
        self.limits
            .daily_withdrawal_limit
            .checked_sub(self.amount_withdrawn(date))
            .unwrap_or(Decimal::ZERO)
            .max(Decimal::ZERO)
    }

    fn ensure_positive(amount: Decimal) -> Result<(), WalletError> {
        if amount <= Decimal::ZERO {
            return Err(WalletError::negative_amount(amount));
        }
        Ok(())
    }

    fn record(&mut self, movement: Movement, new_balance: Decimal) {
        tracing::debug!(
            kind = %movement.kind(),
            amount = %movement.amount(),
            date = %movement.date(),
            balance = %new_balance,
            "movement recorded"
        );
        self.movements.push(movement);
        self.balance = new_balance;
    }
}

impl Default for Account {
    fn default() -> Self {
        Self::new()
    }
}
