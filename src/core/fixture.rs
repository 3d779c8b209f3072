//! Account fixtures for tests
//!
//! `AccountFixture` builds an [`Account`] in an arbitrary state, skipping
//! every business rule. It exists so tests can start from "balance 90" or
//! "already withdrew 900 today" without replaying the operations that would
//! lead there. It is only compiled for this crate's tests, so production code
//! cannot reach it.

use crate::core::Account;
use crate::types::{AccountLimits, Movement, MovementKind};
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Builder for accounts in a seeded state
#[derive(Debug, Clone, Default)]
pub struct AccountFixture {
    balance: Decimal,
    movements: Vec<Movement>,
    limits: AccountLimits,
}

impl AccountFixture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the balance without recording a movement
    pub fn balance(mut self, balance: Decimal) -> Self {
        self.balance = balance;
        self
    }

    /// Replace the whole movement history
    pub fn movements(mut self, movements: Vec<Movement>) -> Self {
        self.movements = movements;
        self
    }

    /// Append one movement to the history
    ///
    /// The balance is left alone; combine with [`AccountFixture::balance`]
    /// when both matter.
    pub fn movement(mut self, date: NaiveDate, amount: Decimal, kind: MovementKind) -> Self {
        self.movements.push(Movement::new(date, amount, kind));
        self
    }

    pub fn limits(mut self, limits: AccountLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn build(self) -> Account {
        let mut account = Account::with_initial_balance(self.balance).limits(self.limits);
        account.movements = self.movements;
        account
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_seeds_state_without_validation() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let account = AccountFixture::new()
            .balance(Decimal::new(-20, 0))
            .movement(date, Decimal::new(-5, 0), MovementKind::Deposit)
            .limits(AccountLimits::new(7, Decimal::new(50, 0)))
            .build();

        assert_eq!(account.balance(), Decimal::new(-20, 0));
        assert_eq!(account.movements().len(), 1);
        assert_eq!(account.account_limits().daily_deposit_limit, 7);
    }

    #[test]
    fn test_movements_replaces_history() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let history = vec![
            Movement::new(date, Decimal::ONE, MovementKind::Deposit),
            Movement::new(date, Decimal::TWO, MovementKind::Withdrawal),
        ];

        let account = AccountFixture::new()
            .movement(date, Decimal::TEN, MovementKind::Deposit)
            .movements(history.clone())
            .build();

        assert_eq!(account.movements(), history.as_slice());
    }
}
