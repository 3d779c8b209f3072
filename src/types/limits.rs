//! Daily limit configuration for an account
//!
//! Limits are plain configuration values with documented defaults so that
//! policy can change per deployment without touching the account logic.

use rust_decimal::Decimal;

/// Default maximum number of deposits accepted on one calendar date
pub const DEFAULT_DAILY_DEPOSIT_LIMIT: usize = 3;

/// Default maximum cumulative amount withdrawn on one calendar date
pub const DEFAULT_DAILY_WITHDRAWAL_LIMIT: i64 = 1000;

/// Per-account daily limits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountLimits {
    /// Maximum number of deposits per calendar date
    pub daily_deposit_limit: usize,
    /// Maximum cumulative withdrawal amount per calendar date
    pub daily_withdrawal_limit: Decimal,
}

impl Default for AccountLimits {
    fn default() -> Self {
        Self {
            daily_deposit_limit: DEFAULT_DAILY_DEPOSIT_LIMIT,
            daily_withdrawal_limit: Decimal::from(DEFAULT_DAILY_WITHDRAWAL_LIMIT),
        }
    }
}

impl AccountLimits {
    /// Create limits with custom values
    ///
    /// A zero deposit limit or a non-positive withdrawal limit would make the
    /// corresponding operation impossible; such values are replaced by the
    /// defaults and a warning is logged.
    pub fn new(daily_deposit_limit: usize, daily_withdrawal_limit: Decimal) -> Self {
        let default = Self::default();

        let daily_deposit_limit = if daily_deposit_limit == 0 {
            tracing::warn!(
                "Invalid daily_deposit_limit ({}), using default ({})",
                daily_deposit_limit,
                default.daily_deposit_limit
            );
            default.daily_deposit_limit
        } else {
            daily_deposit_limit
        };

        let daily_withdrawal_limit = if daily_withdrawal_limit <= Decimal::ZERO {
            tracing::warn!(
                "Invalid daily_withdrawal_limit ({}), using default ({})",
                daily_withdrawal_limit,
                default.daily_withdrawal_limit
            );
            default.daily_withdrawal_limit
        } else {
            daily_withdrawal_limit
        };

        Self {
            daily_deposit_limit,
            daily_withdrawal_limit,
        }
    }
}
