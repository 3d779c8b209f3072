//! Operation log replay
//!
//! Reads an operation log, applies every row to a single account through
//! [`WalletEngine`], and writes a report of the resulting state.
//!
//! Rejected rows (malformed CSV or business rule violations) are logged and
//! skipped; they never abort the replay. Operations that fail for any other
//! reason, such as a balance overflow, are logged as errors and counted
//! separately. Only fatal errors such as a missing input file or a failing
//! output writer are returned.

use crate::core::{Account, Clock, FixedClock, SystemClock, WalletEngine};
use crate::io::{write_balance_csv, write_movements_csv, OperationReader};
use crate::types::{AccountLimits, WalletError};
use chrono::NaiveDate;
use clap::ValueEnum;
use rust_decimal::Decimal;
use std::io::Write;
use std::path::Path;

/// Reports that can be produced after a replay
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportType {
    /// Full movement history (`date,type,amount`)
    Movements,
    /// Final balance with movement counts
    Balance,
}

/// Settings for a single replay
#[derive(Clone, Debug, PartialEq)]
pub struct ReplaySettings {
    pub initial_balance: Decimal,
    pub limits: AccountLimits,
    /// Date for rows without one; the system date when `None`
    pub today: Option<NaiveDate>,
    pub report: ReportType,
}

impl Default for ReplaySettings {
    fn default() -> Self {
        Self {
            initial_balance: Decimal::ZERO,
            limits: AccountLimits::default(),
            today: None,
            report: ReportType::Movements,
        }
    }
}

/// Counters collected while replaying
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub applied: usize,
    pub rejected: usize,
    pub malformed: usize,
    /// Operations that failed without breaking a business rule
    pub failed: usize,
}

/// Replay `input_path` and write the selected report to `output`
///
/// # Errors
///
/// Returns an error if the input file cannot be opened or the report cannot
/// be written. Row-level failures are logged and counted instead.
pub fn replay(
    input_path: &Path,
    settings: &ReplaySettings,
    output: &mut dyn Write,
) -> Result<ReplaySummary, WalletError> {
    let clock: Box<dyn Clock> = match settings.today {
        Some(today) => Box::new(FixedClock(today)),
        None => Box::new(SystemClock),
    };
    replay_with_clock(input_path, settings, clock, output)
}

/// Replay `input_path` using `clock` for rows without a date
pub fn replay_with_clock<C: Clock>(
    input_path: &Path,
    settings: &ReplaySettings,
    clock: C,
    output: &mut dyn Write,
) -> Result<ReplaySummary, WalletError> {
    let account = Account::with_initial_balance(settings.initial_balance).limits(settings.limits);
    let mut engine = WalletEngine::with_clock(account, clock);
    let mut summary = ReplaySummary::default();

    let reader = OperationReader::new(input_path)?;

    for result in reader {
        match result {
            Ok(operation) => match engine.process(operation) {
                Ok(()) => summary.applied += 1,
                Err(e) if e.is_rule_violation() => {
                    summary.rejected += 1;
                    tracing::warn!("Operation rejected: {}", e);
                }
                Err(e) => {
                    summary.failed += 1;
                    tracing::error!("Operation failed: {}", e);
                }
            },
            Err(e) => {
                summary.malformed += 1;
                tracing::warn!("Skipping malformed row: {}", e);
            }
        }
    }

    tracing::info!(
        applied = summary.applied,
        rejected = summary.rejected,
        malformed = summary.malformed,
        failed = summary.failed,
        balance = %engine.account().balance(),
        "replay finished"
    );

    match settings.report {
        ReportType::Movements => write_movements_csv(engine.account().movements(), output)?,
        ReportType::Balance => write_balance_csv(engine.account(), output)?,
    }

    Ok(summary)
}
