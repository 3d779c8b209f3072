use crate::replay::{ReplaySettings, ReportType};
use crate::types::AccountLimits;
use chrono::NaiveDate;
use clap::Parser;
use rust_decimal::Decimal;
use std::path::PathBuf;
use std::str::FromStr;

/// Replay a wallet operation log against a single account
#[derive(Parser, Debug)]
#[command(name = "wallet-engine")]
#[command(about = "Replay deposits and withdrawals against a wallet account", long_about = None)]
pub struct CliArgs {
    /// Input CSV file path containing operation records
    #[arg(value_name = "INPUT", help = "Path to the input CSV file")]
    pub input_file: PathBuf,

    /// Balance the account starts with
    #[arg(
        long = "initial-balance",
        value_name = "AMOUNT",
        value_parser = parse_decimal,
        help = "Starting balance of the account (default: 0)"
    )]
    pub initial_balance: Option<Decimal>,

    /// Maximum number of deposits per calendar date
    #[arg(
        long = "daily-deposit-limit",
        value_name = "COUNT",
        help = "Maximum deposits per day (default: 3)"
    )]
    pub daily_deposit_limit: Option<usize>,

    /// Maximum cumulative withdrawal amount per calendar date
    #[arg(
        long = "daily-withdrawal-limit",
        value_name = "AMOUNT",
        value_parser = parse_decimal,
        help = "Maximum amount withdrawn per day (default: 1000)"
    )]
    pub daily_withdrawal_limit: Option<Decimal>,

    /// Date used for rows without a date
    #[arg(
        long = "today",
        value_name = "YYYY-MM-DD",
        value_parser = parse_date,
        help = "Date applied to rows without one (default: system date)"
    )]
    pub today: Option<NaiveDate>,

    /// Report written to stdout once the log is replayed
    #[arg(
        long = "report",
        value_name = "REPORT",
        default_value = "movements",
        help = "Output report: 'movements' for the history or 'balance' for a summary"
    )]
    pub report: ReportType,
}

fn parse_decimal(value: &str) -> Result<Decimal, String> {
    Decimal::from_str(value.trim()).map_err(|e| format!("invalid amount '{}': {}", value, e))
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|e| format!("invalid date '{}': {}", value, e))
}

impl CliArgs {
    /// Build AccountLimits from CLI arguments
    ///
    /// Missing values fall back to the defaults; invalid ones are replaced by
    /// `AccountLimits::new` with a warning.
    pub fn to_limits(&self) -> AccountLimits {
        if self.daily_deposit_limit.is_some() || self.daily_withdrawal_limit.is_some() {
            let default = AccountLimits::default();
            AccountLimits::new(
                self.daily_deposit_limit
                    .unwrap_or(default.daily_deposit_limit),
                self.daily_withdrawal_limit
                    .unwrap_or(default.daily_withdrawal_limit),
            )
        } else {
            AccountLimits::default()
        }
    }

    /// Build the replay settings from CLI arguments
    pub fn to_settings(&self) -> ReplaySettings {
        ReplaySettings {
            initial_balance: self.initial_balance.unwrap_or(Decimal::ZERO),
            limits: self.to_limits(),
            today: self.today,
            report: self.report.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::default_report(&["program", "ops.csv"], ReportType::Movements)]
    #[case::explicit_movements(&["program", "--report", "movements", "ops.csv"], ReportType::Movements)]
    #[case::explicit_balance(&["program", "--report", "balance", "ops.csv"], ReportType::Balance)]
    fn test_report_parsing(#[case] args: &[&str], #[case] expected: ReportType) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.report, expected);
    }

    #[rstest]
    #[case::no_options(&["program", "ops.csv"], None, None)]
    #[case::initial_balance(&["program", "--initial-balance", "90", "ops.csv"], Some(Decimal::new(90, 0)), None)]
    #[case::fractional_balance(&["program", "--initial-balance", "12.5", "ops.csv"], Some(Decimal::new(125, 1)), None)]
    #[case::today(
        &["program", "--today", "2024-03-01", "ops.csv"],
        None,
        NaiveDate::from_ymd_opt(2024, 3, 1)
    )]
    fn test_value_options(
        #[case] args: &[&str],
        #[case] initial_balance: Option<Decimal>,
        #[case] today: Option<NaiveDate>,
    ) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.initial_balance, initial_balance);
        assert_eq!(parsed.today, today);
    }

    #[rstest]
    #[case::all_defaults(&["program", "ops.csv"], 3, Decimal::new(1000, 0))]
    #[case::custom_deposits(&["program", "--daily-deposit-limit", "5", "ops.csv"], 5, Decimal::new(1000, 0))]
    #[case::custom_withdrawals(&["program", "--daily-withdrawal-limit", "250.5", "ops.csv"], 3, Decimal::new(2505, 1))]
    #[case::zero_deposits_fallback(&["program", "--daily-deposit-limit", "0", "ops.csv"], 3, Decimal::new(1000, 0))]
    #[case::negative_withdrawals_fallback(&["program", "--daily-withdrawal-limit=-5", "ops.csv"], 3, Decimal::new(1000, 0))]
    fn test_limits_conversion(
        #[case] args: &[&str],
        #[case] expected_deposits: usize,
        #[case] expected_withdrawals: Decimal,
    ) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        let limits = parsed.to_limits();

        assert_eq!(limits.daily_deposit_limit, expected_deposits);
        assert_eq!(limits.daily_withdrawal_limit, expected_withdrawals);
    }

    #[test]
    fn test_settings_conversion() {
        let parsed = CliArgs::try_parse_from([
            "program",
            "--initial-balance",
            "5000",
            "--today",
            "2024-03-01",
            "--report",
            "balance",
            "ops.csv",
        ])
        .unwrap();

        let settings = parsed.to_settings();

        assert_eq!(settings.initial_balance, Decimal::new(5000, 0));
        assert_eq!(settings.today, NaiveDate::from_ymd_opt(2024, 3, 1));
        assert_eq!(settings.report, ReportType::Balance);
        assert_eq!(settings.limits, AccountLimits::default());
    }

    #[rstest]
    #[case::missing_input(&["program"])]
    #[case::invalid_report(&["program", "--report", "invalid", "ops.csv"])]
    #[case::invalid_balance(&["program", "--initial-balance", "lots", "ops.csv"])]
    #[case::invalid_today(&["program", "--today", "01/03/2024", "ops.csv"])]
    #[case::invalid_deposit_limit(&["program", "--daily-deposit-limit", "-1", "ops.csv"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        let result = CliArgs::try_parse_from(args);
        assert!(result.is_err());
    }
}
