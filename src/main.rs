//! Rust Wallet Engine CLI
//!
//! Command-line interface for replaying a wallet operation log.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- operations.csv > movements.csv
//! cargo run -- --report balance operations.csv
//! cargo run -- --initial-balance 5000 --today 2024-03-01 operations.csv
//! cargo run -- --daily-deposit-limit 5 --daily-withdrawal-limit 2500 operations.csv
//! ```
//!
//! The program reads operation records (`type,date,amount`) from the input
//! CSV file, applies them to a single account, and writes the selected report
//! to stdout. Rejected operations are logged to stderr.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (missing arguments, file not found, output not writable, etc.)

use rust_wallet_engine::{cli, logging, replay};
use std::process;

fn main() {
    logging::init_tracing();

    // Parse command-line arguments using clap
    let args = cli::parse_args();
    let settings = args.to_settings();

    // Output goes to stdout
    let mut output = std::io::stdout();
    if let Err(e) = replay::replay(&args.input_file, &settings, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
