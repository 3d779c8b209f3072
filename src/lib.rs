//! Rust Wallet Engine Library
//! # Overview
//!
//! This library models a single wallet account that records deposits and
//! withdrawals and enforces its daily business rules.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Movement, AccountLimits, WalletError, etc.)
//! - [`core`] - Business logic components:
//!   - [`core::account`] - Balance, movement history and rule enforcement
//!   - [`core::engine`] - Clock-driven processing of operation requests
//!   - [`core::traits`] - Clock abstraction for injecting "today"
//! - [`io`] - CSV operation log reading and report writing
//! - [`replay`] - Replaying an operation log against one account
//! - [`cli`] - CLI arguments parsing
//! - [`logging`] - Tracing subscriber setup for the binary
//!
//! # Business Rules
//!
//! - **Positive amounts**: deposits and withdrawals must be strictly positive
//! - **Daily deposit count**: at most 3 deposits per calendar date by default
//! - **Daily withdrawal ceiling**: at most 1000 withdrawn per calendar date by
//!   default, checked after the balance check
//!
//! A failed operation never changes the account.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod logging;
pub mod replay;
pub mod types;

pub use core::{Account, Clock, FixedClock, SystemClock, WalletEngine};
pub use replay::{replay, ReplaySettings, ReplaySummary, ReportType};
pub use types::{AccountLimits, Movement, MovementKind, OperationRecord, WalletError};
