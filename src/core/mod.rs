//! Core business logic module
//!
//! This module contains the account components:
//! - `account` - Account state, movement history and business rules
//! - `engine` - Clock-driven processing of deposit/withdrawal requests
//! - `traits` - Clock abstraction for injecting "today"
//! - `fixture` - Test-only builder for accounts in a seeded state

pub mod account;
pub mod engine;
#[cfg(test)]
pub mod fixture;
pub mod traits;

pub use account::Account;
pub use engine::WalletEngine;
#[cfg(test)]
pub use fixture::AccountFixture;
pub use traits::{Clock, FixedClock, SystemClock};
