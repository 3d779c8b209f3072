//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `movement`: Movement records and their kinds
//! - `limits`: Daily limit configuration
//! - `operation`: Unvalidated deposit/withdrawal requests
//! - `error`: Error types for the wallet engine

pub mod error;
pub mod limits;
pub mod movement;
pub mod operation;

pub use error::WalletError;
pub use limits::AccountLimits;
pub use movement::{Movement, MovementKind};
pub use operation::OperationRecord;
