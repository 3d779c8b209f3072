//! Tracing setup
//!
//! The library only emits `tracing` events; the binary installs a subscriber
//! that writes them to stderr so stdout stays a clean CSV report.

use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Default filter when `RUST_LOG` is not set
pub const DEFAULT_DIRECTIVE: &str = "rust_wallet_engine=info";

/// Initializes the global tracing subscriber
///
/// Honors `RUST_LOG`, falling back to [`DEFAULT_DIRECTIVE`]. Calling it more
/// than once is a no-op.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_tracing_is_idempotent() {
        super::init_tracing();
        super::init_tracing();
    }
}
