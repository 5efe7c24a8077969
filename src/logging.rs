//! Tracing setup
//!
//! Installs a stderr `tracing` subscriber filtered by the
//! `LEDGER_STATEMENT_LOG` environment variable (default: `warn`), so that
//! diagnostics never mix with report output on stdout.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding the log filter directives
pub const LOG_ENV: &str = "LEDGER_STATEMENT_LOG";

const DEFAULT_FILTER: &str = "warn";

static INIT_TRACING: Once = Once::new();

/// Initialize global tracing once; later calls are no-ops
pub fn init() {
    INIT_TRACING.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        // Another subscriber may already be installed (e.g. by a test harness)
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();

        tracing::debug!("tracing initialized");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_is_idempotent() {
        super::init();
        super::init();
    }
}
