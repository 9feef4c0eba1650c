//! Helpers shared by the unit tests.

pub(crate) mod quick;

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static LOGGING: Once = Once::new();

/// Installs a global `tracing` subscriber for the test binary. Verbosity follows `RUST_LOG` and
/// defaults to `warn`.
pub(crate) fn init_logging() {
    LOGGING.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        // Another test harness may have set a global subscriber already.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}
