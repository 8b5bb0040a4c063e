pub mod build_info;

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding an `EnvFilter` directive for log output.
pub const LOG_ENV: &str = "EXPENSE_TRACKER_LOG";

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber, writing to stderr so reports stay clean.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new("expense_tracker=warn"));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}
