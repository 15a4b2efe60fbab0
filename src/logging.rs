//! Logging initialization.
//!
//! Logs go to stderr so stdout stays reserved for the call result.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding the log filter directive.
pub const LOG_FILTER_VAR: &str = "MARK_STEP_LOG";

/// Installs the global subscriber. Defaults to `warn`.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_FILTER_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));

    // Already initialized is not worth failing over.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
        .try_init();
}
