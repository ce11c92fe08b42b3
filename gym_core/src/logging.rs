//! Logging infrastructure for GymBuddy.
//!
//! Logs go to stderr so command output on stdout stays clean for piping.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Default filter level for a verbosity flag
pub fn level_for(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Initialize logging for the CLI
///
/// `RUST_LOG` takes precedence over the verbosity flag.
pub fn init(verbose: bool) {
    init_with_level(level_for(verbose))
}

/// Initialize logging with a specific default level
pub fn init_with_level(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

/// Initialize logging for testing (captures logs for test output)
#[cfg(test)]
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::new("debug"))
        .try_init();
}
