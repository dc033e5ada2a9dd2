//! Tracing setup for the binary
//!
//! Logs go to stderr so that stdout stays machine-readable. The filter comes
//! from `PRECEDENCE_LOG` when set, otherwise from the verbosity flag.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// Environment variable overriding the log filter
pub const LOG_ENV: &str = "PRECEDENCE_LOG";

fn default_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("precedence=debug,warn")
    } else {
        EnvFilter::new("warn")
    }
}

/// Install the global subscriber; later calls are no-ops
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| default_filter(verbose));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init();
}
