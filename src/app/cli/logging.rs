//! Console logging for the CLI.
//!
//! Logs go to stderr so stdout carries only command output. The filter comes
//! from `OUTREACH_LOG` (same syntax as `RUST_LOG`), defaulting to warnings.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const LOG_ENV_VAR: &str = "OUTREACH_LOG";

fn default_directive(verbose: bool) -> &'static str {
    if verbose { "outreach=debug,warn" } else { "warn" }
}

/// Install the global subscriber. `verbose` wins over the environment.
pub fn init(verbose: bool) {
    let env_filter = if verbose {
        EnvFilter::new(default_directive(true))
    } else {
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(default_directive(false)))
    };

    // A subscriber may already be installed when embedded in tests.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
