//! Diagnostic logging to stderr.

use tracing_subscriber::EnvFilter;

/// Environment variable overriding the log filter, e.g. `APIGEN_LOG=debug`.
pub const LOG_ENV: &str = "APIGEN_LOG";

/// Install the global subscriber.
///
/// `APIGEN_LOG` wins when set; otherwise each `-v` raises the level one
/// step from `warn`.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    // A subscriber may already be set when running under a test harness.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
