//! Log setup for the binary.
//!
//! Logs go to stderr so they never mix with menu output. `RUST_LOG` wins over
//! both `-v` flags and `output.verbosity`.

use stockroom::config::Verbosity;
use tracing_subscriber::EnvFilter;

/// Filter directive for a `-v` count, falling back to the configured verbosity.
pub fn level_for(verbose: u8, verbosity: Verbosity) -> &'static str {
    match verbose {
        0 => match verbosity {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Verbose => "info",
            Verbosity::Debug => "debug",
        },
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

pub fn init(verbose: u8, verbosity: Verbosity, color: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("stockroom={}", level_for(verbose, verbosity))));

    // A subscriber may already be installed (tests); keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(color)
        .without_time()
        .try_init();
}
