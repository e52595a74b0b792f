//! Logging initialization.
//!
//! Logs go to stderr so that expansion results on stdout stay pipeable.

use tracing::{debug, trace};
use tracing_subscriber::EnvFilter;

/// Maps a `-v` count to a filter directive.
pub fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initializes the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the verbosity flag when set.
pub fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose >= 2) // Show target module for -vv and above
        .with_line_number(verbose >= 3)
        .try_init();

    debug!("linkster started with verbosity level: {}", verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level() {
        assert_eq!(log_level(0), "warn");
        assert_eq!(log_level(1), "info");
        assert_eq!(log_level(2), "debug");
        assert_eq!(log_level(3), "trace");
        assert_eq!(log_level(9), "trace");
    }
}
