//! Logging setup for the command-line tool.
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the binary. Events go to stderr so they never mix with report output.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_LEVEL: &str = "warn";

/// Filter used with `--verbose` when `RUST_LOG` is unset.
pub const VERBOSE_LEVEL: &str = "chatsift=debug";

/// Installs a stderr subscriber.
///
/// `RUST_LOG` takes precedence; otherwise the level is `warn`, or debug
/// events from this crate when `verbose` is set. Calling this twice is a
/// no-op.
pub fn init(verbose: bool) {
    let fallback = if verbose { VERBOSE_LEVEL } else { DEFAULT_LEVEL };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Initialize logging for tests (captured by the test harness)
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
