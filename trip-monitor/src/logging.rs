//! Logging setup for the binary.
//!
//! `RUST_LOG` takes precedence. Without it the level is `info`, or `debug`
//! when debug output is requested on the command line.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Default filter directive when `RUST_LOG` is not set.
pub fn default_filter(debug: bool) -> &'static str {
    if debug { "debug" } else { "info" }
}

/// Build the env filter, falling back to the default on a bad `RUST_LOG`.
pub fn env_filter(debug: bool) -> EnvFilter {
    let default = default_filter(debug);
    match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(directives) => EnvFilter::try_new(&directives).unwrap_or_else(|err| {
            eprintln!(
                "invalid {}, falling back to level '{}' - {}",
                EnvFilter::DEFAULT_ENV,
                default,
                err
            );
            EnvFilter::new(default)
        }),
        Err(_) => EnvFilter::new(default),
    }
}

/// Install the global subscriber. Call once at startup.
pub fn init_logging(debug: bool) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(env_filter(debug))
        .init();
}
