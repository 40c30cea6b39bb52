use tracing_subscriber::{EnvFilter, fmt, prelude::*, util::SubscriberInitExt};

/// Initializes the global tracing subscriber. Default level is `warn` so
/// fallback substitutions stay visible; `--verbose` raises it to `debug`,
/// and `RUST_LOG` overrides both.
pub fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().compact().without_time())
        .with(filter)
        .init();
}
