use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

/// Install the stderr log subscriber. `RUST_LOG` overrides the level chosen
/// from the verbose flag.
pub fn init(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // A second init (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}
