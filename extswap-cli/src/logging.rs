use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding the log filter, e.g. `EXTSWAP_LOG=debug`.
pub const LOG_ENV: &str = "EXTSWAP_LOG";

/// Install the stderr subscriber. Stdout is reserved for `--output`.
pub fn init() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| "warn".into()))
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}
