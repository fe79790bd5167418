use super::config::{LogFormat, LoggingConfig};

/// Configure tracing once at startup for the whole process.
///
/// `RUST_LOG` wins over the configured level when it is set.
///
/// ```bash
/// RUST_LOG=debug cargo run                              # everything
/// RUST_LOG=catalog_cart::cart_actor=debug cargo run     # cart persistence only
/// ```
pub fn setup_tracing(logging: &LoggingConfig) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&logging.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime());

    match logging.format {
        LogFormat::Compact => builder.compact().init(),
        LogFormat::Pretty => builder.pretty().init(),
        LogFormat::Json => builder.json().init(),
    }
}
