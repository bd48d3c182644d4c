use hostsd_domain::Config;
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` takes precedence over the configured level when set.
pub fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.as_str()));

    if config.logging.json {
        tracing_subscriber::fmt()
            .json()
            .with_target(true)
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_target(true)
            .with_env_filter(filter)
            .init();
    }
}
