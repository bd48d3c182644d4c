use hostsd_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;
    Ok(config)
}

/// Summary line, emitted once the subscriber is installed.
pub fn log_config(config_path: Option<&str>, config: &Config) {
    info!(
        config_file = config_path.unwrap_or("default"),
        port = config.server.port,
        bind = %config.server.bind_address,
        tcp = config.server.enable_tcp,
        v6 = config.server.enable_v6,
        use_hosts = config.tables.use_hosts,
        use_blacklist = config.tables.use_blacklist,
        static_records = config.records.len(),
        cname_fallback = config.resolver.cname_fallback.as_str(),
        "Configuration loaded"
    );
}
