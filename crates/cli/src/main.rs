use clap::Parser;
use hostsd_domain::CliOverrides;
use tracing::{error, info};

mod bootstrap;
mod di;
mod server;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser)]
#[command(name = "hostsd")]
#[command(version)]
#[command(about = "hostsd - DNS responder for a local host table")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Bind address for the primary UDP endpoint
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Listener workers (0 = one per CPU)
    #[arg(short = 'w', long)]
    workers: Option<usize>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        port: cli.port,
        bind_address: cli.bind.clone(),
        workers: cli.workers,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);
    bootstrap::log_config(cli.config.as_deref(), &config);

    info!("Starting hostsd v{}", env!("CARGO_PKG_VERSION"));

    let num_workers = config.server.effective_workers();
    let workers = di::build_workers(&config, num_workers).await.map_err(|e| {
        error!(error = %e, "Failed to load record tables");
        e
    })?;

    let endpoints = server::Endpoints::from_config(&config.server)?;

    #[cfg(unix)]
    tokio::spawn(server::reload::watch_sighup(di::table_loaders(&workers)));

    tokio::select! {
        result = server::start_dns_server(endpoints, di::handlers(&workers)) => {
            if let Err(e) = result {
                error!(error = %e, "DNS server failed");
                return Err(e);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
    }

    info!("Server shutdown complete");
    Ok(())
}
