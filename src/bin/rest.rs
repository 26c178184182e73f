//! REST-only binary entry point

use clap::Parser;
use station_sampler::config::AppConfig;
use station_sampler::infrastructure::http::build_client;
use station_sampler::server::{self, ServerState};
use station_sampler::{ToolRegistry, init_tracing};
use std::error::Error;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "station-sampler-rest", about = "Station sampler REST API server")]
struct Args {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// REST API bind address (overrides config if specified)
    #[arg(long)]
    addr: Option<SocketAddr>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    init_tracing();
    info!("Starting station-sampler REST API server");

    let config = AppConfig::load(args.config.as_deref())?;
    debug!(
        weatherxm = %config.weatherxm.endpoint,
        sample_size = config.sampling.sample_size,
        "Configuration loaded"
    );

    let addr = args.addr.unwrap_or(config.server.bind);
    let registry = ToolRegistry::from_config(&config, build_client(&config.http)?);
    let state = ServerState::from_env(registry);

    info!(addr = %addr, "REST server starting");
    server::serve(state, addr, &config.server.cors_origins).await?;

    Ok(())
}
