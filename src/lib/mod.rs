pub mod application;
pub mod cli;
pub mod config;
pub mod constants;
pub mod domain;
pub mod infrastructure;

pub use application::envelope::{RawEvent, ResponseEnvelope};
pub use application::tooling::{Tool, ToolError, ToolRegistry};
pub use cli::{Cli, RunMode};
pub use config::AppConfig;
pub use infrastructure::server;

use infrastructure::http::build_client;
use std::error::Error;
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::Path;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt};

pub async fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    init_tracing();
    info!("Starting station-sampler");
    debug!(
        mode = ?cli.mode,
        config = ?cli.config,
        tool = %cli.tool,
        "CLI arguments parsed"
    );

    let config = AppConfig::load(cli.config.as_deref())?;
    if let Some(path) = cli.config.as_deref() {
        info!(path = %path.display(), "Loaded configuration from file");
    } else {
        info!("Loaded configuration from default path or defaults");
    }

    let http = build_client(&config.http)?;
    let registry = ToolRegistry::from_config(&config, http);

    match cli.mode {
        RunMode::Invoke => {
            let event = read_event(cli.event_file.as_deref())?;
            let envelope = registry.handle(&cli.tool, &event).await;
            println!("{}", serde_json::to_string(&envelope)?);
        }
        RunMode::Rest => {
            let addr = cli.rest_addr.unwrap_or(config.server.bind);
            info!(addr = %addr, "Starting REST server");
            let state = server::ServerState::from_env(registry);
            server::serve(state, addr, &config.server.cors_origins).await?;
        }
    }
    info!("Execution finished");
    Ok(())
}

/// Read a raw event from `path`, or from stdin when no path is given.
pub fn read_event(path: Option<&Path>) -> Result<RawEvent, Box<dyn Error>> {
    let content = match path {
        Some(path) => {
            info!(path = %path.display(), "Reading event from file");
            fs::read_to_string(path)?
        }
        None => {
            let stdin = io::stdin();
            if stdin.is_terminal() {
                return Err("event required via --event-file or stdin".into());
            }
            info!("Reading event from standard input");
            let mut buffer = String::new();
            stdin.lock().read_to_string(&mut buffer)?;
            buffer
        }
    };
    Ok(serde_json::from_str(&content)?)
}

/// Logs go to stderr so stdout carries only the response envelope.
pub fn init_tracing() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .with_target(false)
            .with_level(true)
            .init();
    });
}
