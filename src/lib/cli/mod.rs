use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "station-sampler",
    version,
    about = "Discover stations in a bounding box and fetch a random sample of them concurrently"
)]
pub struct Cli {
    /// Configuration file path
    #[arg(long)]
    pub config: Option<PathBuf>,
    #[arg(long, short, value_enum, default_value_t = RunMode::Invoke)]
    pub mode: RunMode,
    /// Tool to invoke in `invoke` mode
    #[arg(long, default_value = crate::constants::STATIONS_TOOL)]
    pub tool: String,
    /// File holding the raw event `{"body": "..."}`; stdin when absent
    #[arg(long)]
    pub event_file: Option<PathBuf>,
    /// REST bind address (overrides config if specified)
    #[arg(long)]
    pub rest_addr: Option<SocketAddr>,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum RunMode {
    /// Run one tool invocation and print the response envelope
    Invoke,
    /// REST API server
    Rest,
}
