use super::error::ConfigError;
use super::sampling::SamplingConfig;
use super::server::ServerConfig;
use super::upstream::{GeoapifyConfig, HttpConfig, WeatherXmConfig};
use std::path::Path;

/// Application configuration loaded from sampler.toml
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppConfig {
    pub weatherxm: WeatherXmConfig,
    pub geoapify: GeoapifyConfig,
    pub sampling: SamplingConfig,
    pub http: HttpConfig,
    pub server: ServerConfig,
}

impl AppConfig {
    /// Load configuration from a file path (or default path if None)
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        super::loader::load_config(path)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        super::loader::parse_config(content, Path::new("<inline>"))
    }
}
