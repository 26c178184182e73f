use super::CONFIG_PATH;
use super::error::ConfigError;
use super::sampling::SamplingConfig;
use super::server::{RawServer, ServerConfig};
use super::upstream::{GeoapifyConfig, HttpConfig, WeatherXmConfig};
use crate::constants::ENV_PATH;
use dotenvy::from_filename;
use serde::Deserialize;
use std::fs;
use std::io;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Once;
use tracing::debug;

static ENV_LOADER: Once = Once::new();

/// Raw configuration structure for deserialization from TOML
#[derive(Debug, Deserialize, Default)]
pub(super) struct RawConfig {
    #[serde(default)]
    pub weatherxm: WeatherXmConfig,
    #[serde(default)]
    pub geoapify: GeoapifyConfig,
    #[serde(default)]
    pub sampling: SamplingConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub server: RawServer,
}

/// Ensures environment variables are loaded from config/.env
///
/// Only the development server calls this; tool invocations receive their
/// secrets through the event envelope.
pub fn ensure_env_loaded() {
    ENV_LOADER.call_once(|| {
        let _ = from_filename(ENV_PATH);
    });
}

/// Load and validate configuration from a file path.
///
/// An explicit path must exist. When no path is given the default path is
/// read if present, otherwise built-in defaults are used.
pub fn load_config(path: Option<&Path>) -> Result<super::AppConfig, ConfigError> {
    match path {
        Some(path) => read_config(path),
        None => {
            let default_path = Path::new(CONFIG_PATH);
            if default_path.exists() {
                read_config(default_path)
            } else {
                debug!(path = CONFIG_PATH, "No configuration file found, using defaults");
                validate_and_build(RawConfig::default())
            }
        }
    }
}

fn read_config(path: &Path) -> Result<super::AppConfig, ConfigError> {
    debug!(path = %path.display(), "Reading sampler configuration file");

    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            ConfigError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    parse_config(&content, path)
}

pub(super) fn parse_config(content: &str, path: &Path) -> Result<super::AppConfig, ConfigError> {
    let parsed: RawConfig = toml::from_str(content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    validate_and_build(parsed)
}

fn validate_and_build(parsed: RawConfig) -> Result<super::AppConfig, ConfigError> {
    if parsed.weatherxm.endpoint.trim().is_empty() {
        return Err(ConfigError::EmptyEndpoint {
            section: "weatherxm",
        });
    }
    if parsed.weatherxm.api_key_header.trim().is_empty() {
        return Err(ConfigError::EmptyApiKeyHeader);
    }
    if parsed.geoapify.endpoint.trim().is_empty() {
        return Err(ConfigError::EmptyEndpoint {
            section: "geoapify",
        });
    }
    if parsed.sampling.sample_size == 0 {
        return Err(ConfigError::InvalidSampleSize);
    }
    if parsed.sampling.activity_field.trim().is_empty() {
        return Err(ConfigError::EmptyActivityField);
    }
    if parsed.sampling.fetch_timeout_ms == Some(0) {
        return Err(ConfigError::InvalidTimeout {
            field: "[sampling] fetch_timeout_ms",
        });
    }
    if parsed.http.timeout_ms == Some(0) {
        return Err(ConfigError::InvalidTimeout {
            field: "[http] timeout_ms",
        });
    }

    let bind: SocketAddr =
        parsed
            .server
            .bind
            .parse()
            .map_err(|source| ConfigError::InvalidBind {
                value: parsed.server.bind.clone(),
                source,
            })?;

    Ok(super::AppConfig {
        weatherxm: parsed.weatherxm,
        geoapify: parsed.geoapify,
        sampling: parsed.sampling,
        http: parsed.http,
        server: ServerConfig {
            bind,
            cors_origins: parsed.server.cors_origins,
        },
    })
}
