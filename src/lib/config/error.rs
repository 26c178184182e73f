use std::io;
use std::net::AddrParseError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration file not found at {path:?}")]
    NotFound { path: PathBuf },

    #[error("failed to read config from {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config from {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("[{section}] endpoint must not be empty")]
    EmptyEndpoint { section: &'static str },

    #[error("[weatherxm] api_key_header must not be empty")]
    EmptyApiKeyHeader,

    #[error("[sampling] sample_size must be at least 1")]
    InvalidSampleSize,

    #[error("[sampling] activity_field must not be empty")]
    EmptyActivityField,

    #[error("{field} must be greater than zero when set")]
    InvalidTimeout { field: &'static str },

    #[error("[server] bind address '{value}' is invalid: {source}")]
    InvalidBind {
        value: String,
        #[source]
        source: AddrParseError,
    },
}
