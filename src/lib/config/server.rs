use super::defaults;
use crate::constants::DEFAULT_BIND;
use serde::Deserialize;
use std::net::SocketAddr;

/// REST server settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    /// Allowed CORS origins. Empty allows any origin.
    pub cors_origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawServer {
    #[serde(default = "defaults::bind")]
    pub bind: String,
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

impl Default for RawServer {
    fn default() -> Self {
        Self {
            bind: defaults::bind(),
            cors_origins: Vec::new(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND,
            cors_origins: Vec::new(),
        }
    }
}
