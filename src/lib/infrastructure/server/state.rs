use crate::application::tooling::{Secrets, ToolRegistry};
use crate::config::ensure_env_loaded;
use crate::constants::{GEOAPIFY_API_KEY, WEATHER_XM_API_KEY};
use std::env;
use tracing::debug;

/// Shared state of the REST server.
pub struct ServerState {
    registry: ToolRegistry,
    dev_secrets: Secrets,
}

impl ServerState {
    pub fn new(registry: ToolRegistry, dev_secrets: Secrets) -> Self {
        Self {
            registry,
            dev_secrets,
        }
    }

    /// State whose development routes use secrets from `config/.env` and the
    /// process environment.
    pub fn from_env(registry: ToolRegistry) -> Self {
        ensure_env_loaded();
        let dev_secrets: Secrets = [WEATHER_XM_API_KEY, GEOAPIFY_API_KEY]
            .into_iter()
            .filter_map(|name| env::var(name).ok().map(|value| (name.to_string(), value)))
            .collect();
        debug!(
            loaded = dev_secrets.len(),
            "Loaded development secrets from environment"
        );
        Self::new(registry, dev_secrets)
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    pub fn dev_secrets(&self) -> &Secrets {
        &self.dev_secrets
    }
}
