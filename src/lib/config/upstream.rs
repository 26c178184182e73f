//! Upstream collaborator settings: WeatherXM Pro, Geoapify and the shared HTTP client.

use super::defaults;
use serde::Deserialize;

/// WeatherXM Pro API settings.
///
/// ```toml
/// [weatherxm]
/// endpoint = "https://pro.weatherxm.com/api/v1"
/// api_key_header = "X-API-KEY"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WeatherXmConfig {
    #[serde(default = "defaults::weatherxm_endpoint")]
    pub endpoint: String,
    #[serde(default = "defaults::api_key_header")]
    pub api_key_header: String,
}

impl Default for WeatherXmConfig {
    fn default() -> Self {
        Self {
            endpoint: defaults::weatherxm_endpoint(),
            api_key_header: defaults::api_key_header(),
        }
    }
}

/// Geoapify geocoding API settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeoapifyConfig {
    #[serde(default = "defaults::geoapify_endpoint")]
    pub endpoint: String,
}

impl Default for GeoapifyConfig {
    fn default() -> Self {
        Self {
            endpoint: defaults::geoapify_endpoint(),
        }
    }
}

/// Settings for the pooled HTTP client.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HttpConfig {
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,
    /// Transport-level timeout applied to every call, in milliseconds.
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_ms: None,
        }
    }
}
