//! Application constants
//!
//! Single source of truth for paths, wire names and other constants.

use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};

/// Default configuration file path
pub const CONFIG_PATH: &str = "config/sampler.toml";

/// Default environment file path (development server secrets)
pub const ENV_PATH: &str = "config/.env";

/// Registered name of the bounding-box station sampler tool
pub const STATIONS_TOOL: &str = "weatherxm_stations";

/// Registered name of the place-name geocoding tool
pub const GEOCODE_TOOL: &str = "geocode_bbox";

/// Secret carrying the WeatherXM Pro API key
pub const WEATHER_XM_API_KEY: &str = "WEATHER_XM_API_KEY";

/// Secret carrying the Geoapify API key
pub const GEOAPIFY_API_KEY: &str = "GEOAPIFY_API_KEY";

/// Result body returned when discovery yields no active stations
pub const NO_ACTIVE_STATIONS: &str = "No active stations found in bbox.";

/// Error body used when an error carries no message
pub const UNKNOWN_ERROR: &str = "Unknown error";

pub const DEFAULT_WEATHERXM_ENDPOINT: &str = "https://pro.weatherxm.com/api/v1";
pub const DEFAULT_GEOAPIFY_ENDPOINT: &str = "https://api.geoapify.com/v1";
pub const DEFAULT_API_KEY_HEADER: &str = "X-API-KEY";
pub const DEFAULT_SAMPLE_SIZE: usize = 5;
pub const DEFAULT_ACTIVITY_FIELD: &str = "lastDayQod";
pub const DEFAULT_ACTIVITY_THRESHOLD: f64 = 0.0;
pub const DEFAULT_BIND: SocketAddr =
    SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::new(127, 0, 0, 1), 3000));
