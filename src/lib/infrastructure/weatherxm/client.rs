//! WeatherXM Pro client implementation

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info, warn};

use super::SERVICE;
use super::traits::{CatalogError, StationCatalog};
use crate::config::{ActivityFilter, SamplingConfig, WeatherXmConfig};
use crate::domain::{Credential, GeoBound, Station};
use crate::infrastructure::http::{HttpClientBase, HttpError};

const STATIONS_FIELD: &str = "stations";

/// WeatherXM Pro client: `stations/bounds` discovery and `stations/{id}/latest` fetch.
#[derive(Debug, Clone)]
pub struct WeatherXmClient {
    base: HttpClientBase,
    api_key_header: String,
    activity: ActivityFilter,
}

impl WeatherXmClient {
    pub fn new(endpoint: impl Into<String>, http: Client) -> Self {
        let defaults = WeatherXmConfig::default();
        Self {
            base: HttpClientBase::new(SERVICE, endpoint, http),
            api_key_header: defaults.api_key_header,
            activity: ActivityFilter::default(),
        }
    }

    pub fn from_config(config: &WeatherXmConfig, sampling: &SamplingConfig, http: Client) -> Self {
        Self {
            base: HttpClientBase::new(SERVICE, config.endpoint.clone(), http),
            api_key_header: config.api_key_header.clone(),
            activity: sampling.activity(),
        }
    }

    pub fn with_activity(mut self, activity: ActivityFilter) -> Self {
        self.activity = activity;
        self
    }

    /// Keep the stations that pass the activity predicate.
    fn active_stations(&self, stations: &[Value]) -> Vec<Station> {
        stations
            .iter()
            .filter_map(|raw| {
                let quality = self.activity.quality(raw)?;
                let Some(id) = station_id(raw) else {
                    warn!("Skipping active station without an id");
                    return None;
                };
                let name = raw
                    .get("name")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string();
                Some(Station { id, name, quality })
            })
            .collect()
    }
}

#[async_trait]
impl StationCatalog for WeatherXmClient {
    async fn discover(
        &self,
        bound: &GeoBound,
        credential: &Credential,
    ) -> Result<Vec<Station>, CatalogError> {
        let url = self.base.build_url("stations/bounds");
        let query = [
            ("min_lat", bound.min_lat.to_string()),
            ("max_lat", bound.max_lat.to_string()),
            ("min_lon", bound.min_lon.to_string()),
            ("max_lon", bound.max_lon.to_string()),
        ];

        info!(
            min_lat = bound.min_lat,
            min_lon = bound.min_lon,
            max_lat = bound.max_lat,
            max_lon = bound.max_lon,
            "Discovering stations in bounding box"
        );

        let body = self
            .base
            .get_with_header(&url, &query, &self.api_key_header, credential.expose())
            .await?;

        let stations = body
            .get(STATIONS_FIELD)
            .and_then(Value::as_array)
            .ok_or(CatalogError::MissingField {
                field: STATIONS_FIELD,
            })?;

        let active = self.active_stations(stations);
        debug!(
            discovered = stations.len(),
            active = active.len(),
            field = self.activity.field.as_str(),
            "Filtered discovered stations by activity"
        );
        Ok(active)
    }

    async fn fetch_latest(
        &self,
        station: &Station,
        credential: &Credential,
    ) -> Result<Value, HttpError> {
        let url = self
            .base
            .build_segment_url(&["stations", station.id.as_str(), "latest"])?;
        debug!(station_id = station.id.as_str(), "Fetching latest station data");
        self.base
            .get_with_header(&url, &[], &self.api_key_header, credential.expose())
            .await
    }
}

fn station_id(raw: &Value) -> Option<String> {
    match raw.get("id")? {
        Value::String(id) if !id.is_empty() => Some(id.clone()),
        Value::Number(id) => Some(id.to_string()),
        _ => None,
    }
}
