//! Geoapify geocoding client

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info};

use crate::config::GeoapifyConfig;
use crate::domain::Credential;
use crate::infrastructure::http::{HttpClientBase, HttpError};

/// Service label used in logs and error messages.
pub const SERVICE: &str = "Geoapify";

#[derive(Debug, Clone)]
pub struct GeoapifyClient {
    base: HttpClientBase,
}

impl GeoapifyClient {
    pub fn new(endpoint: impl Into<String>, http: Client) -> Self {
        Self {
            base: HttpClientBase::new(SERVICE, endpoint, http),
        }
    }

    pub fn from_config(config: &GeoapifyConfig, http: Client) -> Self {
        Self::new(config.endpoint.clone(), http)
    }

    /// Bounding box of the best match for `location`, `None` when nothing matched.
    ///
    /// The box is returned as delivered: `[min_lon, min_lat, max_lon, max_lat]`.
    pub async fn search_bbox(
        &self,
        location: &str,
        credential: &Credential,
    ) -> Result<Option<Value>, HttpError> {
        let url = self.base.build_url("geocode/search");
        info!(location, "Geocoding location");

        let body = self
            .base
            .get_with_query_key(
                &url,
                &[("text", location.to_string())],
                "apiKey",
                credential.expose(),
            )
            .await?;

        let bbox = first_feature_bbox(&body);
        debug!(found = bbox.is_some(), "Geocoding finished");
        Ok(bbox)
    }
}

fn first_feature_bbox(body: &Value) -> Option<Value> {
    body.get("features")
        .and_then(Value::as_array)
        .and_then(|features| features.first())
        .and_then(|feature| feature.get("bbox"))
        .filter(|bbox| !bbox.is_null())
        .cloned()
}
