//! `geocode_bbox`: resolve a place name to a bounding box.

use crate::application::tooling::args::{require_secret, require_string};
use crate::application::tooling::{Secrets, Tool, ToolArgs, ToolError};
use crate::config::AppConfig;
use crate::constants::{GEOAPIFY_API_KEY, GEOCODE_TOOL};
use crate::infrastructure::geoapify::{self, GeoapifyClient};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

const DESCRIPTION: &str = "Look up a place name with Geoapify and return its bounding box \
    as [min_lon, min_lat, max_lon, max_lat], or null when nothing matched.";

pub struct GeocodeTool {
    client: GeoapifyClient,
}

impl GeocodeTool {
    pub fn new(client: GeoapifyClient) -> Self {
        Self { client }
    }

    pub fn from_config(config: &AppConfig, http: Client) -> Self {
        Self::new(GeoapifyClient::from_config(&config.geoapify, http))
    }
}

#[async_trait]
impl Tool for GeocodeTool {
    fn name(&self) -> &str {
        GEOCODE_TOOL
    }

    fn description(&self) -> &str {
        DESCRIPTION
    }

    async fn call(&self, args: &ToolArgs, secrets: &Secrets) -> Result<Value, ToolError> {
        let location = require_string(args, "location", "Missing location")?;
        let credential = require_secret(secrets, GEOAPIFY_API_KEY)?;

        let invocation_id = Uuid::new_v4();
        info!(%invocation_id, tool = GEOCODE_TOOL, "Geocoding started");

        let bbox = self
            .client
            .search_bbox(location, &credential)
            .await
            .map_err(|err| ToolError::from_http(geoapify::SERVICE, err))?;

        Ok(bbox.unwrap_or(Value::Null))
    }
}
