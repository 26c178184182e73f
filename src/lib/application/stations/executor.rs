use super::aggregate::aggregate;
use super::fanout::fetch_all;
use super::sampler::sample;
use crate::application::tooling::args::{require_number, require_secret};
use crate::application::tooling::{Secrets, Tool, ToolArgs, ToolError};
use crate::config::AppConfig;
use crate::constants::{DEFAULT_SAMPLE_SIZE, STATIONS_TOOL, WEATHER_XM_API_KEY};
use crate::domain::{Credential, GeoBound, SamplerOutput};
use crate::infrastructure::weatherxm::{self, CatalogError, StationCatalog, WeatherXmClient};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};
use uuid::Uuid;

const DESCRIPTION: &str = "Discover active WeatherXM stations inside a bounding box, \
    sample a bounded number of them and fetch their latest readings concurrently.";

/// The `weatherxm_stations` tool.
pub struct StationSamplerTool {
    catalog: Arc<dyn StationCatalog>,
    sample_size: usize,
    fetch_timeout: Option<Duration>,
}

impl StationSamplerTool {
    pub fn new(catalog: Arc<dyn StationCatalog>) -> Self {
        Self {
            catalog,
            sample_size: DEFAULT_SAMPLE_SIZE,
            fetch_timeout: None,
        }
    }

    pub fn from_config(config: &AppConfig, http: Client) -> Self {
        let client = WeatherXmClient::from_config(&config.weatherxm, &config.sampling, http);
        Self::new(Arc::new(client))
            .with_sample_size(config.sampling.sample_size)
            .with_fetch_timeout(config.sampling.fetch_timeout())
    }

    pub fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = sample_size;
        self
    }

    pub fn with_fetch_timeout(mut self, fetch_timeout: Option<Duration>) -> Self {
        self.fetch_timeout = fetch_timeout;
        self
    }

    /// Read the four bounding box values. Each must be present and numeric.
    pub fn parse_bound(args: &ToolArgs) -> Result<GeoBound, ToolError> {
        Ok(GeoBound {
            min_lat: require_number(args, "min_lat", &["minLat"])?,
            min_lon: require_number(args, "min_lon", &["minLon"])?,
            max_lat: require_number(args, "max_lat", &["maxLat"])?,
            max_lon: require_number(args, "max_lon", &["maxLon"])?,
        })
    }

    /// Discover, sample, fetch and aggregate for one validated bound.
    pub async fn execute(
        &self,
        bound: GeoBound,
        credential: &Credential,
    ) -> Result<SamplerOutput, ToolError> {
        let active = self
            .catalog
            .discover(&bound, credential)
            .await
            .map_err(discovery_error)?;

        if active.is_empty() {
            info!("No active stations in bounding box");
            return Ok(SamplerOutput::no_active_stations());
        }

        let active_count = active.len();
        let selected = sample(active, self.sample_size);
        debug!(
            active = active_count,
            selected = selected.len(),
            "Sampled stations for fetch"
        );

        let outcomes = fetch_all(
            self.catalog.as_ref(),
            &selected,
            credential,
            self.fetch_timeout,
        )
        .await;
        let report = aggregate(bound, outcomes);

        info!(
            successful = report.successful.len(),
            failed = report.failed.len(),
            "Station sampling finished"
        );
        Ok(SamplerOutput::Report(report))
    }
}

#[async_trait]
impl Tool for StationSamplerTool {
    fn name(&self) -> &str {
        STATIONS_TOOL
    }

    fn description(&self) -> &str {
        DESCRIPTION
    }

    async fn call(&self, args: &ToolArgs, secrets: &Secrets) -> Result<Value, ToolError> {
        let bound = Self::parse_bound(args)?;
        let credential = require_secret(secrets, WEATHER_XM_API_KEY)?;

        let invocation_id = Uuid::new_v4();
        info!(%invocation_id, tool = STATIONS_TOOL, "Station sampling started");

        let output = self.execute(bound, &credential).await?;
        Ok(serde_json::to_value(output)?)
    }
}

fn discovery_error(err: CatalogError) -> ToolError {
    match err {
        CatalogError::Http(err) => ToolError::from_http(weatherxm::SERVICE, err),
        CatalogError::MissingField { .. } => ToolError::malformed_response(
            weatherxm::SERVICE,
            "No stations data found in response",
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Station, StationReport};
    use crate::infrastructure::http::HttpError;
    use reqwest::StatusCode;
    use serde_json::json;
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingCatalog {
        discovered: Result<Vec<Station>, StatusCode>,
        failing: HashSet<String>,
        discover_calls: AtomicUsize,
        fetch_calls: AtomicUsize,
    }

    impl CountingCatalog {
        fn with_stations(ids: &[&str]) -> Self {
            Self {
                discovered: Ok(ids
                    .iter()
                    .map(|id| Station::new(*id, format!("Station {id}"), 1.0))
                    .collect()),
                failing: HashSet::new(),
                discover_calls: AtomicUsize::new(0),
                fetch_calls: AtomicUsize::new(0),
            }
        }

        fn failing(mut self, id: &str) -> Self {
            self.failing.insert(id.to_string());
            self
        }

        fn discovery_status(status: StatusCode) -> Self {
            let mut catalog = Self::with_stations(&[]);
            catalog.discovered = Err(status);
            catalog
        }
    }

    #[async_trait]
    impl StationCatalog for CountingCatalog {
        async fn discover(
            &self,
            _bound: &GeoBound,
            _credential: &Credential,
        ) -> Result<Vec<Station>, CatalogError> {
            self.discover_calls.fetch_add(1, Ordering::SeqCst);
            match &self.discovered {
                Ok(stations) => Ok(stations.clone()),
                Err(status) => Err(HttpError::status(*status).into()),
            }
        }

        async fn fetch_latest(
            &self,
            station: &Station,
            _credential: &Credential,
        ) -> Result<Value, HttpError> {
            self.fetch_calls.fetch_add(1, Ordering::SeqCst);
            if self.failing.contains(&station.id) {
                Err(HttpError::status(StatusCode::INTERNAL_SERVER_ERROR))
            } else {
                Ok(json!({"station": station.id}))
            }
        }
    }

    fn bound_args() -> ToolArgs {
        json!({"min_lat": 10, "min_lon": 10, "max_lat": 20, "max_lon": 20})
            .as_object()
            .cloned()
            .expect("object")
    }

    fn secrets() -> Secrets {
        Secrets::from([(WEATHER_XM_API_KEY.to_string(), "key".to_string())])
    }

    fn report(output: SamplerOutput) -> StationReport {
        match output {
            SamplerOutput::Report(report) => report,
            SamplerOutput::Empty { message } => panic!("unexpected sentinel: {message}"),
        }
    }

    #[tokio::test]
    async fn report_cardinality_is_min_of_k_and_active() {
        for active in [1usize, 3, 5, 12] {
            let ids: Vec<String> = (0..active).map(|i| format!("S{i}")).collect();
            let id_refs: Vec<&str> = ids.iter().map(String::as_str).collect();
            let catalog = Arc::new(CountingCatalog::with_stations(&id_refs));
            let tool = StationSamplerTool::new(catalog.clone());

            let output = tool
                .execute(GeoBound::new(10.0, 10.0, 20.0, 20.0), &Credential::new("k"))
                .await
                .expect("report");

            let report = report(output);
            assert_eq!(report.total(), active.min(5));
            assert_eq!(catalog.fetch_calls.load(Ordering::SeqCst), active.min(5));
        }
    }

    #[tokio::test]
    async fn partial_failure_is_reported_inside_success() {
        let catalog = Arc::new(CountingCatalog::with_stations(&["A", "B", "C"]).failing("B"));
        let tool = StationSamplerTool::new(catalog);

        let value = tool.call(&bound_args(), &secrets()).await.expect("success");
        let report: StationReport = serde_json::from_value(value).expect("report shape");

        let mut ok: Vec<_> = report.successful.iter().map(|r| r.station_id.clone()).collect();
        ok.sort();
        assert_eq!(ok, vec!["A", "C"]);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].station_id, "B");
        assert_eq!(report.failed[0].reason, "500 Internal Server Error");
        assert_eq!(report.bbox, GeoBound::new(10.0, 10.0, 20.0, 20.0));
    }

    #[tokio::test]
    async fn zero_active_stations_short_circuits() {
        let catalog = Arc::new(CountingCatalog::with_stations(&[]));
        let tool = StationSamplerTool::new(catalog.clone());

        let value = tool.call(&bound_args(), &secrets()).await.expect("sentinel");

        assert_eq!(value, json!({"message": "No active stations found in bbox."}));
        assert_eq!(catalog.discover_calls.load(Ordering::SeqCst), 1);
        assert_eq!(catalog.fetch_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn missing_argument_fails_before_discovery() {
        let catalog = Arc::new(CountingCatalog::with_stations(&["A"]));
        let tool = StationSamplerTool::new(catalog.clone());
        let mut args = bound_args();
        args.remove("min_lat");

        let err = tool.call(&args, &secrets()).await.unwrap_err();

        assert_eq!(err.field(), Some("min_lat"));
        assert!(err.to_string().contains("min_lat"));
        assert_eq!(catalog.discover_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn missing_credential_fails_before_discovery() {
        let catalog = Arc::new(CountingCatalog::with_stations(&["A"]));
        let tool = StationSamplerTool::new(catalog.clone());

        let err = tool.call(&bound_args(), &Secrets::new()).await.unwrap_err();

        assert_eq!(err.to_string(), "Missing WEATHER_XM_API_KEY");
        assert_eq!(catalog.discover_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn discovery_status_error_aborts_invocation() {
        let catalog = Arc::new(CountingCatalog::discovery_status(StatusCode::UNAUTHORIZED));
        let tool = StationSamplerTool::new(catalog.clone());

        let err = tool.call(&bound_args(), &secrets()).await.unwrap_err();

        assert_eq!(err.to_string(), "WeatherXM API error: 401 Unauthorized");
        assert_eq!(catalog.fetch_calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn description_does_not_pin_sample_size() {
        let tool = StationSamplerTool::new(Arc::new(CountingCatalog::with_stations(&[])));
        assert!(!tool.description().contains("five"));
        assert!(tool.description().contains("bounded"));
    }

    #[test]
    fn missing_stations_field_maps_to_original_message() {
        let err = discovery_error(CatalogError::MissingField { field: "stations" });
        assert_eq!(err.to_string(), "No stations data found in response");
    }

    #[test]
    fn camel_case_bound_aliases_are_accepted() {
        let args = json!({"minLat": 1, "minLon": 2, "maxLat": 3, "maxLon": 4})
            .as_object()
            .cloned()
            .expect("object");
        let bound = StationSamplerTool::parse_bound(&args).expect("bound");
        assert_eq!(bound, GeoBound::new(1.0, 2.0, 3.0, 4.0));
    }
}
