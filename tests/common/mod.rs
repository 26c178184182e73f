// Shared test fixtures: in-process stand-ins for WeatherXM Pro and Geoapify.

#![allow(dead_code)]

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};
use station_sampler::ToolRegistry;
use station_sampler::application::envelope::RawEvent;
use station_sampler::config::AppConfig;
use std::collections::{HashMap, HashSet};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

pub const WEATHERXM_KEY: &str = "wxm-test-key";
pub const GEOAPIFY_KEY: &str = "geo-test-key";

// ============================================================================
// Upstream stub
// ============================================================================

#[derive(Default)]
pub struct Upstream {
    pub bounds_body: Mutex<Value>,
    pub bounds_status: Mutex<Option<StatusCode>>,
    pub failing: Mutex<HashSet<String>>,
    pub garbled: Mutex<HashSet<String>>,
    pub bounds_calls: AtomicUsize,
    pub latest_calls: AtomicUsize,
    pub geocode_calls: AtomicUsize,
    pub seen_keys: Mutex<Vec<String>>,
    pub bounds_queries: Mutex<Vec<HashMap<String, String>>>,
}

impl Upstream {
    pub fn with_stations(stations: Value) -> Arc<Self> {
        Self::with_bounds_body(json!({ "stations": stations }))
    }

    pub fn with_bounds_body(body: Value) -> Arc<Self> {
        let upstream = Self::default();
        *upstream.bounds_body.lock().expect("lock") = body;
        Arc::new(upstream)
    }

    pub fn fail_bounds(&self, status: StatusCode) {
        *self.bounds_status.lock().expect("lock") = Some(status);
    }

    pub fn fail_station(&self, id: &str) {
        self.failing.lock().expect("lock").insert(id.to_string());
    }

    /// Answer `/latest` for `id` with 200 and a body that is not JSON.
    pub fn garble_station(&self, id: &str) {
        self.garbled.lock().expect("lock").insert(id.to_string());
    }

    pub fn bounds_calls(&self) -> usize {
        self.bounds_calls.load(Ordering::SeqCst)
    }

    pub fn latest_calls(&self) -> usize {
        self.latest_calls.load(Ordering::SeqCst)
    }

    pub fn geocode_calls(&self) -> usize {
        self.geocode_calls.load(Ordering::SeqCst)
    }
}

async fn bounds(
    State(upstream): State<Arc<Upstream>>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    upstream.bounds_calls.fetch_add(1, Ordering::SeqCst);
    record_key(&upstream, &headers);
    upstream.bounds_queries.lock().expect("lock").push(query);

    let status = *upstream.bounds_status.lock().expect("lock");
    if let Some(status) = status {
        return status.into_response();
    }
    let body = upstream.bounds_body.lock().expect("lock").clone();
    Json(body).into_response()
}

async fn latest(
    State(upstream): State<Arc<Upstream>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    upstream.latest_calls.fetch_add(1, Ordering::SeqCst);
    record_key(&upstream, &headers);

    let failing = upstream.failing.lock().expect("lock").contains(&id);
    if failing {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    let garbled = upstream.garbled.lock().expect("lock").contains(&id);
    if garbled {
        return (StatusCode::OK, "not json").into_response();
    }
    Json(json!({ "station": id, "temperature": 21.5 })).into_response()
}

async fn geocode(
    State(upstream): State<Arc<Upstream>>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    upstream.geocode_calls.fetch_add(1, Ordering::SeqCst);

    if query.get("apiKey").map(String::as_str) != Some(GEOAPIFY_KEY) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    match query.get("text").map(String::as_str) {
        Some("Berlin") => Json(json!({
            "type": "FeatureCollection",
            "features": [
                { "properties": { "city": "Berlin" }, "bbox": [13.08, 52.33, 13.76, 52.67] }
            ]
        }))
        .into_response(),
        _ => Json(json!({ "type": "FeatureCollection", "features": [] })).into_response(),
    }
}

fn record_key(upstream: &Upstream, headers: &HeaderMap) {
    if let Some(key) = headers.get("x-api-key").and_then(|v| v.to_str().ok()) {
        upstream.seen_keys.lock().expect("lock").push(key.to_string());
    }
}

/// Serve the stub on an ephemeral port and return its base URL.
pub async fn spawn_upstream(upstream: Arc<Upstream>) -> String {
    let app = Router::new()
        .route("/stations/bounds", get(bounds))
        .route("/stations/{id}/latest", get(latest))
        .route("/geocode/search", get(geocode))
        .with_state(upstream);

    let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .expect("bind stub");
    let addr = listener.local_addr().expect("stub addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub server");
    });
    format!("http://{addr}")
}

// ============================================================================
// Helpers
// ============================================================================

pub fn config_for(base_url: &str) -> AppConfig {
    let mut config = AppConfig::default();
    config.weatherxm.endpoint = base_url.to_string();
    config.geoapify.endpoint = base_url.to_string();
    config
}

pub fn registry_for(base_url: &str) -> ToolRegistry {
    ToolRegistry::from_config(&config_for(base_url), reqwest::Client::new())
}

pub fn station(id: &str, quality: f64) -> Value {
    json!({ "id": id, "name": format!("Station {id}"), "lastDayQod": quality })
}

pub fn event(args: Value, secrets: Value) -> RawEvent {
    RawEvent::new(json!({ "args": args, "secrets": secrets }).to_string())
}

pub fn bbox_args() -> Value {
    json!({ "min_lat": 10, "min_lon": 10, "max_lat": 20, "max_lon": 20 })
}

pub fn weatherxm_secrets() -> Value {
    json!({ "WEATHER_XM_API_KEY": WEATHERXM_KEY })
}
