//! Development routes: build an event from the query string and the
//! environment-loaded secrets, then run the tool like any other invocation.

use super::super::dto::{GeocodeQuery, StationsQuery};
use super::super::state::ServerState;
use super::envelope_response;
use crate::application::envelope::{ParsedEvent, RawEvent};
use crate::application::tooling::ToolArgs;
use crate::constants::{GEOCODE_TOOL, STATIONS_TOOL};
use axum::extract::{Query, State};
use axum::response::Response;
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

#[utoipa::path(
    get,
    path = "/stations",
    tag = "dev",
    params(StationsQuery),
    responses(
        (status = 200, description = "Station report or no-active-stations message"),
        (status = 500, description = "Error message as a JSON string")
    )
)]
pub async fn stations_handler(
    State(state): State<Arc<ServerState>>,
    Query(query): Query<StationsQuery>,
) -> Response {
    let args: ToolArgs = query
        .numeric_pairs()
        .into_iter()
        .map(|(field, value)| (field.to_string(), Value::from(value)))
        .collect();
    info!(arg_count = args.len(), "Received /stations request");
    run(&state, STATIONS_TOOL, args).await
}

#[utoipa::path(
    get,
    path = "/geocode",
    tag = "dev",
    params(GeocodeQuery),
    responses(
        (status = 200, description = "Bounding box array or null"),
        (status = 500, description = "Error message as a JSON string")
    )
)]
pub async fn geocode_handler(
    State(state): State<Arc<ServerState>>,
    Query(query): Query<GeocodeQuery>,
) -> Response {
    let mut args = ToolArgs::new();
    if let Some(location) = query.location {
        args.insert("location".to_string(), Value::String(location));
    }
    info!("Received /geocode request");
    run(&state, GEOCODE_TOOL, args).await
}

async fn run(state: &ServerState, tool: &str, args: ToolArgs) -> Response {
    let event = ParsedEvent {
        args,
        secrets: state.dev_secrets().clone(),
    };
    let envelope = state
        .registry()
        .handle(tool, &RawEvent::from_parsed(&event))
        .await;
    envelope_response(envelope)
}
