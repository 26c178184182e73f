use super::docs::ApiDoc;
use super::error::ServerError;
use super::routes;
use super::state::ServerState;
use axum::http::{HeaderValue, Method};
use axum::routing::{get, post};
use axum::{Json, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::{info, warn};
use utoipa::OpenApi;

/// Application router. An empty origin list allows any origin.
pub fn build_router(state: ServerState, cors_origins: &[String]) -> Router {
    Router::new()
        .route("/api-doc/openapi.json", get(openapi_handler))
        .route("/tools", get(routes::tools::list_tools_handler))
        .route("/tools/{name}", post(routes::tools::invoke_tool_handler))
        .route("/stations", get(routes::dev::stations_handler))
        .route("/geocode", get(routes::dev::geocode_handler))
        .layer(cors_layer(cors_origins))
        .with_state(Arc::new(state))
}

pub(super) async fn serve(
    state: ServerState,
    addr: SocketAddr,
    cors_origins: &[String],
) -> Result<(), ServerError> {
    info!(%addr, "Binding REST server");
    let app = build_router(state, cors_origins);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    info!(%addr, "REST server ready to accept connections");

    axum::serve(listener, app.into_make_service())
        .await
        .map_err(ServerError::Serve)
}

async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    if origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let values: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(values))
}
