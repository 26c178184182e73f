use super::super::dto::ToolListResponse;
use super::super::state::ServerState;
use super::envelope_response;
use crate::application::envelope::RawEvent;
use axum::Json;
use axum::extract::{Path, State};
use axum::response::Response;
use std::sync::Arc;
use tracing::{debug, info};

#[utoipa::path(
    get,
    path = "/tools",
    tag = "tools",
    responses(
        (status = 200, description = "Registered tools", body = ToolListResponse)
    )
)]
pub async fn list_tools_handler(State(state): State<Arc<ServerState>>) -> Json<ToolListResponse> {
    let tools = state.registry().descriptors();
    debug!(tool_count = tools.len(), "Serving /tools request");
    Json(ToolListResponse { tools })
}

#[utoipa::path(
    post,
    path = "/tools/{name}",
    tag = "tools",
    params(("name" = String, Path, description = "Registered tool name")),
    request_body(content = String, description = "Event body: {\"args\": {...}, \"secrets\": {...}}", content_type = "application/json"),
    responses(
        (status = 200, description = "Tool result as JSON"),
        (status = 500, description = "Error message as a JSON string")
    )
)]
pub async fn invoke_tool_handler(
    State(state): State<Arc<ServerState>>,
    Path(name): Path<String>,
    body: String,
) -> Response {
    info!(tool = %name, "Received tool invocation");
    let envelope = state.registry().handle(&name, &RawEvent::new(body)).await;
    envelope_response(envelope)
}
