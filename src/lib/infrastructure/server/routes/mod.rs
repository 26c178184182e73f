pub mod dev;
pub mod tools;

use crate::application::envelope::ResponseEnvelope;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

/// Mirror a response envelope onto the HTTP response.
pub(super) fn envelope_response(envelope: ResponseEnvelope) -> Response {
    let status =
        StatusCode::from_u16(envelope.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        envelope.body,
    )
        .into_response()
}
