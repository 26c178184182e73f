//! REST surface over the tool registry.
//!
//! `POST /tools/{name}` takes a raw event body and answers with the envelope
//! status and body. The `/stations` and `/geocode` routes are a development
//! harness that injects secrets loaded from the environment.

mod docs;
mod dto;
mod error;
mod router;
mod routes;
mod state;

pub use docs::ApiDoc;
pub use dto::{GeocodeQuery, StationsQuery, ToolListResponse};
pub use error::ServerError;
pub use router::build_router;
pub use state::ServerState;

use std::net::SocketAddr;

pub async fn serve(
    state: ServerState,
    addr: SocketAddr,
    cors_origins: &[String],
) -> Result<(), ServerError> {
    router::serve(state, addr, cors_origins).await
}
