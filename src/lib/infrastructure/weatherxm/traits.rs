use crate::domain::{Credential, GeoBound, Station};
use crate::infrastructure::http::HttpError;
use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Discovery failures. Per-station fetch failures use [`HttpError`] directly.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Http(#[from] HttpError),
    #[error("response is missing the '{field}' list")]
    MissingField { field: &'static str },
}

/// Source of stations inside a bounding box and of their latest readings.
#[async_trait]
pub trait StationCatalog: Send + Sync {
    /// All stations inside `bound` that pass the activity predicate.
    async fn discover(
        &self,
        bound: &GeoBound,
        credential: &Credential,
    ) -> Result<Vec<Station>, CatalogError>;

    /// Latest reading of one station, as returned by the upstream.
    async fn fetch_latest(
        &self,
        station: &Station,
        credential: &Credential,
    ) -> Result<Value, HttpError>;
}
