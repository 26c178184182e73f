use crate::domain::{Credential, FetchOutcome, Station};
use crate::infrastructure::http::HttpError;
use crate::infrastructure::weatherxm::StationCatalog;
use futures::FutureExt;
use futures::future::join_all;
use std::panic::AssertUnwindSafe;
use std::time::Duration;
use tracing::{debug, error, warn};

const PANIC_REASON: &str = "fetch task panicked";

/// Fetch the latest data of every selected station concurrently.
///
/// All fetches are started before any is awaited, and the call returns once
/// each has reached a terminal state. A failing fetch (transport error,
/// non-2xx, undecodable body, timeout or panic) becomes a `Failure` for that
/// station only. The output always has one outcome per selected station.
pub async fn fetch_all(
    catalog: &dyn StationCatalog,
    selected: &[Station],
    credential: &Credential,
    per_fetch_timeout: Option<Duration>,
) -> Vec<FetchOutcome> {
    let fetches = selected
        .iter()
        .map(|station| fetch_one(catalog, station, credential, per_fetch_timeout));
    join_all(fetches).await
}

async fn fetch_one(
    catalog: &dyn StationCatalog,
    station: &Station,
    credential: &Credential,
    per_fetch_timeout: Option<Duration>,
) -> FetchOutcome {
    let fetch = AssertUnwindSafe(catalog.fetch_latest(station, credential)).catch_unwind();
    let result = match per_fetch_timeout {
        Some(limit) => match tokio::time::timeout(limit, fetch).await {
            Ok(result) => result,
            Err(_elapsed) => Ok(Err(HttpError::Timeout)),
        },
        None => fetch.await,
    };

    match result {
        Ok(Ok(data)) => {
            debug!(station_id = station.id.as_str(), "Station fetch succeeded");
            FetchOutcome::success(station, data)
        }
        Ok(Err(err)) => {
            warn!(station_id = station.id.as_str(), error = %err, "Station fetch failed");
            FetchOutcome::failure(station, err.to_string())
        }
        Err(_panic) => {
            error!(station_id = station.id.as_str(), "Station fetch panicked");
            FetchOutcome::failure(station, PANIC_REASON)
        }
    }
}
