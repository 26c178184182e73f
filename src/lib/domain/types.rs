//! Domain types shared by the tools, the HTTP collaborators and the transport layer.
//!
//! Everything here is created per invocation and dropped once the response
//! envelope has been produced.

use crate::constants::NO_ACTIVE_STATIONS;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Geographic bounding box in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoBound {
    pub min_lat: f64,
    pub min_lon: f64,
    pub max_lat: f64,
    pub max_lon: f64,
}

impl GeoBound {
    pub fn new(min_lat: f64, min_lon: f64, max_lat: f64, max_lon: f64) -> Self {
        Self {
            min_lat,
            min_lon,
            max_lat,
            max_lon,
        }
    }
}

/// Opaque bearer credential. `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// A discovered station that passed the activity predicate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Station {
    pub id: String,
    pub name: String,
    pub quality: f64,
}

impl Station {
    pub fn new(id: impl Into<String>, name: impl Into<String>, quality: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            quality,
        }
    }
}

/// Latest data fetched for one station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationReading {
    pub station_id: String,
    pub station_name: String,
    pub data: Value,
}

/// A per-station fetch that did not produce data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationFailure {
    pub station_id: String,
    #[serde(rename = "error")]
    pub reason: String,
}

/// Terminal state of a single fetch. Exactly one per selected station.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Success(StationReading),
    Failure(StationFailure),
}

impl FetchOutcome {
    pub fn success(station: &Station, data: Value) -> Self {
        Self::Success(StationReading {
            station_id: station.id.clone(),
            station_name: station.name.clone(),
            data,
        })
    }

    pub fn failure(station: &Station, reason: impl Into<String>) -> Self {
        Self::Failure(StationFailure {
            station_id: station.id.clone(),
            reason: reason.into(),
        })
    }

    pub fn station_id(&self) -> &str {
        match self {
            FetchOutcome::Success(reading) => &reading.station_id,
            FetchOutcome::Failure(failure) => &failure.station_id,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, FetchOutcome::Success(_))
    }
}

/// Aggregated result of one sampling run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationReport {
    pub bbox: GeoBound,
    pub successful: Vec<StationReading>,
    pub failed: Vec<StationFailure>,
}

impl StationReport {
    pub fn total(&self) -> usize {
        self.successful.len() + self.failed.len()
    }
}

/// Value returned by the station sampler tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SamplerOutput {
    Report(StationReport),
    Empty { message: String },
}

impl SamplerOutput {
    pub fn no_active_stations() -> Self {
        Self::Empty {
            message: NO_ACTIVE_STATIONS.to_string(),
        }
    }
}
