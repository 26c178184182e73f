//! WeatherXM Pro collaborator
//!
//! - `traits` - the `StationCatalog` seam used by the station sampler
//! - `client` - reqwest-backed implementation

pub mod client;
pub mod traits;

pub use client::WeatherXmClient;
pub use traits::{CatalogError, StationCatalog};

/// Service label used in logs and error messages.
pub const SERVICE: &str = "WeatherXM";
