//! Shared HTTP plumbing for the upstream collaborators.
//!
//! # Structure
//! - `base` - GET-and-decode helper shared by the WeatherXM and Geoapify clients
//! - `error` - per-call transport classification

pub mod base;
pub mod error;

pub use base::HttpClientBase;
pub use error::HttpError;

use crate::config::HttpConfig;
use reqwest::Client;
use std::time::Duration;

/// Build the pooled client shared by every upstream call of a process.
pub fn build_client(config: &HttpConfig) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder().user_agent(config.user_agent.clone());
    if let Some(timeout_ms) = config.timeout_ms {
        builder = builder.timeout(Duration::from_millis(timeout_ms));
    }
    builder.build()
}
