//! Infrastructure: HTTP collaborators and the REST surface.
//!
//! # Structure
//! - `http` - shared client construction, GET-and-decode helper, error classification
//! - `weatherxm` - station discovery and per-station latest data
//! - `geoapify` - place name geocoding
//! - `server` - axum REST server exposing the tool registry

pub mod geoapify;
pub mod http;
pub mod server;
pub mod weatherxm;
