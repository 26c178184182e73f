//! # Application Module
//!
//! This module contains the core application logic of the sampler.
//!
//! ## Submodules
//!
//! - [`envelope`] - Decoding inbound `{args, secrets}` events and encoding response envelopes
//! - [`tooling`] - Tool trait, argument validation and the tool registry
//! - [`stations`] - Bounding-box discovery, sampling, concurrent fetch and aggregation
//! - [`geocode`] - Place name to bounding box lookup

pub mod envelope;
pub mod geocode;
pub mod stations;
pub mod tooling;
