//! Bounding-box station sampler
//!
//! One invocation runs: discovery (once) → sampling (up to `k`) → concurrent
//! fetch (one per selected station, failures captured) → aggregation.
//!
//! - `executor` - the `weatherxm_stations` tool and its orchestration
//! - `sampler` - uniform selection without replacement
//! - `fanout` - fire-all-then-join-all fetch with per-station isolation
//! - `aggregate` - partition outcomes into the final report

pub mod aggregate;
pub mod executor;
pub mod fanout;
pub mod sampler;

pub use aggregate::aggregate;
pub use executor::StationSamplerTool;
pub use fanout::fetch_all;
pub use sampler::{sample, sample_with_rng};
