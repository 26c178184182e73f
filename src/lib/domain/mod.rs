pub mod types;

pub use types::{
    Credential, FetchOutcome, GeoBound, SamplerOutput, Station, StationFailure, StationReading,
    StationReport,
};
