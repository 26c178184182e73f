use crate::domain::{FetchOutcome, GeoBound, StationReport};

/// Partition outcomes into successes and failures, keeping production order
/// within each list.
pub fn aggregate(bound: GeoBound, outcomes: Vec<FetchOutcome>) -> StationReport {
    let mut successful = Vec::new();
    let mut failed = Vec::new();
    for outcome in outcomes {
        match outcome {
            FetchOutcome::Success(reading) => successful.push(reading),
            FetchOutcome::Failure(failure) => failed.push(failure),
        }
    }
    StationReport {
        bbox: bound,
        successful,
        failed,
    }
}
