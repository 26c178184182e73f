//! Sampling and activity settings for the station sampler tool.

use super::defaults;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

/// ```toml
/// [sampling]
/// sample_size = 5
/// activity_field = "lastDayQod"
/// activity_threshold = 0.0
/// fetch_timeout_ms = 8000
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SamplingConfig {
    #[serde(default = "defaults::sample_size")]
    pub sample_size: usize,
    #[serde(default = "defaults::activity_field")]
    pub activity_field: String,
    #[serde(default = "defaults::activity_threshold")]
    pub activity_threshold: f64,
    /// Per-station fetch timeout in milliseconds. Elapsed fetches become failures.
    #[serde(default)]
    pub fetch_timeout_ms: Option<u64>,
}

impl SamplingConfig {
    pub fn activity(&self) -> ActivityFilter {
        ActivityFilter::new(self.activity_field.clone(), self.activity_threshold)
    }

    pub fn fetch_timeout(&self) -> Option<Duration> {
        self.fetch_timeout_ms.map(Duration::from_millis)
    }
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            sample_size: defaults::sample_size(),
            activity_field: defaults::activity_field(),
            activity_threshold: defaults::activity_threshold(),
            fetch_timeout_ms: None,
        }
    }
}

/// Predicate deciding whether a discovered station is currently reporting.
///
/// A station is active when its `field` holds a number strictly greater than
/// `threshold`. A missing or non-numeric field counts as inactive.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityFilter {
    pub field: String,
    pub threshold: f64,
}

impl ActivityFilter {
    pub fn new(field: impl Into<String>, threshold: f64) -> Self {
        Self {
            field: field.into(),
            threshold,
        }
    }

    /// Quality metric of an active station, `None` when inactive.
    pub fn quality(&self, station: &Value) -> Option<f64> {
        station
            .get(&self.field)
            .and_then(Value::as_f64)
            .filter(|quality| *quality > self.threshold)
    }
}

impl Default for ActivityFilter {
    fn default() -> Self {
        SamplingConfig::default().activity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn positive_metric_is_active() {
        let filter = ActivityFilter::default();
        assert_eq!(filter.quality(&json!({"lastDayQod": 0.8})), Some(0.8));
    }

    #[test]
    fn zero_negative_and_missing_metrics_are_inactive() {
        let filter = ActivityFilter::default();
        assert_eq!(filter.quality(&json!({"lastDayQod": 0})), None);
        assert_eq!(filter.quality(&json!({"lastDayQod": -1.5})), None);
        assert_eq!(filter.quality(&json!({"id": "abc"})), None);
        assert_eq!(filter.quality(&json!({"lastDayQod": "0.9"})), None);
    }

    #[test]
    fn custom_field_and_threshold() {
        let filter = ActivityFilter::new("uptime", 0.5);
        assert_eq!(filter.quality(&json!({"uptime": 0.5})), None);
        assert_eq!(filter.quality(&json!({"uptime": 0.75})), Some(0.75));
    }
}
