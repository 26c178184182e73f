use crate::application::tooling::ToolDescriptor;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Serialize, ToSchema)]
pub struct ToolListResponse {
    pub tools: Vec<ToolDescriptor>,
}

/// Query of the development `/stations` route. Values that do not parse as
/// numbers are dropped, so the tool reports them as missing.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StationsQuery {
    pub min_lat: Option<String>,
    pub min_lon: Option<String>,
    pub max_lat: Option<String>,
    pub max_lon: Option<String>,
}

impl StationsQuery {
    pub fn numeric_pairs(&self) -> Vec<(&'static str, f64)> {
        [
            ("min_lat", &self.min_lat),
            ("min_lon", &self.min_lon),
            ("max_lat", &self.max_lat),
            ("max_lon", &self.max_lon),
        ]
        .into_iter()
        .filter_map(|(field, raw)| {
            raw.as_deref()
                .and_then(|raw| raw.trim().parse::<f64>().ok())
                .filter(|value| value.is_finite())
                .map(|value| (field, value))
        })
        .collect()
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GeocodeQuery {
    pub location: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unparsable_numbers_are_dropped() {
        let query = StationsQuery {
            min_lat: Some("10".into()),
            min_lon: Some("abc".into()),
            max_lat: Some(" 20.5 ".into()),
            max_lon: None,
        };
        assert_eq!(
            query.numeric_pairs(),
            vec![("min_lat", 10.0), ("max_lat", 20.5)]
        );
    }
}
