use crate::constants::{
    DEFAULT_ACTIVITY_FIELD, DEFAULT_ACTIVITY_THRESHOLD, DEFAULT_API_KEY_HEADER, DEFAULT_BIND,
    DEFAULT_GEOAPIFY_ENDPOINT, DEFAULT_SAMPLE_SIZE, DEFAULT_WEATHERXM_ENDPOINT,
};

pub fn weatherxm_endpoint() -> String {
    DEFAULT_WEATHERXM_ENDPOINT.to_string()
}

pub fn geoapify_endpoint() -> String {
    DEFAULT_GEOAPIFY_ENDPOINT.to_string()
}

pub fn api_key_header() -> String {
    DEFAULT_API_KEY_HEADER.to_string()
}

pub fn sample_size() -> usize {
    DEFAULT_SAMPLE_SIZE
}

pub fn activity_field() -> String {
    DEFAULT_ACTIVITY_FIELD.to_string()
}

pub fn activity_threshold() -> f64 {
    DEFAULT_ACTIVITY_THRESHOLD
}

pub fn user_agent() -> String {
    format!("station-sampler/{}", env!("CARGO_PKG_VERSION"))
}

pub fn bind() -> String {
    DEFAULT_BIND.to_string()
}
