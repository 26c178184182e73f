//! Base HTTP client with shared logic

use super::error::HttpError;
use reqwest::{Client, RequestBuilder, Url};
use serde_json::Value;

/// Base HTTP client with shared functionality
#[derive(Debug, Clone)]
pub struct HttpClientBase {
    pub service: String,
    pub endpoint: String,
    pub http: Client,
}

impl HttpClientBase {
    pub fn new(service: impl Into<String>, endpoint: impl Into<String>, http: Client) -> Self {
        Self {
            service: service.into(),
            endpoint: endpoint.into(),
            http,
        }
    }

    /// Build URL from endpoint and path
    pub fn build_url(&self, path: &str) -> String {
        let base = self.endpoint.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    /// Build URL from endpoint and percent-encoded path segments
    pub fn build_segment_url(&self, segments: &[&str]) -> Result<String, HttpError> {
        let mut url = Url::parse(self.endpoint.trim_end_matches('/'))
            .map_err(|_| HttpError::invalid_url(&self.endpoint))?;
        url.path_segments_mut()
            .map_err(|()| HttpError::invalid_url(&self.endpoint))?
            .pop_if_empty()
            .extend(segments);
        Ok(url.to_string())
    }

    /// GET JSON, authenticating with a request header
    pub async fn get_with_header(
        &self,
        url: &str,
        query: &[(&str, String)],
        header: &str,
        secret: &str,
    ) -> Result<Value, HttpError> {
        let request = self.http.get(url).query(query).header(header, secret);
        Self::send_json(request).await
    }

    /// GET JSON with the key carried as a query parameter (for Geoapify)
    pub async fn get_with_query_key(
        &self,
        url: &str,
        query: &[(&str, String)],
        key_param: &str,
        secret: &str,
    ) -> Result<Value, HttpError> {
        let request = self
            .http
            .get(url)
            .query(query)
            .query(&[(key_param, secret)]);
        Self::send_json(request).await
    }

    async fn send_json(request: RequestBuilder) -> Result<Value, HttpError> {
        let response = request.send().await.map_err(HttpError::network)?;
        let status = response.status();
        if !status.is_success() {
            return Err(HttpError::status(status));
        }
        let bytes = response.bytes().await.map_err(HttpError::network)?;
        serde_json::from_slice(&bytes).map_err(HttpError::invalid_body)
    }
}
