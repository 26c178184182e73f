use reqwest::StatusCode;
use thiserror::Error;

/// Outcome classification for a single upstream HTTP call.
///
/// The `Display` output doubles as the per-station failure reason, so the
/// status variant renders exactly as `"<code> <reason phrase>"`.
#[derive(Debug, Error)]
pub enum HttpError {
    #[error("{status} {status_text}")]
    Status { status: u16, status_text: String },
    #[error("timeout")]
    Timeout,
    #[error("{source}")]
    Network {
        #[source]
        source: reqwest::Error,
    },
    #[error("invalid request url '{url}'")]
    InvalidUrl { url: String },
    #[error("invalid response body: {source}")]
    InvalidBody {
        #[source]
        source: serde_json::Error,
    },
}

impl HttpError {
    pub fn status(status: StatusCode) -> Self {
        Self::Status {
            status: status.as_u16(),
            status_text: status
                .canonical_reason()
                .unwrap_or("Unknown Status")
                .to_string(),
        }
    }

    /// The request URL is stripped: Geoapify carries its key in the query.
    pub fn network(source: reqwest::Error) -> Self {
        if source.is_timeout() {
            Self::Timeout
        } else {
            Self::Network {
                source: source.without_url(),
            }
        }
    }

    pub fn invalid_url(url: impl Into<String>) -> Self {
        Self::InvalidUrl { url: url.into() }
    }

    pub fn invalid_body(source: serde_json::Error) -> Self {
        Self::InvalidBody { source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_renders_code_and_reason_phrase() {
        let err = HttpError::status(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "500 Internal Server Error");
    }

    #[test]
    fn timeout_renders_bare_word() {
        assert_eq!(HttpError::Timeout.to_string(), "timeout");
    }

    #[tokio::test]
    async fn network_error_omits_request_url() {
        let source = reqwest::Client::new()
            .get("http://127.0.0.1:9/geocode/search?apiKey=hidden-key")
            .send()
            .await
            .unwrap_err();

        let err = HttpError::network(source);

        assert!(matches!(err, HttpError::Network { .. }));
        assert!(!err.to_string().contains("hidden-key"));
        assert!(!err.to_string().contains("127.0.0.1:9"));
    }

    #[test]
    fn invalid_body_mentions_cause() {
        let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = HttpError::invalid_body(source);
        assert!(err.to_string().starts_with("invalid response body:"));
    }
}
