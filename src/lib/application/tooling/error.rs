use crate::infrastructure::http::HttpError;
use thiserror::Error;

/// Invocation-level failures. Every variant surfaces as a 500 envelope whose
/// body is the JSON-encoded `Display` output.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("malformed envelope: {reason}")]
    MalformedEnvelope { reason: String },
    #[error("{message}")]
    Validation { field: String, message: String },
    #[error("tool '{name}' is not registered")]
    UnknownTool { name: String },
    #[error("{service} API error: {status} {status_text}")]
    Upstream {
        service: String,
        status: u16,
        status_text: String,
    },
    #[error("{message}")]
    MalformedResponse { service: String, message: String },
    #[error("network error calling {service}: {source}")]
    Network {
        service: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("request to {service} timed out")]
    Timeout { service: String },
    #[error("{service} endpoint '{url}' is not a valid URL")]
    InvalidEndpoint { service: String, url: String },
    #[error("failed to serialize tool result: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ToolError {
    pub fn malformed_envelope(reason: impl Into<String>) -> Self {
        Self::MalformedEnvelope {
            reason: reason.into(),
        }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn unknown_tool(name: impl Into<String>) -> Self {
        Self::UnknownTool { name: name.into() }
    }

    pub fn malformed_response(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            service: service.into(),
            message: message.into(),
        }
    }

    /// Classify a failed upstream call made on behalf of the whole invocation.
    pub fn from_http(service: impl Into<String>, err: HttpError) -> Self {
        let service = service.into();
        match err {
            HttpError::Status {
                status,
                status_text,
            } => Self::Upstream {
                service,
                status,
                status_text,
            },
            HttpError::Timeout => Self::Timeout { service },
            HttpError::Network { source } => Self::Network { service, source },
            HttpError::InvalidUrl { url } => Self::InvalidEndpoint { service, url },
            err @ HttpError::InvalidBody { .. } => {
                let message = format!("{service} returned malformed response: {err}");
                Self::MalformedResponse { service, message }
            }
        }
    }

    /// Name of the offending field for validation failures.
    pub fn field(&self) -> Option<&str> {
        match self {
            ToolError::Validation { field, .. } => Some(field),
            _ => None,
        }
    }
}
