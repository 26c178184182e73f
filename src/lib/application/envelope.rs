//! Envelope codec for the tool invocation boundary.
//!
//! Inbound events carry a JSON string body `{ "args": {...}, "secrets": {...} }`.
//! Outbound envelopes are `{ "statusCode": 200|500, "body": "<json>" }`; the
//! body is valid JSON on both paths.

use super::tooling::{Secrets, ToolArgs, ToolError};
use crate::constants::UNKNOWN_ERROR;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::error::Error;

pub const STATUS_OK: u16 = 200;
pub const STATUS_ERROR: u16 = 500;

/// Opaque event as delivered by the hosting runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEvent {
    pub body: String,
}

impl RawEvent {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }

    /// Wrap a parsed event back into its transport form.
    pub fn from_parsed(event: &ParsedEvent) -> Self {
        Self {
            body: serde_json::json!({
                "args": event.args,
                "secrets": event.secrets,
            })
            .to_string(),
        }
    }
}

/// Typed view of an event body.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ParsedEvent {
    pub args: ToolArgs,
    #[serde(deserialize_with = "present_secrets")]
    pub secrets: Secrets,
}

/// Transport-level response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

impl ResponseEnvelope {
    pub fn is_success(&self) -> bool {
        self.status_code == STATUS_OK
    }

    /// Decode the body back into JSON.
    pub fn body_json(&self) -> Result<Value, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

/// Decode an event into arguments and secrets. No partial results.
pub fn decode(event: &RawEvent) -> Result<ParsedEvent, ToolError> {
    decode_body(&event.body)
}

/// Decode a raw event body string.
pub fn decode_body(body: &str) -> Result<ParsedEvent, ToolError> {
    serde_json::from_str(body).map_err(|err| ToolError::malformed_envelope(err.to_string()))
}

/// Encode a tool outcome. Success is 200 with the JSON value; any error is
/// 500 with its message as a JSON string, or `"Unknown error"` when blank.
pub fn encode<E>(outcome: Result<Value, E>) -> ResponseEnvelope
where
    E: Error,
{
    match outcome {
        Ok(value) => ResponseEnvelope {
            status_code: STATUS_OK,
            body: value.to_string(),
        },
        Err(err) => {
            let message = err.to_string();
            let message = if message.trim().is_empty() {
                UNKNOWN_ERROR.to_string()
            } else {
                message
            };
            ResponseEnvelope {
                status_code: STATUS_ERROR,
                body: Value::String(message).to_string(),
            }
        }
    }
}

/// Secrets with `null` values are treated as absent.
fn present_secrets<'de, D>(deserializer: D) -> Result<Secrets, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: HashMap<String, Option<String>> = HashMap::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|(key, value)| value.map(|value| (key, value)))
        .collect())
}
