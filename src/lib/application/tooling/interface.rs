use async_trait::async_trait;
use serde_json::{Map, Value};
use std::collections::HashMap;

use super::error::ToolError;

/// Tool arguments as delivered in the event envelope.
pub type ToolArgs = Map<String, Value>;

/// Per-invocation secrets as delivered in the event envelope.
pub type Secrets = HashMap<String, String>;

/// A single-entry-point tool invoked with `{args, secrets}`.
#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    /// Validate inputs, perform the work and return a JSON-serializable result.
    async fn call(&self, args: &ToolArgs, secrets: &Secrets) -> Result<Value, ToolError>;
}
