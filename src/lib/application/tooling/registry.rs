use super::error::ToolError;
use super::interface::{Secrets, Tool, ToolArgs};
use crate::application::envelope::{self, RawEvent, ResponseEnvelope};
use crate::application::geocode::GeocodeTool;
use crate::application::stations::StationSamplerTool;
use crate::config::AppConfig;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{info, warn};
use utoipa::ToSchema;

/// Name and description of a registered tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
}

/// Tools addressable by name. Iteration order is by name.
#[derive(Default, Clone)]
pub struct ToolRegistry {
    tools: BTreeMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every built-in tool, sharing one HTTP client.
    pub fn from_config(config: &AppConfig, http: Client) -> Self {
        Self::new()
            .with_tool(StationSamplerTool::from_config(config, http.clone()))
            .with_tool(GeocodeTool::from_config(config, http))
    }

    pub fn with_tool(mut self, tool: impl Tool + 'static) -> Self {
        self.register(Arc::new(tool));
        self
    }

    /// Register a tool, replacing any previous tool with the same name.
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        let name = tool.name().to_string();
        if self.tools.insert(name.clone(), tool).is_some() {
            warn!(tool = %name, "Replaced previously registered tool");
        }
    }

    pub fn names(&self) -> Vec<&str> {
        self.tools.keys().map(String::as_str).collect()
    }

    pub fn descriptors(&self) -> Vec<ToolDescriptor> {
        self.tools
            .values()
            .map(|tool| ToolDescriptor {
                name: tool.name().to_string(),
                description: tool.description().to_string(),
            })
            .collect()
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    pub async fn invoke(
        &self,
        name: &str,
        args: &ToolArgs,
        secrets: &Secrets,
    ) -> Result<Value, ToolError> {
        let tool = self
            .tools
            .get(name)
            .ok_or_else(|| ToolError::unknown_tool(name))?;
        tool.call(args, secrets).await
    }

    /// Decode the event, run the named tool and encode the outcome.
    pub async fn handle(&self, name: &str, event: &RawEvent) -> ResponseEnvelope {
        let outcome = match envelope::decode(event) {
            Ok(parsed) => self.invoke(name, &parsed.args, &parsed.secrets).await,
            Err(err) => Err(err),
        };

        match &outcome {
            Ok(_) => info!(tool = name, "Tool invocation succeeded"),
            Err(err) => warn!(tool = name, error = %err, "Tool invocation failed"),
        }

        envelope::encode(outcome)
    }
}
