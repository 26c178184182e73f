//! Argument and secret validation shared by the tools.
//!
//! All checks run before any network call. `null` counts as absent.

use super::error::ToolError;
use super::interface::{Secrets, ToolArgs};
use crate::domain::Credential;
use serde_json::Value;

/// Fetch a required numeric argument, accepting any of `aliases` as alternative keys.
pub fn require_number(args: &ToolArgs, field: &str, aliases: &[&str]) -> Result<f64, ToolError> {
    let value = std::iter::once(field)
        .chain(aliases.iter().copied())
        .find_map(|key| args.get(key).filter(|value| !value.is_null()));

    match value {
        None => Err(ToolError::validation(
            field,
            format!("Missing required argument '{field}'"),
        )),
        Some(value) => value.as_f64().ok_or_else(|| {
            ToolError::validation(field, format!("Argument '{field}' must be a number"))
        }),
    }
}

/// Fetch a required, non-blank string argument.
pub fn require_string<'a>(
    args: &'a ToolArgs,
    field: &str,
    missing_message: &str,
) -> Result<&'a str, ToolError> {
    match args.get(field) {
        Some(Value::String(text)) if !text.trim().is_empty() => Ok(text.as_str()),
        Some(Value::String(_)) | Some(Value::Null) | None => {
            Err(ToolError::validation(field, missing_message))
        }
        Some(_) => Err(ToolError::validation(
            field,
            format!("Argument '{field}' must be a string"),
        )),
    }
}

/// Fetch a required, non-blank secret as a credential.
pub fn require_secret(secrets: &Secrets, name: &str) -> Result<Credential, ToolError> {
    secrets
        .get(name)
        .filter(|secret| !secret.trim().is_empty())
        .map(|secret| Credential::new(secret.as_str()))
        .ok_or_else(|| ToolError::validation(name, format!("Missing {name}")))
}
