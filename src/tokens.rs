//! Token rule manifest loading
//!
//! The token manifest is already in the editor's `tokenColors` shape (an
//! array of `{ name, scope, settings }` rules). It is passed through as-is
//! once comments are stripped; nothing about the rules is interpreted here.

use crate::error::GenError;
use serde_json::Value;
use std::path::Path;

/// Load the token rule manifest unchanged
pub fn load(dir: &Path, filename: &str) -> Result<Value, GenError> {
    let rules = crate::manifest::load(dir, filename)?;

    match &rules {
        Value::Array(items) => tracing::info!("Token manifest {}: {} rule(s)", filename, items.len()),
        other => tracing::warn!(
            "Token manifest {} is not an array (found {}), passing it through anyway",
            filename,
            kind(other)
        ),
    }

    Ok(rules)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
