// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Normalization of command stdout into array-or-object JSON.
//!
//! Commands that list resources must always yield an array, even when the
//! tool prints a single bare object. Empty output is an empty list.

use crate::error::CommandError;
use serde_json::Value;

/// Parsed command output
#[derive(Debug, Clone, PartialEq)]
pub enum JsonShape {
    Array(Vec<Value>),
    Single(Value),
}

impl From<Value> for JsonShape {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(items) => JsonShape::Array(items),
            other => JsonShape::Single(other),
        }
    }
}

impl JsonShape {
    /// Collapse back into a JSON value, wrapping a single value in a
    /// one-element array when a collection is expected.
    pub fn normalize(self, expects_collection: bool) -> Value {
        match self {
            JsonShape::Array(items) => Value::Array(items),
            JsonShape::Single(value) if expects_collection => Value::Array(vec![value]),
            JsonShape::Single(value) => value,
        }
    }
}

/// Whether a command is expected to return a collection.
pub fn expects_collection(command: &str) -> bool {
    command.contains("list")
}

/// Turn raw stdout into the normalized result for `command`.
pub fn normalize_stdout(
    command: &str,
    stdout: &str,
    expects_collection: bool,
) -> Result<Value, CommandError> {
    let trimmed = stdout.trim();
    if trimmed.is_empty() {
        return Ok(Value::Array(Vec::new()));
    }
    let value: Value = serde_json::from_str(trimmed).map_err(|e| CommandError::Parse {
        command: command.to_string(),
        message: e.to_string(),
    })?;
    Ok(JsonShape::from(value).normalize(expects_collection))
}

#[cfg(test)]
#[path = "shape_tests.rs"]
mod tests;
