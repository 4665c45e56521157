// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Classified failures of an external command execution.
//!
//! `CommandError` is `Clone` because one failure is delivered to every
//! caller that joined the same in-flight execution.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors surfaced by the command executor
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("invalid command input: {0}")]
    Validation(String),
    #[error("authentication required: {stderr}")]
    Authentication { stderr: String },
    #[error("project error: {stderr}")]
    Project { stderr: String },
    #[error("command timed out after {timeout_ms}ms: {command}")]
    Timeout { command: String, timeout_ms: u64 },
    #[error("failed to parse output of {command}: {message}")]
    Parse { command: String, message: String },
    #[error("command failed: {command}: {message}")]
    Process {
        command: String,
        message: String,
        stderr: Option<String>,
    },
}

/// Discriminant of [`CommandError`], useful for exit codes and logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Validation,
    Authentication,
    Project,
    Timeout,
    Parse,
    Process,
}

impl CommandError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CommandError::Validation(_) => ErrorKind::Validation,
            CommandError::Authentication { .. } => ErrorKind::Authentication,
            CommandError::Project { .. } => ErrorKind::Project,
            CommandError::Timeout { .. } => ErrorKind::Timeout,
            CommandError::Parse { .. } => ErrorKind::Parse,
            CommandError::Process { .. } => ErrorKind::Process,
        }
    }

    /// Only process-level failures are worth another attempt.
    pub fn is_retryable(&self) -> bool {
        matches!(self, CommandError::Process { .. })
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorKind::Validation => "validation",
            ErrorKind::Authentication => "authentication",
            ErrorKind::Project => "project",
            ErrorKind::Timeout => "timeout",
            ErrorKind::Parse => "parse",
            ErrorKind::Process => "process",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
