// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process execution adapters

mod shell;

pub use shell::{ShellRunner, DEFAULT_MAX_OUTPUT_BYTES};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeCommandRunner, FakeResponse, RunnerCall};

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Buffered output of a process that exited with status 0
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn new(stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }
}

/// Errors from running a command line
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RunError {
    #[error("spawn failed: {0}")]
    Spawn(String),
    #[error("{message}")]
    Exit {
        code: Option<i32>,
        stderr: String,
        message: String,
    },
    #[error("timed out after {}ms", .timeout.as_millis())]
    TimedOut { timeout: Duration },
    #[error("output exceeds the {limit} byte limit")]
    OutputTooLarge { limit: usize },
}

impl RunError {
    /// Stderr captured from the failed process, if any.
    pub fn stderr(&self) -> Option<&str> {
        match self {
            RunError::Exit { stderr, .. } if !stderr.trim().is_empty() => Some(stderr),
            _ => None,
        }
    }
}

/// Adapter that runs a fully-formed command line and buffers its output
#[async_trait]
pub trait CommandRunner: Clone + Send + Sync + 'static {
    /// Run `command_line`, waiting at most `timeout` for it to exit.
    ///
    /// Returns the buffered output on exit status 0; any other outcome is
    /// a [`RunError`].
    async fn run(&self, command_line: &str, timeout: Duration) -> Result<CommandOutput, RunError>;
}
