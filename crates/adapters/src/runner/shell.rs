// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shell-backed command runner

use super::{CommandOutput, CommandRunner, RunError};
use crate::subprocess::{run_capped, SubprocessError};
use async_trait::async_trait;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;

/// Default ceiling on stdout per command (10 MiB); also the floor for overrides.
pub const DEFAULT_MAX_OUTPUT_BYTES: usize = 10 * 1024 * 1024;

/// Runs command lines through `sh -c`
#[derive(Debug, Clone)]
pub struct ShellRunner {
    shell: String,
    max_output_bytes: usize,
}

impl Default for ShellRunner {
    fn default() -> Self {
        Self {
            shell: "sh".to_string(),
            max_output_bytes: DEFAULT_MAX_OUTPUT_BYTES,
        }
    }
}

impl ShellRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_shell(mut self, shell: impl Into<String>) -> Self {
        self.shell = shell.into();
        self
    }

    pub fn with_max_output_bytes(mut self, limit: usize) -> Self {
        self.max_output_bytes = limit;
        self
    }

    pub fn max_output_bytes(&self) -> usize {
        self.max_output_bytes
    }
}

#[async_trait]
impl CommandRunner for ShellRunner {
    async fn run(&self, command_line: &str, timeout: Duration) -> Result<CommandOutput, RunError> {
        let mut cmd = Command::new(&self.shell);
        cmd.arg("-c").arg(command_line).stdin(Stdio::null());

        let output = run_capped(cmd, timeout, &self.shell, self.max_output_bytes)
            .await
            .map_err(|e| match e {
                SubprocessError::Io(msg) => RunError::Spawn(msg),
                SubprocessError::TimedOut(timeout) => RunError::TimedOut { timeout },
                SubprocessError::OutputTooLarge(limit) => RunError::OutputTooLarge { limit },
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            let first_line = stderr.lines().find(|l| !l.trim().is_empty());
            let message = match first_line {
                Some(line) => format!("{} ({})", output.status, line.trim()),
                None => output.status.to_string(),
            };
            return Err(RunError::Exit {
                code: output.status.code(),
                stderr,
                message,
            });
        }

        Ok(CommandOutput { stdout, stderr })
    }
}

#[cfg(test)]
#[path = "shell_tests.rs"]
mod tests;
