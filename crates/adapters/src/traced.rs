// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced runner wrapper for consistent observability

use crate::runner::{CommandOutput, CommandRunner, RunError};
use crate::subprocess::millis;
use async_trait::async_trait;
use std::time::Duration;
use tracing::Instrument;

/// Wrapper that adds tracing to any CommandRunner
#[derive(Clone)]
pub struct TracedRunner<R> {
    inner: R,
}

impl<R> TracedRunner<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }
}

#[async_trait]
impl<R: CommandRunner> CommandRunner for TracedRunner<R> {
    async fn run(&self, command_line: &str, timeout: Duration) -> Result<CommandOutput, RunError> {
        let span = tracing::info_span!(
            "runner.run",
            command = command_line,
            timeout_ms = millis(timeout)
        );
        async {
            tracing::info!("starting");
            let start = std::time::Instant::now();
            let result = self.inner.run(command_line, timeout).await;
            let elapsed_ms = millis(start.elapsed());
            match &result {
                Ok(output) => tracing::info!(
                    elapsed_ms,
                    stdout_len = output.stdout.len(),
                    stderr_len = output.stderr.len(),
                    "command finished"
                ),
                Err(e) => tracing::error!(elapsed_ms, error = %e, "command failed"),
            }
            result
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
