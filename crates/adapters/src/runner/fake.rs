// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake command runner for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{CommandOutput, CommandRunner, RunError};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

/// Recorded runner call
#[derive(Debug, Clone)]
pub struct RunnerCall {
    pub command_line: String,
    pub timeout: Duration,
    /// Tokio instant of the call, so paused-clock tests can measure gaps
    pub at: Instant,
}

/// Scripted outcome of one fake run
#[derive(Debug, Clone)]
pub struct FakeResponse {
    result: Result<CommandOutput, RunError>,
    delay: Duration,
}

impl FakeResponse {
    /// Successful exit printing `stdout`.
    pub fn stdout(stdout: impl Into<String>) -> Self {
        Self::output(stdout, "")
    }

    /// Successful exit printing to both streams.
    pub fn output(stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            result: Ok(CommandOutput::new(stdout, stderr)),
            delay: Duration::ZERO,
        }
    }

    /// Nonzero exit with the given stderr.
    pub fn exit(code: i32, stderr: impl Into<String>) -> Self {
        let stderr = stderr.into();
        Self {
            result: Err(RunError::Exit {
                code: Some(code),
                message: format!("exit status: {}", code),
                stderr,
            }),
            delay: Duration::ZERO,
        }
    }

    /// Arbitrary runner failure.
    pub fn error(err: RunError) -> Self {
        Self {
            result: Err(err),
            delay: Duration::ZERO,
        }
    }

    /// Delay the outcome by `delay` (honors tokio's paused clock).
    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

struct FakeRunnerState {
    queued: HashMap<String, VecDeque<FakeResponse>>,
    sticky: HashMap<String, FakeResponse>,
    fallback: FakeResponse,
    calls: Vec<RunnerCall>,
}

/// Fake command runner for testing
///
/// Responses are resolved per command line: queued responses first (FIFO),
/// then a sticky response, then the fallback (`[]` on stdout).
#[derive(Clone)]
pub struct FakeCommandRunner {
    inner: Arc<Mutex<FakeRunnerState>>,
}

impl Default for FakeCommandRunner {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakeRunnerState {
                queued: HashMap::new(),
                sticky: HashMap::new(),
                fallback: FakeResponse::stdout("[]"),
                calls: Vec::new(),
            })),
        }
    }
}

impl FakeCommandRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a one-shot response for `command_line`.
    pub fn push(&self, command_line: &str, response: FakeResponse) {
        self.inner
            .lock()
            .queued
            .entry(command_line.to_string())
            .or_default()
            .push_back(response);
    }

    /// Set the response used once the queue for `command_line` is empty.
    pub fn set(&self, command_line: &str, response: FakeResponse) {
        self.inner
            .lock()
            .sticky
            .insert(command_line.to_string(), response);
    }

    /// Set the response for command lines with nothing scripted.
    pub fn set_fallback(&self, response: FakeResponse) {
        self.inner.lock().fallback = response;
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<RunnerCall> {
        self.inner.lock().calls.clone()
    }

    /// Recorded calls for one command line
    pub fn calls_for(&self, command_line: &str) -> Vec<RunnerCall> {
        self.inner
            .lock()
            .calls
            .iter()
            .filter(|c| c.command_line == command_line)
            .cloned()
            .collect()
    }

    pub fn call_count(&self, command_line: &str) -> usize {
        self.calls_for(command_line).len()
    }

    fn next_response(&self, command_line: &str, timeout: Duration) -> FakeResponse {
        let mut inner = self.inner.lock();
        inner.calls.push(RunnerCall {
            command_line: command_line.to_string(),
            timeout,
            at: Instant::now(),
        });
        if let Some(response) = inner
            .queued
            .get_mut(command_line)
            .and_then(|queue| queue.pop_front())
        {
            return response;
        }
        match inner.sticky.get(command_line) {
            Some(response) => response.clone(),
            None => inner.fallback.clone(),
        }
    }
}

#[async_trait]
impl CommandRunner for FakeCommandRunner {
    async fn run(&self, command_line: &str, timeout: Duration) -> Result<CommandOutput, RunError> {
        let response = self.next_response(command_line, timeout);
        if !response.delay.is_zero() {
            tokio::time::sleep(response.delay).await;
        }
        response.result
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
