// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Executor configuration

use gcx_adapters::subprocess::ATTEMPT_TIMEOUT;
use gcx_adapters::{ShellRunner, DEFAULT_MAX_OUTPUT_BYTES};
use gcx_core::{Classifier, BACKOFF_BASE};
use std::time::Duration;

/// Default gcloud executable, resolved through `PATH`.
pub const DEFAULT_GCLOUD_PATH: &str = "gcloud";

/// Process-level settings shared by every call through one executor
#[derive(Debug, Clone)]
pub struct ExecutorConfig {
    pub gcloud_path: String,
    /// Hard per-attempt ceiling; the child is killed when it elapses
    pub attempt_timeout: Duration,
    pub backoff_base: Duration,
    pub max_output_bytes: usize,
    pub shell: String,
    pub classifier: Classifier,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            gcloud_path: DEFAULT_GCLOUD_PATH.to_string(),
            attempt_timeout: ATTEMPT_TIMEOUT,
            backoff_base: BACKOFF_BASE,
            max_output_bytes: DEFAULT_MAX_OUTPUT_BYTES,
            shell: "sh".to_string(),
            classifier: Classifier::default(),
        }
    }
}

impl ExecutorConfig {
    /// Defaults overridden by `GCX_*` environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(path) = crate::env::gcloud_path() {
            config.gcloud_path = path;
        }
        if let Some(base) = crate::env::backoff_base_ms() {
            config.backoff_base = base;
        }
        if let Some(timeout) = gcx_adapters::env::attempt_timeout_ms() {
            config.attempt_timeout = timeout;
        }
        if let Some(limit) = gcx_adapters::env::max_output_bytes() {
            config.max_output_bytes = limit;
        }
        if let Some(shell) = gcx_adapters::env::shell() {
            config.shell = shell;
        }
        config
    }

    pub fn with_gcloud_path(mut self, path: impl Into<String>) -> Self {
        self.gcloud_path = path.into();
        self
    }

    pub fn with_backoff_base(mut self, base: Duration) -> Self {
        self.backoff_base = base;
        self
    }

    pub fn with_classifier(mut self, classifier: Classifier) -> Self {
        self.classifier = classifier;
        self
    }

    /// Shell runner honoring the configured shell and output ceiling.
    pub fn shell_runner(&self) -> ShellRunner {
        ShellRunner::new()
            .with_shell(self.shell.clone())
            .with_max_output_bytes(self.max_output_bytes)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
