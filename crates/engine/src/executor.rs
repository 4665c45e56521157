// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Cached, coalescing, retrying command executor
//!
//! One call to [`Executor::execute_command`] resolves in one of three ways:
//! it joins an execution already in flight for the same key, it returns a
//! fresh cache entry, or it starts a new execution. A new execution is two
//! tasks. The worker runs attempts with backoff and writes the cache on
//! success. The race task bounds the wait with the outer timeout and
//! unregisters the in-flight entry when it settles. The worker is detached,
//! so a call that times out still warms the cache if the command finishes.

use crate::config::ExecutorConfig;
use crate::inflight::{InFlight, PendingFuture};
use crate::retry::RetryPolicy;
use crate::zones::ZoneCache;
use futures::FutureExt;
use gcx_adapters::subprocess::millis;
use gcx_adapters::{CommandRunner, RunError};
use gcx_core::{
    expects_collection, normalize_stdout, CacheEntry, CacheKey, CommandCache, CommandError,
    ExecOptions,
};
use parking_lot::Mutex;
use regex::Regex;
use serde_json::Value;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Current time on the tokio clock, so paused-time tests drive cache ages.
pub(crate) fn now() -> Instant {
    tokio::time::Instant::now().into_std()
}

struct ExecutorInner<R> {
    runner: R,
    config: ExecutorConfig,
    cache: Mutex<CommandCache>,
    in_flight: Mutex<InFlight>,
    zones: ZoneCache,
}

/// Executes gcloud commands through a [`CommandRunner`]
pub struct Executor<R: CommandRunner> {
    inner: Arc<ExecutorInner<R>>,
}

impl<R: CommandRunner> Clone for Executor<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: CommandRunner> Executor<R> {
    pub fn new(runner: R, config: ExecutorConfig) -> Self {
        Self {
            inner: Arc::new(ExecutorInner {
                runner,
                config,
                cache: Mutex::new(CommandCache::new()),
                in_flight: Mutex::new(InFlight::new()),
                zones: ZoneCache::new(),
            }),
        }
    }

    pub fn config(&self) -> &ExecutorConfig {
        &self.inner.config
    }

    /// Zone cache shared by every service built from this executor.
    pub fn zones(&self) -> ZoneCache {
        self.inner.zones.clone()
    }

    /// Run `command` with the configured gcloud path.
    pub async fn execute(
        &self,
        command: &str,
        project_id: Option<&str>,
        options: &ExecOptions,
    ) -> Result<Value, CommandError> {
        let path = self.inner.config.gcloud_path.clone();
        self.execute_command(&path, command, project_id, options).await
    }

    /// Run `<path> <command> [--project=<id>] --format=json` and return the
    /// normalized JSON output.
    pub async fn execute_command(
        &self,
        path: &str,
        command: &str,
        project_id: Option<&str>,
        options: &ExecOptions,
    ) -> Result<Value, CommandError> {
        if path.trim().is_empty() {
            return Err(CommandError::Validation(
                "executable path must not be empty".to_string(),
            ));
        }
        if command.trim().is_empty() {
            return Err(CommandError::Validation(
                "command must not be empty".to_string(),
            ));
        }

        let timeout = options.effective_timeout(command);
        let key = CacheKey::for_command(path, command, project_id);

        let pending = {
            let mut in_flight = self.inner.in_flight.lock();
            if let Some(pending) = in_flight.try_join(&key) {
                tracing::debug!(key = %key, "joining in-flight execution");
                pending
            } else {
                if !options.skip_cache {
                    let hit = self
                        .inner
                        .cache
                        .lock()
                        .get_fresh(key.as_str(), options.cache_ttl, now());
                    if let Some(value) = hit {
                        tracing::debug!(key = %key, "cache hit");
                        return Ok(value);
                    }
                }
                self.start(&mut in_flight, key, command, timeout, options.max_retries)
            }
        };

        pending.await
    }

    /// Spawn the worker and race tasks for `key` and register the race's
    /// outcome. Must be called with the in-flight lock held.
    fn start(
        &self,
        in_flight: &mut InFlight,
        key: CacheKey,
        command: &str,
        timeout: Duration,
        max_retries: u32,
    ) -> PendingFuture {
        tracing::info!(
            key = %key,
            timeout_ms = millis(timeout),
            max_retries,
            "executing command"
        );

        let policy = RetryPolicy::new(max_retries, self.inner.config.backoff_base);
        let worker = tokio::spawn(run_attempts(
            Arc::clone(&self.inner),
            key.clone(),
            expects_collection(command),
            policy,
        ));

        let inner = Arc::clone(&self.inner);
        in_flight.register_with(key.clone(), move |id| {
            let race = tokio::spawn(async move {
                let outcome = match tokio::time::timeout(timeout, worker).await {
                    Ok(Ok(result)) => result,
                    Ok(Err(join_err)) => Err(CommandError::Process {
                        command: key.command_line().to_string(),
                        message: join_err.to_string(),
                        stderr: None,
                    }),
                    Err(_) => {
                        tracing::warn!(
                            key = %key,
                            timeout_ms = millis(timeout),
                            "command timed out"
                        );
                        Err(CommandError::Timeout {
                            command: key.command_line().to_string(),
                            timeout_ms: millis(timeout),
                        })
                    }
                };
                inner.in_flight.lock().finish(&key, id);
                outcome
            });
            async move {
                race.await.unwrap_or_else(|join_err| {
                    Err(CommandError::Process {
                        command: String::new(),
                        message: join_err.to_string(),
                        stderr: None,
                    })
                })
            }
            .boxed()
            .shared()
        })
    }

    /// Entry for `command` regardless of age.
    pub fn cached(&self, command: &str, project_id: Option<&str>) -> Option<CacheEntry<Value>> {
        let key = CacheKey::for_command(&self.inner.config.gcloud_path, command, project_id);
        self.inner.cache.lock().get(key.as_str()).cloned()
    }

    /// Remove cache entries whose key matches `pattern`, or all entries.
    pub fn clear_cache(&self, pattern: Option<&Regex>) -> usize {
        let removed = self.inner.cache.lock().clear(pattern);
        tracing::debug!(
            pattern = pattern.map(Regex::as_str).unwrap_or("*"),
            removed,
            "cleared command cache"
        );
        removed
    }

    /// Keys currently cached, sorted.
    pub fn cache_keys(&self) -> Vec<String> {
        self.inner.cache.lock().keys()
    }

    /// Number of executions currently pending.
    pub fn in_flight_len(&self) -> usize {
        self.inner.in_flight.lock().len()
    }
}

async fn run_attempts<R: CommandRunner>(
    inner: Arc<ExecutorInner<R>>,
    key: CacheKey,
    expects_collection: bool,
    policy: RetryPolicy,
) -> Result<Value, CommandError> {
    let mut attempt = 0;
    loop {
        match run_once(&inner, &key, expects_collection).await {
            Ok(value) => {
                inner.cache.lock().set(key.as_str(), value.clone(), now());
                return Ok(value);
            }
            Err(e) if e.is_retryable() && policy.should_retry(attempt) => {
                let delay = policy.backoff(attempt);
                tracing::warn!(
                    key = %key,
                    attempt,
                    delay_ms = millis(delay),
                    error = %e,
                    "command failed, retrying"
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(e) => {
                tracing::debug!(key = %key, attempt, error = %e, "command failed");
                return Err(e);
            }
        }
    }
}

async fn run_once<R: CommandRunner>(
    inner: &ExecutorInner<R>,
    key: &CacheKey,
    expects_collection: bool,
) -> Result<Value, CommandError> {
    let command_line = key.command_line();
    let classifier = &inner.config.classifier;

    match inner.runner.run(command_line, inner.config.attempt_timeout).await {
        Ok(output) => {
            if let Some(err) = classifier.terminal_error(&output.stderr) {
                return Err(err);
            }
            let stderr = output.stderr.trim();
            if !stderr.is_empty() {
                tracing::warn!(key = %key, stderr, "command wrote to stderr");
            }
            normalize_stdout(command_line, &output.stdout, expects_collection)
        }
        Err(err) => {
            if let Some(classified) = err.stderr().and_then(|s| classifier.terminal_error(s)) {
                return Err(classified);
            }
            Err(process_error(command_line, &err))
        }
    }
}

fn process_error(command_line: &str, err: &RunError) -> CommandError {
    CommandError::Process {
        command: command_line.to_string(),
        message: err.to_string(),
        stderr: err.stderr().map(str::to_string),
    }
}

#[cfg(test)]
#[path = "executor_tests.rs"]
mod tests;
