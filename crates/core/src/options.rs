// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-call execution options and default timings.

use std::time::Duration;

/// Default freshness window for command results (10 minutes).
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_millis(600_000);

/// Freshness window for the project listing (30 minutes).
pub const PROJECTS_CACHE_TTL: Duration = Duration::from_millis(1_800_000);

/// Freshness window for the shared zone listing (1 hour).
pub const ZONES_CACHE_TTL: Duration = Duration::from_millis(3_600_000);

/// Default outer timeout for a command.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(25_000);

/// Outer timeout for VM start/stop, which routinely outlast list calls.
pub const VM_POWER_TIMEOUT: Duration = Duration::from_millis(45_000);

/// Retries after the first failed attempt.
pub const DEFAULT_MAX_RETRIES: u32 = 1;

/// Base of the exponential backoff between attempts.
pub const BACKOFF_BASE: Duration = Duration::from_millis(1000);

/// Outer timeout for `compute instances create`.
pub const CREATE_TIMEOUT: Duration = Duration::from_millis(120_000);

/// Freshness window for VPC, address and firewall listings (5 minutes).
pub const NETWORK_CACHE_TTL: Duration = Duration::from_millis(300_000);

/// Freshness window for subnet listings (1 minute).
pub const SUBNETS_CACHE_TTL: Duration = Duration::from_millis(60_000);

/// How long the saved project listing stays usable on disk (6 hours).
pub const SAVED_PROJECTS_TTL: Duration = Duration::from_millis(21_600_000);

/// How long a selected project is remembered (72 hours).
pub const SELECTED_PROJECT_TTL: Duration = Duration::from_millis(259_200_000);

/// Default length of the recently used project list.
pub const DEFAULT_RECENT_LIMIT: usize = 1;

/// Largest accepted recently used list length.
pub const MAX_RECENT_LIMIT: usize = 10;

/// Options accepted by a single executor call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecOptions {
    /// Skip the cache read. Successful results are still written.
    pub skip_cache: bool,
    pub cache_ttl: Duration,
    pub max_retries: u32,
    pub timeout: Duration,
}

impl Default for ExecOptions {
    fn default() -> Self {
        Self {
            skip_cache: false,
            cache_ttl: DEFAULT_CACHE_TTL,
            max_retries: DEFAULT_MAX_RETRIES,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ExecOptions {
    pub fn skip_cache(mut self, skip: bool) -> Self {
        self.skip_cache = skip;
        self
    }

    pub fn cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    pub fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Outer timeout for `command`: VM power operations always get
    /// [`VM_POWER_TIMEOUT`], everything else uses `self.timeout`.
    pub fn effective_timeout(&self, command: &str) -> Duration {
        if is_vm_power_command(command) {
            VM_POWER_TIMEOUT
        } else {
            self.timeout
        }
    }
}

/// True for `compute instances start|stop` style commands.
pub fn is_vm_power_command(command: &str) -> bool {
    command.contains("compute instances")
        && (command.contains("start") || command.contains("stop"))
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod tests;
