// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the adapters crate.

use crate::runner::DEFAULT_MAX_OUTPUT_BYTES;
use std::time::Duration;

fn parse_duration_ms(var: &str) -> Option<Duration> {
    std::env::var(var)
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .map(Duration::from_millis)
}

/// Shell used to run command lines (default: `sh`).
pub fn shell() -> Option<String> {
    std::env::var("GCX_SHELL").ok().filter(|s| !s.is_empty())
}

/// Ceiling on stdout per command, in bytes. Never below the 10 MiB default.
pub fn max_output_bytes() -> Option<usize> {
    std::env::var("GCX_MAX_OUTPUT_BYTES")
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
        .map(|n| n.max(DEFAULT_MAX_OUTPUT_BYTES))
}

/// Per-attempt hard timeout override.
pub fn attempt_timeout_ms() -> Option<Duration> {
    parse_duration_ms("GCX_ATTEMPT_TIMEOUT_MS")
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
