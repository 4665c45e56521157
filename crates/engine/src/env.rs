// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the engine crate.

use std::path::PathBuf;
use std::time::Duration;

/// Path to the gcloud executable.
pub fn gcloud_path() -> Option<String> {
    std::env::var("GCX_GCLOUD_PATH")
        .ok()
        .filter(|s| !s.trim().is_empty())
}

/// Base delay of the retry backoff.
pub fn backoff_base_ms() -> Option<Duration> {
    std::env::var("GCX_BACKOFF_BASE_MS")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .map(Duration::from_millis)
}

/// Directory holding persisted preferences.
///
/// `GCX_STATE_DIR`, else `$XDG_STATE_HOME/gcx`, else `$HOME/.local/state/gcx`.
pub fn state_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("GCX_STATE_DIR") {
        return Some(PathBuf::from(dir));
    }
    if let Ok(xdg) = std::env::var("XDG_STATE_HOME") {
        return Some(PathBuf::from(xdg).join("gcx"));
    }
    let home = std::env::var("HOME").ok()?;
    Some(PathBuf::from(home).join(".local/state/gcx"))
}

/// Length of the recently used project list.
pub fn recent_limit() -> Option<usize> {
    std::env::var("GCX_RECENT_PROJECTS")
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
