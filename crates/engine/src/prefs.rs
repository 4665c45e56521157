// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Persisted project preferences
//!
//! The selected project, a short recently used list and the last project
//! listing live in `<state dir>/prefs.json` so they survive across runs.
//! A selection expires after 72 hours and the saved listing after 6 hours.
//! A missing or unreadable file reads as empty preferences.

use crate::env;
use gcx_adapters::subprocess::millis;
use gcx_core::{
    Project, DEFAULT_RECENT_LIMIT, MAX_RECENT_LIMIT, SAVED_PROJECTS_TTL, SELECTED_PROJECT_TTL,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

/// Wall-clock milliseconds since the Unix epoch.
pub fn epoch_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(millis)
        .unwrap_or(0)
}

#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("project id must not be empty")]
    EmptyProject,
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Project listing as last fetched from gcloud
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedProjects {
    pub projects: Vec<Project>,
    pub fetched_at_ms: u64,
}

/// On-disk preferences
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Prefs {
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub selected_at_ms: Option<u64>,
    /// Most recent first, no duplicates
    #[serde(default)]
    pub recently_used: Vec<String>,
    #[serde(default)]
    pub projects: Option<SavedProjects>,
}

fn within(since_ms: u64, now_ms: u64, ttl: std::time::Duration) -> bool {
    now_ms.saturating_sub(since_ms) <= millis(ttl)
}

/// Reads and writes [`Prefs`] at one path
#[derive(Debug, Clone)]
pub struct PrefsStore {
    path: PathBuf,
    recent_limit: usize,
}

impl PrefsStore {
    pub fn new(state_dir: impl AsRef<Path>) -> Self {
        Self {
            path: state_dir.as_ref().join("prefs.json"),
            recent_limit: DEFAULT_RECENT_LIMIT,
        }
    }

    /// Store under the resolved state directory, or `None` when no
    /// directory can be determined.
    pub fn from_env() -> Option<Self> {
        let store = Self::new(env::state_dir()?);
        Some(match env::recent_limit() {
            Some(limit) => store.with_recent_limit(limit),
            None => store,
        })
    }

    /// Clamped to `1..=10`.
    pub fn with_recent_limit(mut self, limit: usize) -> Self {
        self.recent_limit = limit.clamp(1, MAX_RECENT_LIMIT);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Prefs {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Prefs::default(),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "failed to read prefs");
                return Prefs::default();
            }
        };
        serde_json::from_str(&text).unwrap_or_else(|e| {
            tracing::warn!(path = %self.path.display(), error = %e, "ignoring corrupt prefs");
            Prefs::default()
        })
    }

    /// Write atomically: a temp file next to the target, then rename.
    fn save(&self, prefs: &Prefs) -> Result<(), PrefsError> {
        let tmp_path = self.path.with_extension("json.tmp");
        let written = self
            .path
            .parent()
            .map_or(Ok(()), std::fs::create_dir_all)
            .and_then(|_| {
                let json = serde_json::to_string_pretty(prefs).map_err(std::io::Error::other)?;
                std::fs::write(&tmp_path, json.as_bytes())?;
                std::fs::rename(&tmp_path, &self.path)
            });
        written.map_err(|source| PrefsError::Write {
            path: self.path.clone(),
            source,
        })
    }

    /// Remember `project_id` as selected and move it to the front of the
    /// recently used list.
    pub fn select_project(&self, project_id: &str, now_ms: u64) -> Result<Prefs, PrefsError> {
        let project_id = project_id.trim();
        if project_id.is_empty() {
            return Err(PrefsError::EmptyProject);
        }

        let mut prefs = self.load();
        prefs.project_id = Some(project_id.to_string());
        prefs.selected_at_ms = Some(now_ms);
        prefs.recently_used.retain(|id| id != project_id);
        prefs.recently_used.insert(0, project_id.to_string());
        prefs.recently_used.truncate(self.recent_limit);

        self.save(&prefs)?;
        tracing::debug!(project = project_id, "selected project");
        Ok(prefs)
    }

    /// The selected project unless the selection is older than 72 hours.
    pub fn selected_project(&self, now_ms: u64) -> Option<String> {
        let prefs = self.load();
        let selected_at = prefs.selected_at_ms?;
        if within(selected_at, now_ms, SELECTED_PROJECT_TTL) {
            prefs.project_id
        } else {
            None
        }
    }

    pub fn recent_projects(&self) -> Vec<String> {
        let mut recent = self.load().recently_used;
        recent.truncate(self.recent_limit);
        recent
    }

    /// Keep `projects` as the saved listing.
    pub fn save_projects(&self, projects: &[Project], now_ms: u64) -> Result<(), PrefsError> {
        let mut prefs = self.load();
        prefs.projects = Some(SavedProjects {
            projects: projects.to_vec(),
            fetched_at_ms: now_ms,
        });
        self.save(&prefs)
    }

    /// The saved listing unless it is older than 6 hours.
    pub fn cached_projects(&self, now_ms: u64) -> Option<Vec<Project>> {
        let saved = self.load().projects?;
        within(saved.fetched_at_ms, now_ms, SAVED_PROJECTS_TTL).then_some(saved.projects)
    }
}

#[cfg(test)]
#[path = "prefs_tests.rs"]
mod tests;
