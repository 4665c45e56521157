// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Zone listing cache shared by every service built from one executor

use gcx_core::{TtlCache, Zone, ZONES_CACHE_TTL};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Zones per project; zones change rarely so the TTL is long
#[derive(Clone)]
pub struct ZoneCache {
    inner: Arc<Mutex<TtlCache<Vec<Zone>>>>,
    ttl: Duration,
}

impl Default for ZoneCache {
    fn default() -> Self {
        Self::with_ttl(ZONES_CACHE_TTL)
    }
}

impl ZoneCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(TtlCache::new())),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn get_fresh(&self, project_id: &str, now: Instant) -> Option<Vec<Zone>> {
        self.inner.lock().get_fresh(project_id, self.ttl, now)
    }

    /// Last known zones for the project regardless of age.
    pub fn get_stale(&self, project_id: &str) -> Option<Vec<Zone>> {
        self.inner
            .lock()
            .get(project_id)
            .map(|entry| entry.value.clone())
    }

    pub fn set(&self, project_id: &str, zones: Vec<Zone>, now: Instant) {
        self.inner.lock().set(project_id, zones, now);
    }

    /// Drop only the entry for one project.
    pub fn invalidate(&self, project_id: &str) -> bool {
        let pattern = regex::Regex::new(&format!("^{}$", regex::escape(project_id)));
        match pattern {
            Ok(re) => self.inner.lock().clear(Some(&re)) > 0,
            Err(_) => false,
        }
    }
}
