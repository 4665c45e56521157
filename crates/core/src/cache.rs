// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! TTL-checked result cache.
//!
//! Entries are never expired automatically: staleness is a property checked
//! at read time, and stale entries stay readable so callers can fall back to
//! them when a fresh fetch fails. Entries only disappear through [`TtlCache::clear`].
//!
//! Time is passed in by the caller so the cache itself stays deterministic.

use regex::Regex;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// A cached value and the instant it was stored.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry<V> {
    pub value: V,
    pub stored_at: Instant,
}

impl<V> CacheEntry<V> {
    /// Time elapsed since the entry was stored.
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.stored_at)
    }
}

/// Keyed store of last-known-good values.
#[derive(Debug)]
pub struct TtlCache<V> {
    entries: HashMap<String, CacheEntry<V>>,
}

/// Cache of normalized command results keyed by command line.
pub type CommandCache = TtlCache<serde_json::Value>;

impl<V> Default for TtlCache<V> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<V: Clone> TtlCache<V> {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up an entry regardless of age.
    pub fn get(&self, key: &str) -> Option<&CacheEntry<V>> {
        self.entries.get(key)
    }

    /// Store a value, replacing any previous entry for the key.
    pub fn set(&mut self, key: impl Into<String>, value: V, now: Instant) {
        self.entries.insert(
            key.into(),
            CacheEntry {
                value,
                stored_at: now,
            },
        );
    }

    /// True while the entry is younger than `ttl`.
    pub fn is_fresh(entry: &CacheEntry<V>, ttl: Duration, now: Instant) -> bool {
        entry.age(now) < ttl
    }

    /// Return a clone of the value if an entry exists and is fresh.
    pub fn get_fresh(&self, key: &str, ttl: Duration, now: Instant) -> Option<V> {
        self.entries
            .get(key)
            .filter(|entry| Self::is_fresh(entry, ttl, now))
            .map(|entry| entry.value.clone())
    }

    /// Drop every entry, or only the entries whose key matches `pattern`.
    ///
    /// Returns the number of entries removed.
    pub fn clear(&mut self, pattern: Option<&Regex>) -> usize {
        let before = self.entries.len();
        match pattern {
            None => self.entries.clear(),
            Some(re) => self.entries.retain(|key, _| !re.is_match(key)),
        }
        before - self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All keys, sorted for stable output.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.entries.keys().cloned().collect();
        keys.sort();
        keys
    }
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod tests;
