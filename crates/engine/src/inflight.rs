// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-flight request coalescing
//!
//! At most one execution per key is pending at any instant. Callers that
//! arrive while it is pending clone its shared future and observe the same
//! outcome. The execution that registered an entry removes it when it
//! settles; the generation id keeps a late `finish` from removing a newer
//! registration for the same key.

use futures::future::{BoxFuture, Shared};
use gcx_core::{CacheKey, CommandError};
use serde_json::Value;
use std::collections::HashMap;

/// Shared handle to a pending execution's outcome
pub type PendingFuture = Shared<BoxFuture<'static, Result<Value, CommandError>>>;

struct Pending {
    id: u64,
    future: PendingFuture,
}

/// Keyed registry of pending executions
#[derive(Default)]
pub struct InFlight {
    pending: HashMap<CacheKey, Pending>,
    next_id: u64,
}

impl InFlight {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach to the pending execution for `key`, if there is one.
    pub fn try_join(&self, key: &CacheKey) -> Option<PendingFuture> {
        self.pending.get(key).map(|p| p.future.clone())
    }

    /// Register a new pending execution and return its generation id.
    pub fn register(&mut self, key: CacheKey, future: PendingFuture) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.pending.insert(key, Pending { id, future });
        id
    }

    /// Register the future built by `make`, which receives the generation id
    /// it must later pass to [`InFlight::finish`].
    pub fn register_with<F>(&mut self, key: CacheKey, make: F) -> PendingFuture
    where
        F: FnOnce(u64) -> PendingFuture,
    {
        let future = make(self.next_id + 1);
        self.register(key, future.clone());
        future
    }

    /// Remove the entry for `key` if it still belongs to generation `id`.
    ///
    /// Returns true if an entry was removed.
    pub fn finish(&mut self, key: &CacheKey, id: u64) -> bool {
        match self.pending.get(key) {
            Some(p) if p.id == id => {
                self.pending.remove(key);
                true
            }
            _ => false,
        }
    }

    pub fn contains(&self, key: &CacheKey) -> bool {
        self.pending.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
#[path = "inflight_tests.rs"]
mod tests;
