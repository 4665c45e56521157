// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! gcx-core: cache, key, error and output-shape types for the gcloud executor,
//! plus the resource records and requests the services exchange

pub mod cache;
pub mod classify;
pub mod create;
pub mod error;
pub mod key;
pub mod options;
pub mod resource;
pub mod shape;

pub use cache::{CacheEntry, CommandCache, TtlCache};
pub use classify::{Classifier, StderrKind, StderrRule};
pub use create::NewInstance;
pub use error::{CommandError, ErrorKind};
pub use key::{join_args, quote_arg, CacheKey, FORMAT_JSON_FLAG};
pub use options::{
    is_vm_power_command, ExecOptions, BACKOFF_BASE, CREATE_TIMEOUT, DEFAULT_CACHE_TTL,
    DEFAULT_MAX_RETRIES, DEFAULT_RECENT_LIMIT, DEFAULT_TIMEOUT, MAX_RECENT_LIMIT,
    NETWORK_CACHE_TTL, PROJECTS_CACHE_TTL, SAVED_PROJECTS_TTL, SELECTED_PROJECT_TTL,
    SUBNETS_CACHE_TTL, VM_POWER_TIMEOUT, ZONES_CACHE_TTL,
};
pub use resource::{Address, Disk, FirewallRule, Instance, Network, Project, Subnet, Zone};
pub use shape::{expects_collection, normalize_stdout, JsonShape};
