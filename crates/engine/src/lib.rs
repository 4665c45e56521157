// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! gcx execution engine: coalescing executor and resource services

pub mod compute;
pub mod config;
pub mod env;
mod error;
mod executor;
pub mod inflight;
pub mod network;
pub mod prefs;
pub mod projects;
pub mod retry;
pub mod zones;

pub use compute::ComputeService;
pub use config::{ExecutorConfig, DEFAULT_GCLOUD_PATH};
pub use error::ServiceError;
pub use executor::Executor;
pub use inflight::{InFlight, PendingFuture};
pub use network::NetworkService;
pub use prefs::{epoch_ms, Prefs, PrefsError, PrefsStore};
pub use projects::ProjectService;
pub use retry::RetryPolicy;
pub use zones::ZoneCache;
