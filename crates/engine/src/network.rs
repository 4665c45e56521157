// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! VPC network resource service
//!
//! Same read path as the compute service: a resource cache in front of the
//! executor, falling back to the newest held listing when a fetch fails.
//! Subnets change more often than the rest and get a shorter window.

use crate::error::ServiceError;
use crate::executor::{now, Executor};
use gcx_adapters::CommandRunner;
use gcx_core::{
    join_args, Address, ExecOptions, FirewallRule, Network, Subnet, TtlCache, NETWORK_CACHE_TTL,
    SUBNETS_CACHE_TTL,
};
use parking_lot::Mutex;
use serde::de::DeserializeOwned;
use std::time::Duration;

fn regional_command(base: &[&str], region: Option<&str>) -> String {
    let mut args: Vec<String> = base.iter().map(|s| s.to_string()).collect();
    if let Some(region) = region {
        args.push(format!("--regions={}", region));
    }
    join_args(&args)
}

/// VPCs, subnets, addresses and firewall rules of one project
pub struct NetworkService<R: CommandRunner> {
    executor: Executor<R>,
    project_id: String,
    networks: Mutex<TtlCache<Vec<Network>>>,
    subnets: Mutex<TtlCache<Vec<Subnet>>>,
    addresses: Mutex<TtlCache<Vec<Address>>>,
    firewalls: Mutex<TtlCache<Vec<FirewallRule>>>,
}

impl<R: CommandRunner> NetworkService<R> {
    pub fn new(executor: Executor<R>, project_id: impl Into<String>) -> Self {
        Self {
            executor,
            project_id: project_id.into(),
            networks: Mutex::new(TtlCache::new()),
            subnets: Mutex::new(TtlCache::new()),
            addresses: Mutex::new(TtlCache::new()),
            firewalls: Mutex::new(TtlCache::new()),
        }
    }

    pub async fn get_networks(&self) -> Result<Vec<Network>, ServiceError> {
        let command = join_args(["compute", "networks", "list"]);
        self.list(&self.networks, "all", &command, NETWORK_CACHE_TTL, "networks")
            .await
    }

    pub async fn get_subnets(&self, region: Option<&str>) -> Result<Vec<Subnet>, ServiceError> {
        let command = regional_command(&["compute", "networks", "subnets", "list"], region);
        let key = region.unwrap_or("all");
        self.list(&self.subnets, key, &command, SUBNETS_CACHE_TTL, "subnets")
            .await
    }

    pub async fn get_addresses(&self, region: Option<&str>) -> Result<Vec<Address>, ServiceError> {
        let command = regional_command(&["compute", "addresses", "list"], region);
        let key = region.unwrap_or("all");
        self.list(&self.addresses, key, &command, NETWORK_CACHE_TTL, "addresses")
            .await
    }

    pub async fn get_firewall_rules(&self) -> Result<Vec<FirewallRule>, ServiceError> {
        let command = join_args(["compute", "firewall-rules", "list"]);
        self.list(
            &self.firewalls,
            "all",
            &command,
            NETWORK_CACHE_TTL,
            "firewall rules",
        )
        .await
    }

    async fn list<T: DeserializeOwned + Clone>(
        &self,
        cache: &Mutex<TtlCache<Vec<T>>>,
        key: &str,
        command: &str,
        ttl: Duration,
        what: &'static str,
    ) -> Result<Vec<T>, ServiceError> {
        if let Some(items) = cache.lock().get_fresh(key, ttl, now()) {
            return Ok(items);
        }

        let options = ExecOptions::default().cache_ttl(ttl);
        let fetched = match self
            .executor
            .execute(command, Some(&self.project_id), &options)
            .await
        {
            Ok(value) => serde_json::from_value::<Vec<T>>(value)
                .map_err(|e| ServiceError::decode(what, e)),
            Err(e) => Err(e.into()),
        };

        match fetched {
            Ok(items) => {
                cache.lock().set(key, items.clone(), now());
                Ok(items)
            }
            Err(e) => {
                let held = cache.lock().get(key).map(|entry| entry.value.clone());
                let stale = held.or_else(|| {
                    self.executor
                        .cached(command, Some(&self.project_id))
                        .and_then(|entry| serde_json::from_value(entry.value).ok())
                });
                match stale {
                    Some(items) => {
                        tracing::warn!(
                            project = %self.project_id,
                            resource = what,
                            error = %e,
                            "serving stale listing"
                        );
                        Ok(items)
                    }
                    None => Err(e),
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "network_tests.rs"]
mod tests;
