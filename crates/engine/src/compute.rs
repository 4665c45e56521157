// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Compute Engine resource service
//!
//! Reads go through a per-service resource cache in front of the executor.
//! When a fresh fetch fails, reads fall back to the newest data still held
//! anywhere: the resource cache, the executor's command cache, and for a
//! zone-scoped request the all-zones listing filtered down to that zone.
//! Mutations never fall back.

use crate::error::ServiceError;
use crate::executor::{now, Executor};
use crate::zones::ZoneCache;
use gcx_adapters::CommandRunner;
use gcx_core::{
    join_args, Disk, ExecOptions, Instance, NewInstance, TtlCache, Zone, CREATE_TIMEOUT,
    DEFAULT_CACHE_TTL,
};
use parking_lot::Mutex;
use regex::Regex;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

/// Pattern matching `text` literally.
pub(crate) fn literal_pattern(text: &str) -> Option<Regex> {
    Regex::new(&regex::escape(text)).ok()
}

/// A resource listed per zone.
trait Zonal: DeserializeOwned + Clone {
    /// Noun used in `compute <noun> list` and in resource cache keys.
    const NOUN: &'static str;

    fn zone_name(&self) -> &str;
}

impl Zonal for Instance {
    const NOUN: &'static str = "instances";

    fn zone_name(&self) -> &str {
        Instance::zone_name(self)
    }
}

impl Zonal for Disk {
    const NOUN: &'static str = "disks";

    fn zone_name(&self) -> &str {
        Disk::zone_name(self)
    }
}

fn resource_key<T: Zonal>(zone: Option<&str>) -> String {
    format!("{}:{}", T::NOUN, zone.unwrap_or("all"))
}

fn list_command<T: Zonal>(zone: Option<&str>) -> String {
    let mut args = vec!["compute".to_string(), T::NOUN.to_string(), "list".to_string()];
    if let Some(zone) = zone {
        args.push(format!("--zones={}", zone));
    }
    join_args(&args)
}

fn in_zone<T: Zonal>(items: Vec<T>, zone: &str) -> Vec<T> {
    items.into_iter().filter(|i| i.zone_name() == zone).collect()
}

/// Instances, disks and zones of one project
pub struct ComputeService<R: CommandRunner> {
    executor: Executor<R>,
    project_id: String,
    cache_ttl: Duration,
    instances: Mutex<TtlCache<Vec<Instance>>>,
    disks: Mutex<TtlCache<Vec<Disk>>>,
    zones: ZoneCache,
}

impl<R: CommandRunner> ComputeService<R> {
    pub fn new(executor: Executor<R>, project_id: impl Into<String>) -> Self {
        let zones = executor.zones();
        Self {
            executor,
            project_id: project_id.into(),
            cache_ttl: DEFAULT_CACHE_TTL,
            instances: Mutex::new(TtlCache::new()),
            disks: Mutex::new(TtlCache::new()),
            zones,
        }
    }

    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    pub async fn get_instances(&self, zone: Option<&str>) -> Result<Vec<Instance>, ServiceError> {
        self.list_zonal(&self.instances, zone).await
    }

    pub async fn get_disks(&self, zone: Option<&str>) -> Result<Vec<Disk>, ServiceError> {
        self.list_zonal(&self.disks, zone).await
    }

    /// Describe one instance. Not cached at the resource level and no fallback.
    pub async fn get_instance(&self, name: &str, zone: &str) -> Result<Instance, ServiceError> {
        let zone_flag = format!("--zone={}", zone);
        let command = join_args(["compute", "instances", "describe", name, zone_flag.as_str()]);
        let value = self
            .executor
            .execute(&command, Some(&self.project_id), &self.read_options())
            .await?;
        serde_json::from_value(value).map_err(|e| ServiceError::decode("instance", e))
    }

    pub async fn get_zones(&self) -> Result<Vec<Zone>, ServiceError> {
        if let Some(zones) = self.zones.get_fresh(&self.project_id, now()) {
            return Ok(zones);
        }

        let command = "compute zones list";
        let options = ExecOptions::default().cache_ttl(self.zones.ttl());
        let fetched = self.fetch::<Zone>(command, &options, "zones").await;
        match fetched {
            Ok(zones) => {
                self.zones.set(&self.project_id, zones.clone(), now());
                Ok(zones)
            }
            Err(e) => {
                let stale = self.zones.get_stale(&self.project_id).or_else(|| {
                    self.executor
                        .cached(command, Some(&self.project_id))
                        .and_then(|entry| serde_json::from_value(entry.value).ok())
                });
                match stale {
                    Some(zones) => {
                        tracing::warn!(
                            project = %self.project_id,
                            error = %e,
                            "serving stale zones"
                        );
                        Ok(zones)
                    }
                    None => Err(e),
                }
            }
        }
    }

    pub async fn start_instance(&self, name: &str, zone: &str) -> Result<Value, ServiceError> {
        self.power("start", name, zone).await
    }

    pub async fn stop_instance(&self, name: &str, zone: &str) -> Result<Value, ServiceError> {
        self.power("stop", name, zone).await
    }

    /// Create a VM. Runs once with no retry and no fallback; on success the
    /// instance and disk listings are dropped so the new VM shows up.
    pub async fn create_instance(&self, request: &NewInstance) -> Result<Value, ServiceError> {
        request.validate()?;
        let options = ExecOptions::default()
            .skip_cache(true)
            .max_retries(0)
            .timeout(CREATE_TIMEOUT);
        let value = self
            .executor
            .execute(&request.command(), Some(&self.project_id), &options)
            .await?;

        self.instances.lock().clear(None);
        self.disks.lock().clear(None);
        for prefix in ["compute instances", "compute disks"] {
            if let Some(pattern) = literal_pattern(prefix) {
                self.executor.clear_cache(Some(&pattern));
            }
        }
        tracing::info!(
            project = %self.project_id,
            instance = %request.name,
            zone = %request.zone,
            "instance created"
        );
        Ok(value)
    }

    /// Drop every cached instance, disk and zone listing for this project.
    pub fn refresh(&self) {
        self.instances.lock().clear(None);
        self.disks.lock().clear(None);
        self.zones.invalidate(&self.project_id);
        if let Some(pattern) = literal_pattern(" compute ") {
            self.executor.clear_cache(Some(&pattern));
        }
    }

    async fn power(&self, action: &str, name: &str, zone: &str) -> Result<Value, ServiceError> {
        let zone_flag = format!("--zone={}", zone);
        let command = join_args(["compute", "instances", action, name, zone_flag.as_str()]);
        let options = ExecOptions::default().skip_cache(true);
        let value = self
            .executor
            .execute(&command, Some(&self.project_id), &options)
            .await?;

        self.instances.lock().clear(None);
        if let Some(pattern) = literal_pattern("compute instances") {
            self.executor.clear_cache(Some(&pattern));
        }
        tracing::info!(
            project = %self.project_id,
            instance = name,
            action,
            "instance power change requested"
        );
        Ok(value)
    }

    fn read_options(&self) -> ExecOptions {
        ExecOptions::default().cache_ttl(self.cache_ttl)
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        command: &str,
        options: &ExecOptions,
        what: &'static str,
    ) -> Result<Vec<T>, ServiceError> {
        let value = self
            .executor
            .execute(command, Some(&self.project_id), options)
            .await?;
        serde_json::from_value(value).map_err(|e| ServiceError::decode(what, e))
    }

    async fn list_zonal<T: Zonal>(
        &self,
        cache: &Mutex<TtlCache<Vec<T>>>,
        zone: Option<&str>,
    ) -> Result<Vec<T>, ServiceError> {
        let key = resource_key::<T>(zone);
        if let Some(items) = cache.lock().get_fresh(&key, self.cache_ttl, now()) {
            return Ok(items);
        }

        let command = list_command::<T>(zone);
        match self.fetch::<T>(&command, &self.read_options(), T::NOUN).await {
            Ok(items) => {
                cache.lock().set(key, items.clone(), now());
                Ok(items)
            }
            Err(e) => match self.stale_zonal(cache, zone) {
                Some(items) => {
                    tracing::warn!(
                        project = %self.project_id,
                        resource = T::NOUN,
                        zone = zone.unwrap_or("all"),
                        error = %e,
                        "serving stale listing"
                    );
                    Ok(items)
                }
                None => Err(e),
            },
        }
    }

    fn stale_zonal<T: Zonal>(
        &self,
        cache: &Mutex<TtlCache<Vec<T>>>,
        zone: Option<&str>,
    ) -> Option<Vec<T>> {
        let lookup = |zone: Option<&str>| -> Option<Vec<T>> {
            let held = cache
                .lock()
                .get(&resource_key::<T>(zone))
                .map(|entry| entry.value.clone());
            held.or_else(|| {
                self.executor
                    .cached(&list_command::<T>(zone), Some(&self.project_id))
                    .and_then(|entry| serde_json::from_value(entry.value).ok())
            })
        };

        match zone {
            None => lookup(None),
            Some(zone) => {
                lookup(Some(zone)).or_else(|| lookup(None).map(|all| in_zone(all, zone)))
            }
        }
    }
}

#[cfg(test)]
#[path = "compute_tests.rs"]
mod tests;
