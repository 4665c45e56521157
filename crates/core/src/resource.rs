// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Resource records decoded from gcloud JSON output.
//!
//! Only the fields the services read are modeled; everything else in the
//! gcloud payload is ignored.

use serde::{Deserialize, Serialize};

/// Last path segment of a resource URL (`.../zones/us-east1-b` → `us-east1-b`).
fn last_segment(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}

/// A Compute Engine VM instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instance {
    pub name: String,
    #[serde(default)]
    pub id: String,
    /// Zone URL as reported by gcloud
    #[serde(default)]
    pub zone: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub machine_type: String,
    #[serde(default)]
    pub creation_timestamp: String,
}

impl Instance {
    pub fn zone_name(&self) -> &str {
        last_segment(&self.zone)
    }

    pub fn machine_type_name(&self) -> &str {
        last_segment(&self.machine_type)
    }

    pub fn is_running(&self) -> bool {
        self.status == "RUNNING"
    }
}

/// A persistent disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Disk {
    pub name: String,
    #[serde(default)]
    pub zone: String,
    /// gcloud reports the size as a decimal string
    #[serde(default)]
    pub size_gb: String,
    #[serde(default, rename = "type")]
    pub disk_type: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub users: Vec<String>,
}

impl Disk {
    pub fn zone_name(&self) -> &str {
        last_segment(&self.zone)
    }

    pub fn type_name(&self) -> &str {
        last_segment(&self.disk_type)
    }
}

/// A Compute Engine zone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Zone {
    pub name: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub status: String,
}

impl Zone {
    pub fn region_name(&self) -> &str {
        last_segment(&self.region)
    }
}

/// A Google Cloud project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub project_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub project_number: String,
    #[serde(default)]
    pub create_time: Option<String>,
}

impl Project {
    /// Display name, falling back to the id when gcloud omits it.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.project_id
        } else {
            &self.name
        }
    }
}

/// A VPC network
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Network {
    pub name: String,
    #[serde(default)]
    pub auto_create_subnetworks: bool,
    #[serde(default)]
    pub routing_config: Option<RoutingConfig>,
    #[serde(default)]
    pub mtu: Option<u32>,
    #[serde(default)]
    pub subnetworks: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutingConfig {
    pub routing_mode: String,
}

impl Network {
    /// `auto` or `custom` subnet mode.
    pub fn subnet_mode(&self) -> &'static str {
        if self.auto_create_subnetworks {
            "auto"
        } else {
            "custom"
        }
    }

    pub fn routing_mode(&self) -> &str {
        self.routing_config
            .as_ref()
            .map(|c| c.routing_mode.as_str())
            .unwrap_or("")
    }
}

/// A subnetwork of a VPC
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subnet {
    pub name: String,
    #[serde(default)]
    pub network: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub ip_cidr_range: String,
    #[serde(default)]
    pub private_ip_google_access: bool,
}

impl Subnet {
    pub fn network_name(&self) -> &str {
        last_segment(&self.network)
    }

    pub fn region_name(&self) -> &str {
        last_segment(&self.region)
    }
}

/// A reserved internal or external IP address
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub name: String,
    #[serde(default)]
    pub address: String,
    /// `INTERNAL` or `EXTERNAL`
    #[serde(default)]
    pub address_type: String,
    /// Absent for global addresses
    #[serde(default)]
    pub region: Option<String>,
    /// `RESERVED` or `IN_USE`
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub users: Vec<String>,
}

impl Address {
    pub fn region_name(&self) -> &str {
        self.region.as_deref().map(last_segment).unwrap_or("global")
    }
}

/// A VPC firewall rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirewallRule {
    pub name: String,
    #[serde(default)]
    pub network: String,
    #[serde(default)]
    pub priority: u32,
    /// `INGRESS` or `EGRESS`
    #[serde(default)]
    pub direction: String,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub source_ranges: Vec<String>,
    #[serde(default)]
    pub target_tags: Vec<String>,
    #[serde(default)]
    pub allowed: Vec<FirewallPermission>,
    #[serde(default)]
    pub denied: Vec<FirewallPermission>,
}

/// Protocol and ports allowed or denied by a rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FirewallPermission {
    #[serde(rename = "IPProtocol")]
    pub ip_protocol: String,
    #[serde(default)]
    pub ports: Vec<String>,
}

impl FirewallRule {
    pub fn network_name(&self) -> &str {
        last_segment(&self.network)
    }

    /// `allow tcp:22,80` style summary of the rule's permissions.
    pub fn summary(&self) -> String {
        let (action, perms) = if self.allowed.is_empty() {
            ("deny", &self.denied)
        } else {
            ("allow", &self.allowed)
        };
        let parts: Vec<String> = perms
            .iter()
            .map(|p| {
                if p.ports.is_empty() {
                    p.ip_protocol.clone()
                } else {
                    format!("{}:{}", p.ip_protocol, p.ports.join(","))
                }
            })
            .collect();
        format!("{} {}", action, parts.join(" "))
    }
}

#[cfg(test)]
#[path = "resource_tests.rs"]
mod tests;
