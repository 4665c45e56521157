// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Request for `compute instances create`.

use crate::error::CommandError;
use crate::key::join_args;

/// Parameters of a new VM instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewInstance {
    pub name: String,
    pub zone: String,
    pub machine_type: String,
    pub image_project: String,
    pub image_family: Option<String>,
    pub network: Option<String>,
    pub subnet: Option<String>,
    /// Skip the ephemeral external IP
    pub no_address: bool,
    pub boot_disk_type: Option<String>,
    pub boot_disk_size_gb: Option<u32>,
    pub tags: Vec<String>,
    pub preemptible: bool,
}

impl NewInstance {
    pub fn new(name: impl Into<String>, zone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            zone: zone.into(),
            machine_type: "e2-medium".to_string(),
            image_project: "debian-cloud".to_string(),
            image_family: None,
            network: None,
            subnet: None,
            no_address: false,
            boot_disk_type: None,
            boot_disk_size_gb: None,
            tags: Vec::new(),
            preemptible: false,
        }
    }

    pub fn machine_type(mut self, machine_type: impl Into<String>) -> Self {
        self.machine_type = machine_type.into();
        self
    }

    pub fn image(mut self, project: impl Into<String>, family: impl Into<String>) -> Self {
        self.image_project = project.into();
        self.image_family = Some(family.into());
        self
    }

    pub fn network(mut self, network: impl Into<String>) -> Self {
        self.network = Some(network.into());
        self
    }

    pub fn subnet(mut self, subnet: impl Into<String>) -> Self {
        self.subnet = Some(subnet.into());
        self
    }

    pub fn no_address(mut self, no_address: bool) -> Self {
        self.no_address = no_address;
        self
    }

    pub fn boot_disk(mut self, disk_type: Option<String>, size_gb: Option<u32>) -> Self {
        self.boot_disk_type = disk_type;
        self.boot_disk_size_gb = size_gb;
        self
    }

    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    pub fn preemptible(mut self, preemptible: bool) -> Self {
        self.preemptible = preemptible;
        self
    }

    /// Check the name against GCE naming rules and that required fields are set.
    pub fn validate(&self) -> Result<(), CommandError> {
        if !is_valid_name(&self.name) {
            return Err(CommandError::Validation(format!(
                "invalid instance name {:?}: use lowercase letters, digits and hyphens, \
                 starting with a letter and not ending with a hyphen",
                self.name
            )));
        }
        if self.zone.trim().is_empty() {
            return Err(CommandError::Validation("zone must not be empty".to_string()));
        }
        if self.machine_type.trim().is_empty() {
            return Err(CommandError::Validation(
                "machine type must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// The gcloud command, each argument quoted.
    pub fn command(&self) -> String {
        let mut args = vec![
            "compute".to_string(),
            "instances".to_string(),
            "create".to_string(),
            self.name.clone(),
            format!("--zone={}", self.zone),
            format!("--machine-type={}", self.machine_type),
            format!("--image-project={}", self.image_project),
        ];
        if let Some(family) = &self.image_family {
            args.push(format!("--image-family={}", family));
        }
        if let Some(network) = &self.network {
            args.push(format!("--network={}", network));
        }
        if let Some(subnet) = &self.subnet {
            args.push(format!("--subnet={}", subnet));
        }
        if self.no_address {
            args.push("--no-address".to_string());
        }
        if let Some(disk_type) = &self.boot_disk_type {
            args.push(format!("--boot-disk-type={}", disk_type));
        }
        if let Some(size) = self.boot_disk_size_gb {
            args.push(format!("--boot-disk-size={}GB", size));
        }
        if !self.tags.is_empty() {
            args.push(format!("--tags={}", self.tags.join(",")));
        }
        if self.preemptible {
            args.push("--preemptible".to_string());
        }
        join_args(&args)
    }
}

/// `[a-z]([-a-z0-9]*[a-z0-9])?`, at most 63 characters.
fn is_valid_name(name: &str) -> bool {
    let bytes = name.as_bytes();
    let Some((&first, rest)) = bytes.split_first() else {
        return false;
    };
    bytes.len() <= 63
        && first.is_ascii_lowercase()
        && rest
            .iter()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || *b == b'-')
        && bytes.last() != Some(&b'-')
}

#[cfg(test)]
#[path = "create_tests.rs"]
mod tests;
