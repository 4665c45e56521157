// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `gcx instances` - VM instance commands.

use anyhow::Result;
use clap::{Args, Subcommand};
use gcx_core::{Instance, NewInstance};

use super::Context;
use crate::color;
use crate::output::{print_fields, print_json, print_list, OutputFormat};
use crate::table::{Column, Table};

#[derive(Args)]
pub struct InstancesArgs {
    #[command(subcommand)]
    pub command: InstancesCommand,
}

#[derive(Subcommand)]
pub enum InstancesCommand {
    /// List instances, optionally in one zone
    List {
        #[arg(long)]
        zone: Option<String>,
    },
    /// Show one instance
    Describe {
        name: String,
        #[arg(long)]
        zone: String,
    },
    /// Start a stopped instance
    Start {
        name: String,
        #[arg(long)]
        zone: String,
    },
    /// Stop a running instance
    Stop {
        name: String,
        #[arg(long)]
        zone: String,
    },
    /// Create an instance
    Create(CreateArgs),
}

#[derive(Args)]
pub struct CreateArgs {
    pub name: String,
    #[arg(long)]
    pub zone: String,
    #[arg(long, default_value = "e2-medium")]
    pub machine_type: String,
    #[arg(long, default_value = "debian-cloud")]
    pub image_project: String,
    #[arg(long)]
    pub image_family: Option<String>,
    #[arg(long)]
    pub network: Option<String>,
    #[arg(long)]
    pub subnet: Option<String>,
    /// Do not assign an external IP
    #[arg(long)]
    pub no_address: bool,
    #[arg(long)]
    pub boot_disk_type: Option<String>,
    /// Boot disk size in GB
    #[arg(long)]
    pub boot_disk_size: Option<u32>,
    /// Network tags, comma separated
    #[arg(long, value_delimiter = ',')]
    pub tags: Vec<String>,
    #[arg(long)]
    pub preemptible: bool,
}

impl CreateArgs {
    fn request(&self) -> NewInstance {
        let mut request = NewInstance::new(&self.name, &self.zone)
            .machine_type(&self.machine_type)
            .no_address(self.no_address)
            .boot_disk(self.boot_disk_type.clone(), self.boot_disk_size)
            .tags(self.tags.clone())
            .preemptible(self.preemptible);
        request.image_project = self.image_project.clone();
        request.image_family = self.image_family.clone();
        if let Some(network) = &self.network {
            request = request.network(network);
        }
        if let Some(subnet) = &self.subnet {
            request = request.subnet(subnet);
        }
        request
    }
}

pub async fn handle(command: InstancesCommand, ctx: &Context) -> Result<()> {
    let compute = ctx.compute()?;
    match command {
        InstancesCommand::List { zone } => {
            let instances = compute.get_instances(zone.as_deref()).await?;
            print_list(&instances, ctx.format, "No instances found", instance_table)
        }
        InstancesCommand::Describe { name, zone } => {
            let instance = compute.get_instance(&name, &zone).await?;
            match ctx.format {
                OutputFormat::Json => print_json(&instance),
                OutputFormat::Text => print_fields(&instance_fields(&instance)),
            }
        }
        InstancesCommand::Start { name, zone } => {
            let result = compute.start_instance(&name, &zone).await?;
            match ctx.format {
                OutputFormat::Json => print_json(&result),
                OutputFormat::Text => {
                    println!("Started instance {} ({})", name, zone);
                    Ok(())
                }
            }
        }
        InstancesCommand::Stop { name, zone } => {
            let result = compute.stop_instance(&name, &zone).await?;
            match ctx.format {
                OutputFormat::Json => print_json(&result),
                OutputFormat::Text => {
                    println!("Stopped instance {} ({})", name, zone);
                    Ok(())
                }
            }
        }
        InstancesCommand::Create(args) => {
            let result = compute.create_instance(&args.request()).await?;
            match ctx.format {
                OutputFormat::Json => print_json(&result),
                OutputFormat::Text => {
                    println!("Created instance {} ({})", args.name, args.zone);
                    Ok(())
                }
            }
        }
    }
}

fn instance_table(instances: &[Instance]) -> Table {
    let mut table = Table::new(vec![
        Column::left("NAME"),
        Column::left("ZONE"),
        Column::left("MACHINE_TYPE"),
        Column::status("STATUS"),
    ]);
    for row in instance_rows(instances) {
        table.row(row);
    }
    table
}

fn instance_rows(instances: &[Instance]) -> Vec<Vec<String>> {
    instances
        .iter()
        .map(|i| {
            vec![
                i.name.clone(),
                i.zone_name().to_string(),
                i.machine_type_name().to_string(),
                i.status.clone(),
            ]
        })
        .collect()
}

fn instance_fields(instance: &Instance) -> Vec<(&'static str, String)> {
    vec![
        ("Name", instance.name.clone()),
        ("ID", instance.id.clone()),
        ("Zone", instance.zone_name().to_string()),
        ("Machine type", instance.machine_type_name().to_string()),
        ("Status", color::status(&instance.status)),
        ("Created", instance.creation_timestamp.clone()),
    ]
}

#[cfg(test)]
#[path = "instances_tests.rs"]
mod tests;
