// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `gcx network` - VPC listings.

use anyhow::Result;
use clap::{Args, Subcommand};
use gcx_core::{Address, FirewallRule, Network, Subnet};

use super::Context;
use crate::output::print_list;
use crate::table::{Column, Table};

#[derive(Args)]
pub struct NetworkArgs {
    #[command(subcommand)]
    pub command: NetworkCommand,
}

#[derive(Subcommand)]
pub enum NetworkCommand {
    /// List VPC networks
    Vpcs,
    /// List subnets, optionally in one region
    Subnets {
        #[arg(long)]
        region: Option<String>,
    },
    /// List reserved IP addresses, optionally in one region
    Addresses {
        #[arg(long)]
        region: Option<String>,
    },
    /// List firewall rules
    Firewalls,
}

pub async fn handle(command: NetworkCommand, ctx: &Context) -> Result<()> {
    let service = ctx.network()?;
    match command {
        NetworkCommand::Vpcs => {
            let networks = service.get_networks().await?;
            print_list(&networks, ctx.format, "No networks found", network_table)
        }
        NetworkCommand::Subnets { region } => {
            let subnets = service.get_subnets(region.as_deref()).await?;
            print_list(&subnets, ctx.format, "No subnets found", subnet_table)
        }
        NetworkCommand::Addresses { region } => {
            let addresses = service.get_addresses(region.as_deref()).await?;
            print_list(&addresses, ctx.format, "No addresses found", address_table)
        }
        NetworkCommand::Firewalls => {
            let rules = service.get_firewall_rules().await?;
            print_list(&rules, ctx.format, "No firewall rules found", firewall_table)
        }
    }
}

fn network_table(networks: &[Network]) -> Table {
    let mut table = Table::new(vec![
        Column::left("NAME"),
        Column::left("SUBNET_MODE"),
        Column::left("ROUTING"),
        Column::right("MTU"),
    ]);
    for n in networks {
        table.row(vec![
            n.name.clone(),
            n.subnet_mode().to_string(),
            n.routing_mode().to_string(),
            n.mtu.map(|m| m.to_string()).unwrap_or_default(),
        ]);
    }
    table
}

fn subnet_table(subnets: &[Subnet]) -> Table {
    let mut table = Table::new(vec![
        Column::left("NAME"),
        Column::left("REGION"),
        Column::left("NETWORK"),
        Column::left("RANGE"),
    ]);
    for s in subnets {
        table.row(vec![
            s.name.clone(),
            s.region_name().to_string(),
            s.network_name().to_string(),
            s.ip_cidr_range.clone(),
        ]);
    }
    table
}

fn address_table(addresses: &[Address]) -> Table {
    let mut table = Table::new(vec![
        Column::left("NAME"),
        Column::left("ADDRESS"),
        Column::left("TYPE"),
        Column::left("REGION"),
        Column::status("STATUS"),
    ]);
    for a in addresses {
        table.row(vec![
            a.name.clone(),
            a.address.clone(),
            a.address_type.clone(),
            a.region_name().to_string(),
            a.status.clone(),
        ]);
    }
    table
}

fn firewall_rows(rules: &[FirewallRule]) -> Vec<Vec<String>> {
    rules
        .iter()
        .map(|r| {
            vec![
                r.name.clone(),
                r.network_name().to_string(),
                r.direction.clone(),
                r.priority.to_string(),
                r.summary(),
                if r.disabled { "yes" } else { "no" }.to_string(),
            ]
        })
        .collect()
}

fn firewall_table(rules: &[FirewallRule]) -> Table {
    let mut table = Table::new(vec![
        Column::left("NAME"),
        Column::left("NETWORK"),
        Column::left("DIRECTION"),
        Column::right("PRIORITY"),
        Column::left("RULE"),
        Column::muted("DISABLED"),
    ]);
    for row in firewall_rows(rules) {
        table.row(row);
    }
    table
}
