// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `gcx disks` - list persistent disks.

use anyhow::Result;
use clap::Args;
use gcx_core::Disk;

use super::Context;
use crate::output::print_list;
use crate::table::{Column, Table};

#[derive(Args)]
pub struct DisksArgs {
    /// Only disks in this zone
    #[arg(long)]
    pub zone: Option<String>,
}

pub async fn handle(args: DisksArgs, ctx: &Context) -> Result<()> {
    let disks = ctx.compute()?.get_disks(args.zone.as_deref()).await?;
    print_list(&disks, ctx.format, "No disks found", disk_table)
}

fn disk_table(disks: &[Disk]) -> Table {
    let mut table = Table::new(vec![
        Column::left("NAME"),
        Column::left("ZONE"),
        Column::right("SIZE_GB"),
        Column::left("TYPE"),
        Column::status("STATUS"),
        Column::muted("USERS"),
    ]);
    for disk in disks {
        table.row(disk_row(disk));
    }
    table
}

fn disk_row(disk: &Disk) -> Vec<String> {
    let users: Vec<&str> = disk
        .users
        .iter()
        .map(|u| u.rsplit('/').next().unwrap_or(u))
        .collect();
    vec![
        disk.name.clone(),
        disk.zone_name().to_string(),
        disk.size_gb.clone(),
        disk.type_name().to_string(),
        disk.status.clone(),
        users.join(","),
    ]
}
