// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `gcx zones` - list zones available to the project.

use anyhow::Result;
use gcx_core::Zone;

use super::Context;
use crate::output::print_list;
use crate::table::{Column, Table};

pub async fn handle(ctx: &Context) -> Result<()> {
    let zones = ctx.compute()?.get_zones().await?;
    print_list(&zones, ctx.format, "No zones found", zone_table)
}

fn zone_table(zones: &[Zone]) -> Table {
    let mut table = Table::new(vec![
        Column::left("NAME"),
        Column::left("REGION"),
        Column::status("STATUS"),
    ]);
    for zone in zones {
        table.row(vec![
            zone.name.clone(),
            zone.region_name().to_string(),
            zone.status.clone(),
        ]);
    }
    table
}
