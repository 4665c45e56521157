// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use clap::ValueEnum;
use serde::Serialize;
use std::io::Write;

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Pretty-printed JSON followed by a newline.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Write `label: value` lines with labels padded to a common width.
pub fn write_fields(out: &mut impl Write, fields: &[(&str, String)]) -> std::io::Result<()> {
    let width = fields.iter().map(|(label, _)| label.len()).max().unwrap_or(0) + 1;
    for (label, value) in fields {
        let label = format!("{}:", label);
        writeln!(out, "{:<width$} {}", label, value, width = width)?;
    }
    Ok(())
}

pub fn print_fields(fields: &[(&str, String)]) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    write_fields(&mut stdout.lock(), fields)?;
    Ok(())
}

/// Print a resource list: JSON array, or the table (or `empty` when there
/// is nothing to show).
pub fn print_list<T: Serialize>(
    items: &[T],
    format: OutputFormat,
    empty: &str,
    table: impl FnOnce(&[T]) -> crate::table::Table,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => print_json(items),
        OutputFormat::Text => {
            if items.is_empty() {
                println!("{}", empty);
                return Ok(());
            }
            table(items).print()?;
            Ok(())
        }
    }
}
