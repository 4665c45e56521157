// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Column-aligned table output for the list commands.

use std::io::Write;

use crate::color;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Right,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum CellStyle {
    Plain,
    Muted,
    Status,
}

/// A column definition in a [`Table`].
pub struct Column {
    name: &'static str,
    align: Align,
    style: CellStyle,
    max_width: Option<usize>,
}

impl Column {
    pub fn left(name: &'static str) -> Self {
        Self {
            name,
            align: Align::Left,
            style: CellStyle::Plain,
            max_width: None,
        }
    }

    pub fn right(name: &'static str) -> Self {
        Self {
            align: Align::Right,
            ..Self::left(name)
        }
    }

    /// Secondary detail, rendered in the muted color.
    pub fn muted(name: &'static str) -> Self {
        Self {
            style: CellStyle::Muted,
            ..Self::left(name)
        }
    }

    /// Lifecycle status, colored by [`color::apply_status`].
    pub fn status(name: &'static str) -> Self {
        Self {
            style: CellStyle::Status,
            ..Self::left(name)
        }
    }

    /// Truncate values longer than `max` characters.
    pub fn with_max(mut self, max: usize) -> Self {
        self.max_width = Some(max);
        self
    }

    fn cell<'a>(&self, raw: &'a str) -> &'a str {
        match self.max_width {
            Some(max) => match raw.char_indices().nth(max) {
                Some((idx, _)) => &raw[..idx],
                None => raw,
            },
            None => raw,
        }
    }
}

pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Vec<String>>,
    colorize: bool,
}

const SEP: &str = "  ";

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            colorize: color::should_colorize(),
        }
    }

    #[cfg(test)]
    pub fn plain(columns: Vec<Column>) -> Self {
        Self {
            colorize: false,
            ..Self::new(columns)
        }
    }

    #[cfg(test)]
    pub fn colored(columns: Vec<Column>) -> Self {
        Self {
            colorize: true,
            ..Self::new(columns)
        }
    }

    pub fn row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Write the header and rows. Nothing is written for an empty table.
    ///
    /// Color is applied after padding so escape codes don't count toward
    /// column widths. A left-aligned last column is never padded.
    pub fn render(&self, out: &mut impl Write) -> std::io::Result<()> {
        if self.rows.is_empty() {
            return Ok(());
        }
        let widths = self.widths();
        let last = self.columns.len().saturating_sub(1);

        let header: Vec<String> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                let text = layout(col.name, widths[i], col.align, i == last);
                if self.colorize {
                    color::apply_header(&text)
                } else {
                    text
                }
            })
            .collect();
        writeln!(out, "{}", header.join(SEP))?;

        for row in &self.rows {
            let cells: Vec<String> = self
                .columns
                .iter()
                .enumerate()
                .map(|(i, col)| {
                    let raw = col.cell(row.get(i).map(String::as_str).unwrap_or(""));
                    let text = layout(raw, widths[i], col.align, i == last);
                    self.stylize(text, col.style)
                })
                .collect();
            writeln!(out, "{}", cells.join(SEP))?;
        }
        Ok(())
    }

    /// Render to stdout.
    pub fn print(&self) -> std::io::Result<()> {
        let stdout = std::io::stdout();
        let mut lock = stdout.lock();
        self.render(&mut lock)
    }

    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                self.rows
                    .iter()
                    .map(|row| col.cell(row.get(i).map(String::as_str).unwrap_or("")))
                    .map(|cell| cell.chars().count())
                    .fold(col.name.len(), usize::max)
            })
            .collect()
    }

    fn stylize(&self, text: String, style: CellStyle) -> String {
        if !self.colorize {
            return text;
        }
        match style {
            CellStyle::Plain => text,
            CellStyle::Muted => color::apply_muted(&text),
            CellStyle::Status => color::apply_status(&text),
        }
    }
}

fn layout(text: &str, width: usize, align: Align, is_last: bool) -> String {
    match align {
        Align::Left if is_last => text.to_string(),
        Align::Left => format!("{:<width$}", text),
        Align::Right => format!("{:>width$}", text),
    }
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
