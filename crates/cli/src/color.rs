// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::io::IsTerminal;

pub mod codes {
    /// Table headers: steel blue
    pub const HEADER: u8 = 74;
    /// Secondary text: darker grey
    pub const MUTED: u8 = 240;
}

const RESET: &str = "\x1b[0m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";

/// Determine if color output should be enabled.
///
/// Priority: `NO_COLOR=1` disables → `COLOR=1` forces → TTY check.
pub fn should_colorize() -> bool {
    if crate::env::no_color() {
        return false;
    }
    if crate::env::force_color() {
        return true;
    }
    std::io::stdout().is_terminal()
}

fn fg256(code: u8) -> String {
    format!("\x1b[38;5;{code}m")
}

pub(crate) fn apply_header(text: &str) -> String {
    format!("{}{}{}", fg256(codes::HEADER), text, RESET)
}

pub(crate) fn apply_muted(text: &str) -> String {
    format!("{}{}{}", fg256(codes::MUTED), text, RESET)
}

/// Color a Compute Engine lifecycle status.
///
/// - Green: running, ready, up
/// - Yellow: transitional or stopped states (staging, stopping, terminated, ...)
/// - Red: down, failed, error
///
/// Unknown statuses are returned unchanged.
pub(crate) fn apply_status(text: &str) -> String {
    let lower = text.trim_start().to_lowercase();
    let first_word = lower
        .split(|c: char| !c.is_alphabetic())
        .next()
        .unwrap_or("");
    let code = match first_word {
        "running" | "ready" | "up" | "active" => GREEN,
        "provisioning" | "staging" | "stopping" | "suspending" | "suspended" | "terminated"
        | "stopped" | "creating" | "restoring" | "repairing" => YELLOW,
        "down" | "failed" | "error" | "deleting" => RED,
        _ => return text.to_string(),
    };
    format!("{code}{text}{RESET}")
}

/// Status coloring that respects `NO_COLOR` / `COLOR` and the TTY check.
pub fn status(text: &str) -> String {
    if !should_colorize() {
        return text.to_string();
    }
    apply_status(text)
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
