// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Cache key type for identifying external command requests.
//!
//! A CacheKey is the fully-qualified command line that would be handed to
//! the shell. Two requests are the same request iff their keys are
//! byte-identical, so construction must stay deterministic.
//!
//! Every value that reaches the command line is shell-quoted, so the key
//! always describes exactly the argv gcloud receives.

use std::borrow::{Borrow, Cow};
use std::fmt;

/// Output format flag appended to every command.
pub const FORMAT_JSON_FLAG: &str = "--format=json";

/// Quote `arg` for `sh -c`. Words made only of characters the shell never
/// interprets are left bare so keys stay readable.
pub fn quote_arg(arg: &str) -> Cow<'_, str> {
    let plain = !arg.is_empty()
        && arg
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b"-_=/,.+:@%".contains(&b));
    if plain {
        Cow::Borrowed(arg)
    } else {
        shell_words::quote(arg)
    }
}

/// Join gcloud arguments into a command string, quoting each one so the
/// shell hands it to gcloud as a single argument.
pub fn join_args<I, S>(args: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    args.into_iter()
        .map(|arg| quote_arg(arg.as_ref()).into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Deterministic identifier for one logical external-command request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CacheKey(String);

impl CacheKey {
    /// Create a CacheKey from an already-built command line.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Build the canonical key `<path> <command> [--project=<id>] --format=json`.
    ///
    /// `command` must already be quoted (see [`join_args`]); the path and
    /// project id are quoted here. An empty or whitespace-only project id is
    /// treated as absent.
    pub fn for_command(path: &str, command: &str, project_id: Option<&str>) -> Self {
        let mut key = format!("{} {}", quote_arg(path.trim()), command.trim());
        if let Some(project) = project_id.map(str::trim).filter(|p| !p.is_empty()) {
            key.push(' ');
            key.push_str(&quote_arg(&format!("--project={}", project)));
        }
        key.push(' ');
        key.push_str(FORMAT_JSON_FLAG);
        Self(key)
    }

    /// Get the string value of this CacheKey.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The command line to execute for this key.
    pub fn command_line(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for CacheKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<CacheKey> for String {
    fn from(key: CacheKey) -> Self {
        key.0
    }
}

impl From<&str> for CacheKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl PartialEq<str> for CacheKey {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for CacheKey {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl Borrow<str> for CacheKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[path = "key_tests.rs"]
mod tests;
