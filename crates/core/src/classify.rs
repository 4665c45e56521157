// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Stderr classification into terminal domain errors.
//!
//! Rules are evaluated in order and the first rule with a matching phrase
//! wins. Matching is case-insensitive substring search.

use crate::error::CommandError;

/// Domain error a stderr rule maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StderrKind {
    Authentication,
    Project,
}

impl StderrKind {
    /// Build the terminal error for this kind, carrying the raw stderr.
    pub fn into_error(self, stderr: &str) -> CommandError {
        let stderr = stderr.trim().to_string();
        match self {
            StderrKind::Authentication => CommandError::Authentication { stderr },
            StderrKind::Project => CommandError::Project { stderr },
        }
    }
}

/// A set of phrases that identify one kind of failure
#[derive(Debug, Clone)]
pub struct StderrRule {
    pub kind: StderrKind,
    phrases: Vec<String>,
}

impl StderrRule {
    pub fn new(kind: StderrKind, phrases: &[&str]) -> Self {
        Self {
            kind,
            phrases: phrases.iter().map(|p| p.to_lowercase()).collect(),
        }
    }

    fn matches(&self, stderr_lower: &str) -> bool {
        self.phrases.iter().any(|p| stderr_lower.contains(p.as_str()))
    }
}

/// Phrases gcloud prints when credentials are missing or rejected.
pub const AUTH_PHRASES: &[&str] = &[
    "not authorized",
    "not authenticated",
    "requires authentication",
    "login required",
];

/// Phrases gcloud prints when the target project is unusable.
pub const PROJECT_PHRASES: &[&str] = &[
    "project not found",
    "project id not specified",
    "project does not exist",
];

/// Ordered list of stderr rules
#[derive(Debug, Clone)]
pub struct Classifier {
    rules: Vec<StderrRule>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self {
            rules: vec![
                StderrRule::new(StderrKind::Authentication, AUTH_PHRASES),
                StderrRule::new(StderrKind::Project, PROJECT_PHRASES),
            ],
        }
    }
}

impl Classifier {
    /// Classifier with no rules; every stderr is treated as a warning.
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule evaluated after the existing ones.
    pub fn with_rule(mut self, rule: StderrRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Return the kind of the first rule matching `stderr`, if any.
    pub fn classify(&self, stderr: &str) -> Option<StderrKind> {
        if stderr.trim().is_empty() {
            return None;
        }
        let lower = stderr.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matches(&lower))
            .map(|rule| rule.kind)
    }

    /// Classify and build the terminal error in one step.
    pub fn terminal_error(&self, stderr: &str) -> Option<CommandError> {
        self.classify(stderr).map(|kind| kind.into_error(stderr))
    }
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
