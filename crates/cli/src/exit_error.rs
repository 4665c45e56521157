// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process exit codes

use gcx_core::{CommandError, ErrorKind};
use gcx_engine::ServiceError;
use thiserror::Error;

pub const GENERIC: i32 = 1;
pub const VALIDATION: i32 = 2;
pub const AUTHENTICATION: i32 = 3;
pub const PROJECT: i32 = 4;
pub const TIMEOUT: i32 = 5;

/// An error that carries its own exit code
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ExitError {
    pub code: i32,
    pub message: String,
}

impl ExitError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

pub fn code_for_kind(kind: ErrorKind) -> i32 {
    match kind {
        ErrorKind::Validation => VALIDATION,
        ErrorKind::Authentication => AUTHENTICATION,
        ErrorKind::Project => PROJECT,
        ErrorKind::Timeout => TIMEOUT,
        ErrorKind::Parse | ErrorKind::Process => GENERIC,
    }
}

/// Exit code for an error returned from a command handler.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if let Some(e) = err.downcast_ref::<ExitError>() {
        return e.code;
    }
    if let Some(e) = err.downcast_ref::<ServiceError>() {
        return code_for_kind(e.kind());
    }
    if let Some(e) = err.downcast_ref::<CommandError>() {
        return code_for_kind(e.kind());
    }
    GENERIC
}

#[cfg(test)]
#[path = "exit_error_tests.rs"]
mod tests;
