// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the resource services

use gcx_core::{CommandError, ErrorKind};
use thiserror::Error;

/// Errors that can occur in a resource service call
#[derive(Debug, Clone, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Command(#[from] CommandError),
    #[error("failed to decode {what}: {message}")]
    Decode { what: &'static str, message: String },
}

impl ServiceError {
    pub(crate) fn decode(what: &'static str, err: serde_json::Error) -> Self {
        ServiceError::Decode {
            what,
            message: err.to_string(),
        }
    }

    /// Kind of the underlying command failure; decode failures read as parse errors.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ServiceError::Command(e) => e.kind(),
            ServiceError::Decode { .. } => ErrorKind::Parse,
        }
    }
}
