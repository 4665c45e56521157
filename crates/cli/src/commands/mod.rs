// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod disks;
pub mod exec;
pub mod instances;
pub mod network;
pub mod projects;
pub mod zones;

use gcx_adapters::{ShellRunner, TracedRunner};
use gcx_engine::{ComputeService, Executor, NetworkService, PrefsStore, ProjectService};

use crate::exit_error::{self, ExitError};
use crate::output::OutputFormat;

pub type Runner = TracedRunner<ShellRunner>;

/// Everything a command handler needs for one invocation
pub struct Context {
    pub executor: Executor<Runner>,
    pub project: Option<String>,
    pub format: OutputFormat,
    /// `None` when no state directory can be resolved
    pub prefs: Option<PrefsStore>,
}

impl Context {
    pub fn require_project(&self) -> Result<&str, ExitError> {
        self.project.as_deref().ok_or_else(|| {
            ExitError::new(
                exit_error::VALIDATION,
                "no project specified: pass --project, set GCX_PROJECT or run `gcx projects use`",
            )
        })
    }

    pub fn compute(&self) -> Result<ComputeService<Runner>, ExitError> {
        let project = self.require_project()?;
        Ok(ComputeService::new(self.executor.clone(), project))
    }

    pub fn network(&self) -> Result<NetworkService<Runner>, ExitError> {
        let project = self.require_project()?;
        Ok(NetworkService::new(self.executor.clone(), project))
    }

    pub fn prefs(&self) -> Result<&PrefsStore, ExitError> {
        self.prefs.as_ref().ok_or_else(|| {
            ExitError::new(
                exit_error::GENERIC,
                "no state directory: set GCX_STATE_DIR or HOME",
            )
        })
    }

    pub fn projects(&self) -> ProjectService<Runner> {
        ProjectService::new(self.executor.clone())
    }
}
