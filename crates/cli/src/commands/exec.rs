// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `gcx exec` - run an arbitrary gcloud command through the executor.

use anyhow::Result;
use clap::Args;
use gcx_core::{join_args, ExecOptions};
use std::time::Duration;

use super::Context;
use crate::exit_error::{self, ExitError};
use crate::output::print_json;

#[derive(Args)]
pub struct ExecArgs {
    /// Bypass the cache read (the result is still cached)
    #[arg(long)]
    pub skip_cache: bool,

    /// Freshness window for cached results
    #[arg(long, value_name = "MS")]
    pub ttl_ms: Option<u64>,

    /// Retries after the first failed attempt
    #[arg(long, value_name = "N")]
    pub retries: Option<u32>,

    /// Overall timeout (VM start/stop always get 45s)
    #[arg(long, value_name = "MS")]
    pub timeout_ms: Option<u64>,

    /// gcloud command without the executable, e.g. `compute instances list`
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}

impl ExecArgs {
    pub fn options(&self) -> ExecOptions {
        let mut options = ExecOptions::default().skip_cache(self.skip_cache);
        if let Some(ms) = self.ttl_ms {
            options = options.cache_ttl(Duration::from_millis(ms));
        }
        if let Some(retries) = self.retries {
            options = options.max_retries(retries);
        }
        if let Some(ms) = self.timeout_ms {
            options = options.timeout(Duration::from_millis(ms));
        }
        options
    }

    /// The gcloud arguments as one command string, each argument quoted.
    pub fn command_line(&self) -> String {
        join_args(&self.command)
    }

    fn sets_format(&self) -> bool {
        self.command.iter().any(|arg| arg.starts_with("--format"))
    }
}

pub async fn handle(args: ExecArgs, ctx: &Context) -> Result<()> {
    if args.sets_format() {
        return Err(ExitError::new(
            exit_error::VALIDATION,
            "--format is always json; drop it from the command",
        )
        .into());
    }

    let value = ctx
        .executor
        .execute(&args.command_line(), ctx.project.as_deref(), &args.options())
        .await?;
    print_json(&value)
}

#[cfg(test)]
#[path = "exec_tests.rs"]
mod tests;
