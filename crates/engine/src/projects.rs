// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Project listing and lookup

use crate::error::ServiceError;
use crate::executor::Executor;
use gcx_adapters::CommandRunner;
use gcx_core::{join_args, CommandError, ExecOptions, Project, PROJECTS_CACHE_TTL};
use serde_json::Value;

pub struct ProjectService<R: CommandRunner> {
    executor: Executor<R>,
}

impl<R: CommandRunner> ProjectService<R> {
    pub fn new(executor: Executor<R>) -> Self {
        Self { executor }
    }

    /// Projects visible to the active account, cached for 30 minutes.
    pub async fn list_projects(&self) -> Result<Vec<Project>, ServiceError> {
        let options = ExecOptions::default().cache_ttl(PROJECTS_CACHE_TTL);
        let value = self.executor.execute("projects list", None, &options).await?;
        serde_json::from_value(value).map_err(|e| ServiceError::decode("projects", e))
    }

    /// Look up one project. gcloud may answer with an object or a
    /// one-element array; an empty answer yields `None`.
    pub async fn describe_project(
        &self,
        project_id: &str,
    ) -> Result<Option<Project>, ServiceError> {
        let project_id = project_id.trim();
        if project_id.is_empty() {
            let err = CommandError::Validation("project id must not be empty".to_string());
            return Err(err.into());
        }

        let command = join_args(["projects", "describe", project_id]);
        let value = self
            .executor
            .execute(&command, None, &ExecOptions::default())
            .await?;

        let single = match value {
            Value::Array(items) => items.into_iter().next(),
            Value::Null => None,
            other => Some(other),
        };
        single
            .map(serde_json::from_value)
            .transpose()
            .map_err(|e| ServiceError::decode("project", e))
    }
}

#[cfg(test)]
#[path = "projects_tests.rs"]
mod tests;
