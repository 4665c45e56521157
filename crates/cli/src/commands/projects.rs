// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `gcx projects` - project listing, lookup and selection.

use anyhow::Result;
use clap::{Args, Subcommand};
use gcx_core::Project;
use gcx_engine::epoch_ms;

use super::Context;
use crate::exit_error::{self, ExitError};
use crate::output::{print_fields, print_json, print_list, OutputFormat};
use crate::table::{Column, Table};

#[derive(Args)]
pub struct ProjectsArgs {
    #[command(subcommand)]
    pub command: ProjectsCommand,
}

#[derive(Subcommand)]
pub enum ProjectsCommand {
    /// List projects visible to the active account
    List,
    /// Show one project
    Describe { project_id: String },
    /// Remember a project as the default for later commands
    Use { project_id: String },
    /// Recently selected projects, most recent first
    Recent,
}

pub async fn handle(command: ProjectsCommand, ctx: &Context) -> Result<()> {
    let service = ctx.projects();
    match command {
        ProjectsCommand::List => {
            let projects = match service.list_projects().await {
                Ok(projects) => {
                    if let Some(prefs) = &ctx.prefs {
                        if let Err(e) = prefs.save_projects(&projects, epoch_ms()) {
                            tracing::warn!(error = %e, "failed to save project listing");
                        }
                    }
                    projects
                }
                Err(e) => {
                    let saved = ctx
                        .prefs
                        .as_ref()
                        .and_then(|prefs| prefs.cached_projects(epoch_ms()));
                    let Some(saved) = saved else {
                        return Err(e.into());
                    };
                    tracing::warn!(error = %e, "serving saved project listing");
                    saved
                }
            };
            print_list(&projects, ctx.format, "No projects found", project_table)
        }
        ProjectsCommand::Describe { project_id } => {
            let Some(project) = service.describe_project(&project_id).await? else {
                return Err(ExitError::new(
                    exit_error::PROJECT,
                    format!("project not found: {}", project_id),
                )
                .into());
            };
            match ctx.format {
                OutputFormat::Json => print_json(&project),
                OutputFormat::Text => print_fields(&project_fields(&project)),
            }
        }
        ProjectsCommand::Use { project_id } => {
            let prefs = ctx.prefs()?;
            if service.describe_project(&project_id).await?.is_none() {
                return Err(ExitError::new(
                    exit_error::PROJECT,
                    format!("project not found: {}", project_id),
                )
                .into());
            }
            let saved = prefs.select_project(&project_id, epoch_ms())?;
            match ctx.format {
                OutputFormat::Json => print_json(&saved),
                OutputFormat::Text => {
                    println!("Selected project {}", project_id.trim());
                    Ok(())
                }
            }
        }
        ProjectsCommand::Recent => {
            let prefs = ctx.prefs()?;
            let known = prefs.cached_projects(epoch_ms()).unwrap_or_default();
            let recent = recent_projects(&prefs.recent_projects(), &known);
            print_list(
                &recent,
                ctx.format,
                "No recently used projects",
                project_table,
            )
        }
    }
}

/// Recent ids in order, with details from the saved listing when known.
fn recent_projects(ids: &[String], known: &[Project]) -> Vec<Project> {
    ids.iter()
        .map(|id| {
            known
                .iter()
                .find(|p| &p.project_id == id)
                .cloned()
                .unwrap_or_else(|| Project {
                    project_id: id.clone(),
                    name: String::new(),
                    project_number: String::new(),
                    create_time: None,
                })
        })
        .collect()
}

fn project_table(projects: &[Project]) -> Table {
    let mut table = Table::new(vec![
        Column::left("PROJECT_ID"),
        Column::left("NAME"),
        Column::muted("NUMBER"),
    ]);
    for p in projects {
        table.row(vec![
            p.project_id.clone(),
            p.display_name().to_string(),
            p.project_number.clone(),
        ]);
    }
    table
}

fn project_fields(project: &Project) -> Vec<(&'static str, String)> {
    let mut fields = vec![
        ("Project ID", project.project_id.clone()),
        ("Name", project.display_name().to_string()),
        ("Number", project.project_number.clone()),
    ];
    if let Some(created) = &project.create_time {
        fields.push(("Created", created.clone()));
    }
    fields
}
