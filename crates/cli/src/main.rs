// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! gcx - cached, coalescing gcloud client

mod color;
mod commands;
mod env;
mod exit_error;
mod output;
mod table;

use output::OutputFormat;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{disks, exec, instances, network, projects, zones, Context};
use gcx_adapters::TracedRunner;
use gcx_engine::{epoch_ms, Executor, ExecutorConfig, PrefsStore};

#[derive(Parser)]
#[command(name = "gcx", version, about = "Cached, coalescing gcloud client")]
struct Cli {
    /// gcloud executable (default: GCX_GCLOUD_PATH or `gcloud`)
    #[arg(long, value_name = "PATH", global = true)]
    gcloud_path: Option<String>,

    /// Project to operate on (default: GCX_PROJECT, then the selected project)
    #[arg(long, global = true)]
    project: Option<String>,

    /// Output format
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value_t,
        global = true
    )]
    output: OutputFormat,

    /// Log debug detail to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run any gcloud command and print its JSON output
    Exec(exec::ExecArgs),
    /// VM instances
    Instances(instances::InstancesArgs),
    /// Persistent disks
    Disks(disks::DisksArgs),
    /// Zones available to the project
    Zones,
    /// VPC networks, subnets, addresses and firewall rules
    Network(network::NetworkArgs),
    /// Projects
    Projects(projects::ProjectsArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli).await {
        let code = exit_error::exit_code(&e);
        let msg = format_error(&e);
        if !msg.is_empty() {
            eprintln!("Error: {}", msg);
        }
        std::process::exit(code);
    }
}

/// Log to stderr so stdout stays machine-readable.
fn init_logging(verbose: bool) {
    use std::io::IsTerminal;
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal()),
        )
        .try_init();
}

/// Format an anyhow error, deduplicating the chain.
///
/// If the top-level message already contains every source message the
/// chain is skipped; otherwise it is rendered like anyhow's Debug output.
fn format_error(err: &anyhow::Error) -> String {
    let top = err.to_string();

    let chain_redundant = err
        .chain()
        .skip(1)
        .all(|cause| top.contains(&cause.to_string()));
    if chain_redundant {
        return top;
    }

    let mut buf = top;
    for (i, cause) in err.chain().skip(1).enumerate() {
        buf.push_str(&format!("\n\nCaused by:\n    {}: {}", i, cause));
    }
    buf
}

fn build_context(cli: &Cli) -> Context {
    let mut config = ExecutorConfig::from_env();
    if let Some(path) = &cli.gcloud_path {
        config = config.with_gcloud_path(path.clone());
    }
    tracing::debug!(
        gcloud_path = %config.gcloud_path,
        shell = %config.shell,
        "resolved executor config"
    );
    let runner = TracedRunner::new(config.shell_runner());
    let prefs = PrefsStore::from_env();
    let project = cli.project.clone().or_else(env::project).or_else(|| {
        prefs
            .as_ref()
            .and_then(|prefs| prefs.selected_project(epoch_ms()))
    });
    Context {
        executor: Executor::new(runner, config),
        project,
        format: cli.output,
        prefs,
    }
}

async fn run(cli: Cli) -> Result<()> {
    let ctx = build_context(&cli);
    match cli.command {
        Commands::Exec(args) => exec::handle(args, &ctx).await,
        Commands::Instances(args) => instances::handle(args.command, &ctx).await,
        Commands::Disks(args) => disks::handle(args, &ctx).await,
        Commands::Zones => zones::handle(&ctx).await,
        Commands::Network(args) => network::handle(args.command, &ctx).await,
        Commands::Projects(args) => projects::handle(args.command, &ctx).await,
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
