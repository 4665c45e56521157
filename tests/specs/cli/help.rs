//! CLI help output specs

use crate::prelude::*;

#[test]
fn gcx_help_lists_commands() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("Usage:")
        .stdout_has("exec")
        .stdout_has("instances")
        .stdout_has("disks")
        .stdout_has("zones")
        .stdout_has("network")
        .stdout_has("projects");
}

#[test]
fn gcx_instances_help_shows_subcommands() {
    cli()
        .args(&["instances", "--help"])
        .passes()
        .stdout_has("list")
        .stdout_has("describe")
        .stdout_has("start")
        .stdout_has("stop")
        .stdout_has("create");
}

#[test]
fn gcx_without_command_is_a_usage_error() {
    cli().fails().code(2).stderr_has("Usage:");
}
