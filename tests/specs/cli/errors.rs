//! Error reporting and exit code specs
//!
//! Classified gcloud failures map to distinct exit codes; only process
//! failures are retried.

use crate::prelude::*;

const LIST: &str = "compute instances list --project=proj-1 --format=json";

#[test]
fn auth_failure_exits_3_without_retry() {
    let gcloud = FakeGcloud::new()
        .on(
            LIST,
            Reply::fail(1, "ERROR: (gcloud.compute.instances.list) You are not authenticated."),
        )
        .install();

    gcloud
        .gcx()
        .args(&["--project", "proj-1", "instances", "list"])
        .fails()
        .code(3)
        .stderr_has("Error: authentication required");

    assert_eq!(gcloud.calls().len(), 1);
}

#[test]
fn project_failure_exits_4() {
    let gcloud = FakeGcloud::new()
        .on(
            LIST,
            Reply::fail(1, "ERROR: The project does not exist or you lack access."),
        )
        .install();

    gcloud
        .gcx()
        .args(&["--project", "proj-1", "instances", "list"])
        .fails()
        .code(4)
        .stderr_has("Error: project error");

    assert_eq!(gcloud.calls().len(), 1);
}

#[test]
fn missing_project_exits_2_without_calling_gcloud() {
    let gcloud = FakeGcloud::new().install();

    gcloud
        .gcx()
        .args(&["instances", "list"])
        .fails()
        .code(2)
        .stderr_has("Error: no project specified");

    assert!(gcloud.calls().is_empty());
}

#[test]
fn project_can_come_from_the_environment() {
    let gcloud = FakeGcloud::new().on(LIST, Reply::json("[]")).install();

    gcloud
        .gcx()
        .env("GCX_PROJECT", "proj-1")
        .args(&["instances", "list"])
        .passes()
        .stdout_eq("No instances found\n");
}

#[test]
fn process_failure_is_retried_once_then_exits_1() {
    let gcloud = FakeGcloud::new()
        .on(LIST, Reply::fail(2, "ERROR: connection reset by peer"))
        .install();

    gcloud
        .gcx()
        .args(&["--project", "proj-1", "instances", "list"])
        .fails()
        .code(1)
        .stderr_has("Error: command failed");

    assert_eq!(gcloud.calls(), vec![LIST, LIST]);
}

#[test]
fn unparseable_output_exits_1_without_retry() {
    let gcloud = FakeGcloud::new()
        .on(LIST, Reply::json("Listed 0 items."))
        .install();

    gcloud
        .gcx()
        .args(&["--project", "proj-1", "instances", "list"])
        .fails()
        .code(1)
        .stderr_has("Error: failed to parse output");

    assert_eq!(gcloud.calls().len(), 1);
}

#[test]
fn exec_rejects_explicit_format_flag() {
    let gcloud = FakeGcloud::new().install();

    gcloud
        .gcx()
        .args(&["exec", "compute", "zones", "list", "--format=yaml"])
        .fails()
        .code(2)
        .stderr_has("--format is always json");

    assert!(gcloud.calls().is_empty());
}

#[test]
fn missing_gcloud_binary_exits_1() {
    cli()
        .env("GCX_GCLOUD_PATH", "/nonexistent/gcloud")
        .args(&["exec", "--retries", "0", "compute", "zones", "list"])
        .fails()
        .code(1)
        .stderr_has("Error:");
}
