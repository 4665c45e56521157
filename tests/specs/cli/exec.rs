//! `gcx exec` specs
//!
//! The executor appends `--project` and `--format=json`, normalizes the
//! output shape and prints pretty JSON.

use crate::prelude::*;
use serde_json::json;

#[test]
fn exec_prints_listing_and_invokes_gcloud_once() {
    let gcloud = FakeGcloud::new()
        .on(
            "compute instances list --project=proj-1 --format=json",
            Reply::json(r#"[{"name":"vm-1"}]"#),
        )
        .install();

    gcloud
        .gcx()
        .args(&["--project", "proj-1", "exec", "compute", "instances", "list"])
        .passes()
        .stdout_eq("[\n  {\n    \"name\": \"vm-1\"\n  }\n]\n");

    assert_eq!(
        gcloud.calls(),
        vec!["compute instances list --project=proj-1 --format=json"]
    );
}

#[test]
fn exec_wraps_single_object_from_list_command() {
    let gcloud = FakeGcloud::new()
        .on(
            "compute zones list --format=json",
            Reply::json(r#"{"name":"us-central1-a"}"#),
        )
        .install();

    gcloud
        .gcx()
        .args(&["exec", "compute", "zones", "list"])
        .passes()
        .stdout_json(json!([{"name": "us-central1-a"}]));
}

#[test]
fn exec_prints_empty_array_for_empty_output() {
    let gcloud = FakeGcloud::new()
        .on("compute disks list --format=json", Reply::json(""))
        .install();

    gcloud
        .gcx()
        .args(&["exec", "compute", "disks", "list"])
        .passes()
        .stdout_json(json!([]));
}

#[test]
fn exec_passes_extra_flags_through() {
    let gcloud = FakeGcloud::new()
        .on(
            "compute instances list --zones=us-east1-b --project=proj-1 --format=json",
            Reply::json("[]"),
        )
        .install();

    gcloud
        .gcx()
        .args(&[
            "exec",
            "--project",
            "proj-1",
            "compute",
            "instances",
            "list",
            "--zones=us-east1-b",
        ])
        .passes()
        .stdout_json(json!([]));
}

#[test]
fn exec_tolerates_unclassified_stderr() {
    let gcloud = FakeGcloud::new()
        .on(
            "config list --format=json",
            Reply::json(r#"{"core":{"account":"dev@example.com"}}"#)
                .with_stderr("Updates are available for some Google Cloud CLI components."),
        )
        .install();

    gcloud
        .gcx()
        .args(&["exec", "config", "list"])
        .passes()
        .stdout_json(json!([{"core": {"account": "dev@example.com"}}]));
}

#[test]
fn exec_keeps_shell_metacharacters_inside_one_argument() {
    let gcloud = FakeGcloud::new()
        .on(
            "compute instances list --filter=name:a b;echo INJECTED >&2 --format=json",
            Reply::json(r#"[{"name":"a b"}]"#),
        )
        .install();

    let run = gcloud
        .gcx()
        .args(&[
            "exec",
            "compute",
            "instances",
            "list",
            "--filter=name:a b;echo INJECTED >&2",
        ])
        .passes()
        .stdout_json(json!([{"name": "a b"}]));

    assert!(!run.stderr().contains("INJECTED"), "stderr: {}", run.stderr());
    assert_eq!(gcloud.arg_counts(), vec![5]);
}

#[test]
fn exec_rejects_explicit_format_flag() {
    let gcloud = FakeGcloud::new().install();

    gcloud
        .gcx()
        .args(&["exec", "compute", "zones", "list", "--format=yaml"])
        .fails()
        .code(2);

    assert!(gcloud.calls().is_empty());
}
