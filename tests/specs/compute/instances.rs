//! `gcx instances` specs

use crate::prelude::*;
use serde_json::json;

const LIST: &str = "compute instances list --project=proj-1 --format=json";

const INSTANCES: &str = r#"[
  {
    "name": "web-1",
    "id": "101",
    "zone": "https://www.googleapis.com/compute/v1/projects/proj-1/zones/us-east1-b",
    "machineType": "https://www.googleapis.com/compute/v1/projects/proj-1/zones/us-east1-b/machineTypes/e2-medium",
    "status": "RUNNING",
    "creationTimestamp": "2026-01-02T03:04:05.000-07:00"
  },
  {
    "name": "batch-worker",
    "id": "102",
    "zone": "https://www.googleapis.com/compute/v1/projects/proj-1/zones/europe-west1-c",
    "machineType": "https://www.googleapis.com/compute/v1/projects/proj-1/zones/europe-west1-c/machineTypes/n2-standard-8",
    "status": "TERMINATED",
    "creationTimestamp": "2026-02-03T04:05:06.000-07:00"
  }
]"#;

#[test]
fn list_prints_aligned_table() {
    let gcloud = FakeGcloud::new().on(LIST, Reply::json(INSTANCES)).install();

    gcloud
        .gcx()
        .args(&["--project", "proj-1", "instances", "list"])
        .passes()
        .stdout_eq(
            "NAME          ZONE            MACHINE_TYPE   STATUS\n\
             web-1         us-east1-b      e2-medium      RUNNING\n\
             batch-worker  europe-west1-c  n2-standard-8  TERMINATED\n",
        );
}

#[test]
fn list_json_output_is_an_array_of_instances() {
    let gcloud = FakeGcloud::new().on(LIST, Reply::json(INSTANCES)).install();

    let run = gcloud
        .gcx()
        .args(&["--project", "proj-1", "-o", "json", "instances", "list"])
        .passes();

    let value: serde_json::Value = serde_json::from_str(&run.stdout()).unwrap();
    let names: Vec<&str> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["web-1", "batch-worker"]);
}

#[test]
fn list_with_zone_passes_zone_filter() {
    let gcloud = FakeGcloud::new()
        .on(
            "compute instances list --zones=us-east1-b --project=proj-1 --format=json",
            Reply::json("[]"),
        )
        .install();

    gcloud
        .gcx()
        .args(&["--project", "proj-1", "instances", "list", "--zone", "us-east1-b"])
        .passes()
        .stdout_eq("No instances found\n");
}

#[test]
fn describe_prints_fields() {
    let gcloud = FakeGcloud::new()
        .on(
            "compute instances describe web-1 --zone=us-east1-b --project=proj-1 --format=json",
            Reply::json(
                r#"{"name":"web-1","id":"101","zone":"projects/proj-1/zones/us-east1-b",
                    "machineType":"zones/us-east1-b/machineTypes/e2-medium","status":"RUNNING",
                    "creationTimestamp":"2026-01-02T03:04:05.000-07:00"}"#,
            ),
        )
        .install();

    gcloud
        .gcx()
        .args(&[
            "--project",
            "proj-1",
            "instances",
            "describe",
            "web-1",
            "--zone",
            "us-east1-b",
        ])
        .passes()
        .stdout_eq(
            "Name:         web-1\n\
             ID:           101\n\
             Zone:         us-east1-b\n\
             Machine type: e2-medium\n\
             Status:       RUNNING\n\
             Created:      2026-01-02T03:04:05.000-07:00\n",
        );
}

#[test]
fn stop_reports_the_power_change() {
    let gcloud = FakeGcloud::new()
        .on(
            "compute instances stop web-1 --zone=us-east1-b --project=proj-1 --format=json",
            Reply::json(r#"[{"name":"web-1","status":"TERMINATED"}]"#),
        )
        .install();

    gcloud
        .gcx()
        .args(&[
            "--project",
            "proj-1",
            "instances",
            "stop",
            "web-1",
            "--zone",
            "us-east1-b",
        ])
        .passes()
        .stdout_eq("Stopped instance web-1 (us-east1-b)\n");
}

#[test]
fn start_json_prints_gcloud_result() {
    let gcloud = FakeGcloud::new()
        .on(
            "compute instances start web-1 --zone=us-east1-b --project=proj-1 --format=json",
            Reply::json(r#"[{"name":"web-1","status":"RUNNING"}]"#),
        )
        .install();

    gcloud
        .gcx()
        .args(&[
            "--project",
            "proj-1",
            "-o",
            "json",
            "instances",
            "start",
            "web-1",
            "--zone",
            "us-east1-b",
        ])
        .passes()
        .stdout_json(json!([{"name": "web-1", "status": "RUNNING"}]));
}

#[test]
fn create_runs_once_and_relists_instances() {
    let gcloud = FakeGcloud::new()
        .on(
            "compute instances create web-2 --zone=us-east1-b --machine-type=e2-small \
             --image-project=debian-cloud --tags=http,ssh --project=proj-1 --format=json",
            Reply::json(r#"[{"name":"web-2"}]"#),
        )
        .install();

    gcloud
        .gcx()
        .args(&[
            "--project",
            "proj-1",
            "instances",
            "create",
            "web-2",
            "--zone",
            "us-east1-b",
            "--machine-type",
            "e2-small",
            "--tags",
            "http,ssh",
        ])
        .passes()
        .stdout_eq("Created instance web-2 (us-east1-b)\n");

    assert_eq!(gcloud.calls().len(), 1);
}

#[test]
fn failed_create_is_not_retried() {
    let gcloud = FakeGcloud::new()
        .on(
            "compute instances create web-2 --zone=us-east1-b --machine-type=e2-medium \
             --image-project=debian-cloud --project=proj-1 --format=json",
            Reply::fail(1, "ERROR: (gcloud.compute.instances.create) already exists"),
        )
        .install();

    gcloud
        .gcx()
        .args(&["--project", "proj-1", "instances", "create", "web-2", "--zone", "us-east1-b"])
        .fails()
        .code(1)
        .stderr_has("already exists");

    assert_eq!(gcloud.calls().len(), 1);
}

#[test]
fn create_with_invalid_name_never_calls_gcloud() {
    let gcloud = FakeGcloud::new().install();

    gcloud
        .gcx()
        .args(&["--project", "proj-1", "instances", "create", "Web_2", "--zone", "us-east1-b"])
        .fails()
        .code(2)
        .stderr_has("invalid instance name");

    assert!(gcloud.calls().is_empty());
}
