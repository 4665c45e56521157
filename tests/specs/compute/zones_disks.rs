//! `gcx zones` and `gcx disks` specs

use crate::prelude::*;
use serde_json::json;

#[test]
fn zones_prints_region_names() {
    let gcloud = FakeGcloud::new()
        .on(
            "compute zones list --project=proj-1 --format=json",
            Reply::json(
                r#"[{"name":"us-east1-b","region":"https://www.googleapis.com/compute/v1/projects/proj-1/regions/us-east1","status":"UP"},
                    {"name":"europe-west1-c","region":"regions/europe-west1","status":"DOWN"}]"#,
            ),
        )
        .install();

    gcloud
        .gcx()
        .args(&["--project", "proj-1", "zones"])
        .passes()
        .stdout_eq(
            "NAME            REGION        STATUS\n\
             us-east1-b      us-east1      UP\n\
             europe-west1-c  europe-west1  DOWN\n",
        );
}

#[test]
fn zones_empty_listing() {
    let gcloud = FakeGcloud::new()
        .on("compute zones list --project=proj-1 --format=json", Reply::json(""))
        .install();

    gcloud
        .gcx()
        .args(&["--project", "proj-1", "zones"])
        .passes()
        .stdout_eq("No zones found\n");
}

#[test]
fn disks_prints_table_with_short_users() {
    let gcloud = FakeGcloud::new()
        .on(
            "compute disks list --project=proj-1 --format=json",
            Reply::json(
                r#"[{"name":"web-1","zone":"projects/proj-1/zones/us-east1-b","sizeGb":"10",
                     "type":"projects/proj-1/zones/us-east1-b/diskTypes/pd-balanced","status":"READY",
                     "users":["projects/proj-1/zones/us-east1-b/instances/web-1"]},
                    {"name":"scratch","zone":"projects/proj-1/zones/us-east1-b","sizeGb":"500",
                     "type":"projects/proj-1/zones/us-east1-b/diskTypes/pd-ssd","status":"READY"}]"#,
            ),
        )
        .install();

    gcloud
        .gcx()
        .args(&["--project", "proj-1", "disks"])
        .passes()
        .stdout_eq(
            "NAME     ZONE        SIZE_GB  TYPE         STATUS  USERS\n\
             web-1    us-east1-b       10  pd-balanced  READY   web-1\n\
             scratch  us-east1-b      500  pd-ssd       READY   \n",
        );
}

#[test]
fn disks_json_keeps_gcloud_field_names() {
    let gcloud = FakeGcloud::new()
        .on(
            "compute disks list --zones=us-east1-b --project=proj-1 --format=json",
            Reply::json(
                r#"{"name":"web-1","zone":"us-east1-b","sizeGb":"10","type":"pd-ssd","status":"READY"}"#,
            ),
        )
        .install();

    gcloud
        .gcx()
        .args(&["--project", "proj-1", "-o", "json", "disks", "--zone", "us-east1-b"])
        .passes()
        .stdout_json(json!([{
            "name": "web-1",
            "zone": "us-east1-b",
            "sizeGb": "10",
            "type": "pd-ssd",
            "status": "READY",
            "users": []
        }]));
}
