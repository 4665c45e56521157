//! `gcx projects` specs
//!
//! Project commands don't need `--project`.

use crate::prelude::*;
use serde_json::json;

#[test]
fn list_prints_projects() {
    let gcloud = FakeGcloud::new()
        .on(
            "projects list --format=json",
            Reply::json(
                r#"[{"projectId":"proj-1","name":"Storefront","projectNumber":"1234"},
                    {"projectId":"sandbox-42","projectNumber":"99"}]"#,
            ),
        )
        .install();

    gcloud
        .gcx()
        .args(&["projects", "list"])
        .passes()
        .stdout_eq(
            "PROJECT_ID  NAME        NUMBER\n\
             proj-1      Storefront  1234\n\
             sandbox-42  sandbox-42  99\n",
        );
}

#[test]
fn describe_accepts_one_element_array() {
    let gcloud = FakeGcloud::new()
        .on(
            "projects describe proj-1 --format=json",
            Reply::json(
                r#"[{"projectId":"proj-1","name":"Storefront","projectNumber":"1234","createTime":"2025-05-01T00:00:00Z"}]"#,
            ),
        )
        .install();

    gcloud
        .gcx()
        .args(&["-o", "json", "projects", "describe", "proj-1"])
        .passes()
        .stdout_json(json!({
            "projectId": "proj-1",
            "name": "Storefront",
            "projectNumber": "1234",
            "createTime": "2025-05-01T00:00:00Z"
        }));
}

#[test]
fn describe_prints_fields() {
    let gcloud = FakeGcloud::new()
        .on(
            "projects describe proj-1 --format=json",
            Reply::json(r#"{"projectId":"proj-1","name":"Storefront","projectNumber":"1234"}"#),
        )
        .install();

    gcloud
        .gcx()
        .args(&["projects", "describe", "proj-1"])
        .passes()
        .stdout_eq(
            "Project ID: proj-1\n\
             Name:       Storefront\n\
             Number:     1234\n",
        );
}

#[test]
fn describe_empty_answer_exits_4() {
    let gcloud = FakeGcloud::new()
        .on("projects describe ghost --format=json", Reply::json(""))
        .install();

    gcloud
        .gcx()
        .args(&["projects", "describe", "ghost"])
        .fails()
        .code(4)
        .stderr_has("Error: project not found: ghost");
}

const DESCRIBE_PROJ_1: &str = "projects describe proj-1 --format=json";
const PROJ_1: &str = r#"{"projectId":"proj-1","name":"Storefront","projectNumber":"1234"}"#;

#[test]
fn use_remembers_project_for_later_commands() {
    let gcloud = FakeGcloud::new()
        .on(DESCRIBE_PROJ_1, Reply::json(PROJ_1))
        .on(
            "compute zones list --project=proj-1 --format=json",
            Reply::json(r#"[{"name":"us-east1-b","region":"regions/us-east1","status":"UP"}]"#),
        )
        .install();

    gcloud
        .gcx()
        .args(&["projects", "use", "proj-1"])
        .passes()
        .stdout_eq("Selected project proj-1\n");
    gcloud.gcx().args(&["zones"]).passes().stdout_has("us-east1-b");

    assert!(gcloud.state_dir().join("prefs.json").exists());
}

#[test]
fn explicit_project_wins_over_selected_one() {
    let gcloud = FakeGcloud::new()
        .on(DESCRIBE_PROJ_1, Reply::json(PROJ_1))
        .on(
            "compute disks list --project=other --format=json",
            Reply::json("[]"),
        )
        .install();

    gcloud.gcx().args(&["projects", "use", "proj-1"]).passes();
    gcloud
        .gcx()
        .args(&["--project", "other", "disks"])
        .passes()
        .stdout_eq("No disks found\n");
}

#[test]
fn use_rejects_unknown_project() {
    let gcloud = FakeGcloud::new()
        .on("projects describe ghost --format=json", Reply::json(""))
        .install();

    gcloud
        .gcx()
        .args(&["projects", "use", "ghost"])
        .fails()
        .code(4)
        .stderr_has("Error: project not found: ghost");

    assert!(!gcloud.state_dir().join("prefs.json").exists());
}

#[test]
fn recent_lists_selected_projects_with_saved_details() {
    let gcloud = FakeGcloud::new()
        .on(
            "projects list --format=json",
            Reply::json(r#"[{"projectId":"proj-1","name":"Storefront","projectNumber":"1234"}]"#),
        )
        .on(DESCRIBE_PROJ_1, Reply::json(PROJ_1))
        .on(
            "projects describe sandbox-42 --format=json",
            Reply::json(r#"{"projectId":"sandbox-42"}"#),
        )
        .install();

    gcloud.gcx().args(&["projects", "list"]).passes();
    gcloud
        .gcx()
        .env("GCX_RECENT_PROJECTS", "5")
        .args(&["projects", "use", "proj-1"])
        .passes();
    gcloud
        .gcx()
        .env("GCX_RECENT_PROJECTS", "5")
        .args(&["projects", "use", "sandbox-42"])
        .passes();

    gcloud
        .gcx()
        .env("GCX_RECENT_PROJECTS", "5")
        .args(&["projects", "recent"])
        .passes()
        .stdout_eq(
            "PROJECT_ID  NAME        NUMBER\n\
             sandbox-42  sandbox-42  \n\
             proj-1      Storefront  1234\n",
        );
}

#[test]
fn recent_is_empty_before_any_selection() {
    let gcloud = FakeGcloud::new().install();

    gcloud
        .gcx()
        .args(&["projects", "recent"])
        .passes()
        .stdout_eq("No recently used projects\n");
    assert!(gcloud.calls().is_empty());
}

#[test]
fn failed_listing_serves_saved_projects() {
    let gcloud = FakeGcloud::new()
        .on(
            "projects list --format=json",
            Reply::json(r#"[{"projectId":"proj-1","name":"Storefront","projectNumber":"1234"}]"#),
        )
        .install();
    gcloud.gcx().args(&["projects", "list"]).passes();

    // gcloud now fails every call; the saved listing is still fresh
    let broken = FakeGcloud::new().install();
    broken
        .gcx()
        .env("GCX_STATE_DIR", gcloud.state_dir())
        .args(&["projects", "list"])
        .passes()
        .stdout_has("Storefront");
}
