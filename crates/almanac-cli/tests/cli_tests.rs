use std::{fs, path::Path};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color and the given plan file
fn almanac_cmd(plan_path: &Path) -> Command {
    let mut cmd = Command::cargo_bin("almanac").expect("Failed to find almanac binary");
    cmd.arg("--no-color")
        .arg("--plan-file")
        .arg(plan_path);
    cmd
}

/// Creates an empty 2025-2026 plan and adds tasks due in Sep, Dec and Mar, so
/// the plan ends up with one "General" period holding all three.
fn seed_plan(plan_path: &Path) {
    almanac_cmd(plan_path)
        .args(["plan", "create", "2025-2026", "--chair", "Dana"])
        .assert()
        .success();
    for (title, due) in [
        ("Welcome night", "2025-09-15"),
        ("Holiday party", "2025-12-10"),
        ("Spring fair", "2026-03-01"),
    ] {
        almanac_cmd(plan_path)
            .args(["task", "add", title, "--due", due])
            .assert()
            .success();
    }
}

#[test]
fn test_cli_create_plan_from_template() {
    let temp_dir = create_cli_test_environment();
    let plan_path = temp_dir.path().join("plan.json");

    almanac_cmd(&plan_path)
        .args(["plan", "create", "2025-2026", "--template", "--chair", "Dana"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created plan for term 2025-2026"))
        .stdout(predicate::str::contains("- Chair: Dana"))
        .stdout(predicate::str::contains("## Summer Kickoff"));

    assert!(plan_path.exists());
}

#[test]
fn test_cli_create_plan_rejects_bad_term() {
    let temp_dir = create_cli_test_environment();
    let plan_path = temp_dir.path().join("plan.json");

    almanac_cmd(&plan_path)
        .args(["plan", "create", "2025-2027"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid term year"));
}

#[test]
fn test_cli_show_without_plan() {
    let temp_dir = create_cli_test_environment();
    let plan_path = temp_dir.path().join("plan.json");

    almanac_cmd(&plan_path)
        .args(["plan", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No plan found"));
}

#[test]
fn test_cli_add_task_to_empty_plan() {
    let temp_dir = create_cli_test_environment();
    let plan_path = temp_dir.path().join("plan.json");

    almanac_cmd(&plan_path)
        .args(["plan", "create", "2025-2026"])
        .assert()
        .success();

    almanac_cmd(&plan_path)
        .args([
            "task",
            "add",
            "Book the hall",
            "--due",
            "2025-10-01",
            "--priority",
            "high",
            "--responsible",
            "Treasurer",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added task with ID: 1"))
        .stdout(predicate::str::contains("- Priority: High"))
        .stdout(predicate::str::contains("- Source: User Added"));

    almanac_cmd(&plan_path)
        .args(["plan", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## General"))
        .stdout(predicate::str::contains("- 1. Book the hall"));
}

#[test]
fn test_cli_add_task_rejects_due_before_start() {
    let temp_dir = create_cli_test_environment();
    let plan_path = temp_dir.path().join("plan.json");
    seed_plan(&plan_path);

    almanac_cmd(&plan_path)
        .args([
            "task",
            "add",
            "Backwards",
            "--start",
            "2025-10-05",
            "--due",
            "2025-10-01",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("due_date"));
}

#[test]
fn test_cli_update_task() {
    let temp_dir = create_cli_test_environment();
    let plan_path = temp_dir.path().join("plan.json");
    seed_plan(&plan_path);

    almanac_cmd(&plan_path)
        .args(["task", "update", "2", "--status", "in-progress"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated task with ID: 2"))
        .stdout(predicate::str::contains("- Updated status"))
        .stdout(predicate::str::contains("➤ In Progress"));
}

#[test]
fn test_cli_update_unknown_task() {
    let temp_dir = create_cli_test_environment();
    let plan_path = temp_dir.path().join("plan.json");
    seed_plan(&plan_path);

    almanac_cmd(&plan_path)
        .args(["task", "update", "42", "--title", "Ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Task with ID 42 not found"));
}

#[test]
fn test_cli_remove_and_restore() {
    let temp_dir = create_cli_test_environment();
    let plan_path = temp_dir.path().join("plan.json");
    seed_plan(&plan_path);

    almanac_cmd(&plan_path)
        .args(["task", "remove", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Success: Removed task 3: Spring fair"));

    almanac_cmd(&plan_path)
        .args(["task", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Spring fair").not());

    almanac_cmd(&plan_path)
        .args(["task", "list", "--include-removed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✗ Removed"));

    almanac_cmd(&plan_path)
        .args(["task", "update", "3", "--status", "completed"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot move task from Removed to Completed"));

    almanac_cmd(&plan_path)
        .args(["task", "restore", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("○ Not Started"));
}

#[test]
fn test_cli_remove_twice_reports_failure_status() {
    let temp_dir = create_cli_test_environment();
    let plan_path = temp_dir.path().join("plan.json");
    seed_plan(&plan_path);

    almanac_cmd(&plan_path)
        .args(["task", "rm", "1"])
        .assert()
        .success();

    almanac_cmd(&plan_path)
        .args(["task", "rm", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: Task 1 was already removed"));
}

#[test]
fn test_cli_list_filters() {
    let temp_dir = create_cli_test_environment();
    let plan_path = temp_dir.path().join("plan.json");
    seed_plan(&plan_path);

    almanac_cmd(&plan_path)
        .args(["task", "update", "1", "--status", "completed"])
        .assert()
        .success();

    almanac_cmd(&plan_path)
        .args(["task", "list", "--status", "completed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- 1. Welcome night"))
        .stdout(predicate::str::contains("Holiday party").not());

    almanac_cmd(&plan_path)
        .args(["task", "list", "--responsible", "nobody"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No tasks found."));
}

#[test]
fn test_cli_views() {
    let temp_dir = create_cli_test_environment();
    let plan_path = temp_dir.path().join("plan.json");
    seed_plan(&plan_path);

    almanac_cmd(&plan_path)
        .arg("dashboard")
        .assert()
        .success()
        .stdout(predicate::str::contains("# Dashboard: 2025-2026"))
        .stdout(predicate::str::contains("0/3 completed"));

    almanac_cmd(&plan_path)
        .arg("kanban")
        .assert()
        .success()
        .stdout(predicate::str::contains("## ○ Not Started (3)"));

    almanac_cmd(&plan_path)
        .arg("timeline")
        .assert()
        .success()
        .stdout(predicate::str::contains("# Timeline: 2025-2026"))
        .stdout(predicate::str::contains("Aug Sep Oct"))
        .stdout(predicate::str::contains("| Holiday party"));
}

#[test]
fn test_cli_defaults_to_dashboard() {
    let temp_dir = create_cli_test_environment();
    let plan_path = temp_dir.path().join("plan.json");
    seed_plan(&plan_path);

    almanac_cmd(&plan_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("# Dashboard"));
}

#[test]
fn test_cli_export_and_import() {
    let temp_dir = create_cli_test_environment();
    let plan_path = temp_dir.path().join("plan.json");
    let export_path = temp_dir.path().join("backup").join("plan.json");
    seed_plan(&plan_path);

    almanac_cmd(&plan_path)
        .args(["plan", "export", export_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Success: Exported plan for term 2025-2026"));

    let other_path = temp_dir.path().join("other.json");
    almanac_cmd(&other_path)
        .args(["plan", "import", export_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("with 3 task(s)"));

    almanac_cmd(&other_path)
        .args(["task", "show", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("### 2. Holiday party"));
}

#[test]
fn test_cli_import_outline() {
    let temp_dir = create_cli_test_environment();
    let plan_path = temp_dir.path().join("plan.json");
    seed_plan(&plan_path);

    let outline = temp_dir.path().join("outline.json");
    fs::write(
        &outline,
        r#"{"periods": [{"name": "Fall", "tasks": [
            {"title": "Recruit volunteers", "due_date": "2025-09-30"}
        ]}]}"#,
    )
    .unwrap();

    almanac_cmd(&plan_path)
        .args(["plan", "import", outline.to_str().unwrap()])
        .assert()
        .success();

    almanac_cmd(&plan_path)
        .args(["plan", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# 2025-2026 Plan"))
        .stdout(predicate::str::contains("- 1. Recruit volunteers"));
}

#[test]
fn test_cli_term_relative_filing() {
    let temp_dir = create_cli_test_environment();
    let plan_path = temp_dir.path().join("plan.json");

    fs::write(
        &plan_path,
        r#"{"term": "2025-2026", "periods": [
            {"name": "Fall", "tasks": [{"id": 1, "title": "Kickoff", "due_date": "2025-09-01"}]},
            {"name": "Winter", "tasks": [{"id": 2, "title": "Party", "due_date": "2025-12-01"}]}
        ]}"#,
    )
    .unwrap();

    almanac_cmd(&plan_path)
        .args(["--term-relative", "task", "add", "Budget", "--due", "2026-01-20"])
        .assert()
        .success();

    let plan: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&plan_path).unwrap()).unwrap();
    assert_eq!(plan["periods"][1]["tasks"][1]["title"], "Budget");
}
