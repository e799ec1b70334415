use std::fs;

use almanac_core::{
    models::{Period, Plan, Task, TaskStatus},
    params::{AddTask, CreatePlan, Id},
    store::write_document,
    AlmanacError, PlanStore, PlannerBuilder,
};
use tempfile::TempDir;

fn sample_plan() -> Plan {
    let mut task = Task::new(1, "Kickoff");
    task.due_date = Some("2025-08-20".to_string());
    task.excerpts = vec!["Meet before the first event.".to_string()];
    let mut plan = Plan::new("2025-2026".parse().unwrap(), Some("Dana".to_string()));
    plan.periods.push(Period::new("Summer", vec![task]));
    plan
}

#[test]
fn test_load_missing_document_is_none() {
    let temp_dir = TempDir::new().unwrap();
    let store = PlanStore::new(temp_dir.path().join("plan.json"));
    assert!(store.load().unwrap().is_none());
    assert!(matches!(
        store.require().unwrap_err(),
        AlmanacError::PlanNotFound { .. }
    ));
}

#[test]
fn test_save_creates_directories_and_round_trips() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("dir").join("plan.json");
    let store = PlanStore::new(&path);

    let plan = sample_plan();
    store.save(&plan).unwrap();

    assert!(path.exists());
    assert!(!path.with_extension("json.tmp").exists());
    assert_eq!(store.require().unwrap(), plan);
}

#[test]
fn test_document_is_readable_json() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("plan.json");
    PlanStore::new(&path).save(&sample_plan()).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("\"term\": \"2025-2026\""));
    assert!(text.contains("\"status\": \"Not-Started\""));
    assert!(!text.contains("attachments"));
}

#[test]
fn test_corrupt_document_is_a_serialization_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("plan.json");
    fs::write(&path, "{ not json").unwrap();

    let err = PlanStore::new(&path).load().unwrap_err();
    assert!(matches!(err, AlmanacError::Serialization { .. }));
}

#[test]
fn test_failed_write_leaves_no_staging_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("plan.json");
    fs::create_dir(&path).unwrap();

    let err = write_document(&path, &sample_plan()).unwrap_err();
    assert!(matches!(err, AlmanacError::FileSystem { .. }));
    assert!(!path.with_extension("json.tmp").exists());
    assert!(path.is_dir());
}

#[test]
fn test_planner_workflow_persists_between_instances() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("plan.json");

    let planner = PlannerBuilder::new()
        .with_document_path(Some(&path))
        .build()
        .unwrap();
    planner
        .create_plan(&CreatePlan {
            term_year: "2025-2026".to_string(),
            chair: None,
            template: false,
        })
        .unwrap();
    let task = planner
        .add_task(&AddTask {
            title: "Order shirts".to_string(),
            due_date: "2025-11-01".to_string(),
            ..Default::default()
        })
        .unwrap();
    planner.remove_task(&Id { id: task.id }).unwrap();

    let reopened = PlannerBuilder::new()
        .with_document_path(Some(&path))
        .build()
        .unwrap();
    let stored = reopened.show_task(&Id { id: task.id }).unwrap();
    assert_eq!(stored.status, TaskStatus::Removed);
    assert_eq!(reopened.document_path(), path.as_path());
}
