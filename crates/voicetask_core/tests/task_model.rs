use chrono::NaiveDate;
use std::collections::HashSet;
use voicetask_core::{new_task_id, Task, TaskEdit, TaskValidationError};

#[test]
fn task_new_sets_defaults() {
    let task = Task::new("  Buy milk ");

    assert!(!task.id.is_empty());
    assert_eq!(task.title, "Buy milk");
    assert_eq!(task.description, None);
    assert_eq!(task.due_date, None);
    assert!(!task.completed);
}

#[test]
fn generated_ids_are_unique_in_rapid_succession() {
    let ids = (0..2_000).map(|_| new_task_id()).collect::<HashSet<_>>();
    assert_eq!(ids.len(), 2_000);
}

#[test]
fn validate_rejects_titles_that_normalize_to_empty() {
    for title in ["", "   ", "and", ", ;"] {
        let task = Task::with_id("t-1", title);
        assert_eq!(task.validate(), Err(TaskValidationError::EmptyTitle), "{title:?}");
    }
    assert!(Task::with_id("t-2", "call mom").validate().is_ok());
}

#[test]
fn serialization_uses_expected_wire_fields() {
    let task = Task::with_id("01890a5d-ac96-774b-bcce-b302099a8057", "Pay rent")
        .with_description("landlord portal")
        .with_due_date(NaiveDate::from_ymd_opt(2025, 3, 1));

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["id"], "01890a5d-ac96-774b-bcce-b302099a8057");
    assert_eq!(json["title"], "Pay rent");
    assert_eq!(json["description"], "landlord portal");
    assert_eq!(json["due_date"], "2025-03-01");
    assert_eq!(json["completed"], false);

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}

#[test]
fn deserialize_defaults_optional_fields() {
    let value = serde_json::json!({ "id": "abc", "title": "Walk the dog" });
    let task: Task = serde_json::from_value(value).unwrap();

    assert_eq!(task.description, None);
    assert_eq!(task.due_date, None);
    assert!(!task.completed);
}

#[test]
fn edit_updates_and_clears_fields() {
    let task = Task::with_id("t-1", "Draft")
        .with_description("old")
        .with_due_date(NaiveDate::from_ymd_opt(2025, 1, 1));
    let edit = TaskEdit {
        title: Some(" Final ".to_string()),
        description: Some(None),
        due_date: None,
    };

    let updated = edit.apply_to(&task).unwrap();
    assert_eq!(updated.title, "Final");
    assert_eq!(updated.description, None);
    assert_eq!(updated.due_date, task.due_date);

    let blank = TaskEdit {
        title: Some("  ".to_string()),
        ..TaskEdit::default()
    };
    assert_eq!(blank.apply_to(&task), Err(TaskValidationError::EmptyTitle));
}
