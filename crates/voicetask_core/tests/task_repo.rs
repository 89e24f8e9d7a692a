use chrono::NaiveDate;
use voicetask_core::db::open_db_in_memory;
use voicetask_core::{RepoError, SqliteTaskRepository, Task, TaskRepository, TaskValidationError};

fn sample_tasks() -> Vec<Task> {
    let mut done = Task::with_id("b", "Call mom").with_description("about sunday lunch");
    done.completed = true;
    vec![
        Task::with_id("c", "Pay rent").with_due_date(NaiveDate::from_ymd_opt(2025, 1, 1)),
        done,
        Task::with_id("a", "Walk the dog"),
    ]
}

#[test]
fn save_and_load_preserves_order_and_fields() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTaskRepository::new(&conn);
    let tasks = sample_tasks();

    repo.save_tasks(&tasks).unwrap();
    assert_eq!(repo.load_tasks().unwrap(), tasks);
}

#[test]
fn save_replaces_previous_snapshot() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTaskRepository::new(&conn);

    repo.save_tasks(&sample_tasks()).unwrap();
    let remaining = vec![Task::with_id("z", "Only one left")];
    repo.save_tasks(&remaining).unwrap();

    assert_eq!(repo.load_tasks().unwrap(), remaining);

    repo.save_tasks(&[]).unwrap();
    assert!(repo.load_tasks().unwrap().is_empty());
}

#[test]
fn schema_holds_only_task_fields() {
    let conn = open_db_in_memory().unwrap();
    let mut stmt = conn.prepare("SELECT name FROM pragma_table_info('tasks');").unwrap();
    let columns = stmt
        .query_map([], |row| row.get::<_, String>(0))
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    assert_eq!(
        columns,
        vec!["id", "position", "title", "description", "due_date", "completed"]
    );
}

#[test]
fn save_rejects_invalid_task_without_writing() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTaskRepository::new(&conn);
    repo.save_tasks(&sample_tasks()).unwrap();

    let invalid = Task {
        id: "bad".to_string(),
        title: "and".to_string(),
        description: None,
        due_date: None,
        completed: false,
    };
    let err = repo.save_tasks(&[invalid]).unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(TaskValidationError::EmptyTitle)
    ));
    assert_eq!(repo.load_tasks().unwrap().len(), 3);
}

#[test]
fn load_rejects_corrupt_rows() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO tasks (id, position, title, due_date) VALUES ('x', 0, 'Pay rent', 'soon');",
        [],
    )
    .unwrap();

    let repo = SqliteTaskRepository::new(&conn);
    match repo.load_tasks().unwrap_err() {
        RepoError::InvalidData(message) => assert!(message.contains("soon")),
        other => panic!("unexpected error: {other}"),
    }
}
