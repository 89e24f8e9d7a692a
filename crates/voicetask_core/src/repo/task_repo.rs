//! Task snapshot repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Persist the full ordered task collection and load it back.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `save_tasks` replaces the whole snapshot atomically.
//! - `load_tasks` returns tasks in saved order.
//! - Read paths reject invalid persisted rows instead of masking them.

use crate::db::DbError;
use crate::model::task::{Task, TaskId, TaskValidationError};
use chrono::NaiveDate;
use log::info;
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

const TASK_SELECT_SQL: &str = "SELECT
    id,
    title,
    description,
    due_date,
    completed
FROM tasks
ORDER BY position ASC, id ASC;";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for task persistence.
#[derive(Debug)]
pub enum RepoError {
    Validation(TaskValidationError),
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted task data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<TaskValidationError> for RepoError {
    fn from(value: TaskValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Storage collaborator for the task collection.
pub trait TaskRepository {
    fn load_tasks(&self) -> RepoResult<Vec<Task>>;
    fn save_tasks(&self, tasks: &[Task]) -> RepoResult<()>;
}

/// SQLite-backed task repository.
pub struct SqliteTaskRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTaskRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl TaskRepository for SqliteTaskRepository<'_> {
    fn load_tasks(&self) -> RepoResult<Vec<Task>> {
        let mut stmt = self.conn.prepare(TASK_SELECT_SQL)?;
        let mut rows = stmt.query([])?;
        let mut tasks = Vec::new();

        while let Some(row) = rows.next()? {
            tasks.push(parse_task_row(row)?);
        }

        Ok(tasks)
    }

    fn save_tasks(&self, tasks: &[Task]) -> RepoResult<()> {
        for task in tasks {
            task.validate()?;
        }

        let tx = self.conn.unchecked_transaction()?;
        tx.execute("DELETE FROM tasks;", [])?;
        {
            let mut insert = tx.prepare(
                "INSERT INTO tasks (
                    id,
                    position,
                    title,
                    description,
                    due_date,
                    completed
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            )?;
            for (position, task) in tasks.iter().enumerate() {
                insert.execute(params![
                    task.id.as_str(),
                    position as i64,
                    task.title.as_str(),
                    task.description.as_deref(),
                    task.due_date.map(format_due_date),
                    bool_to_int(task.completed),
                ])?;
            }
        }
        tx.commit()?;

        info!(
            "event=tasks_save module=repo status=ok count={}",
            tasks.len()
        );
        Ok(())
    }
}

fn parse_task_row(row: &Row<'_>) -> RepoResult<Task> {
    let id: TaskId = row.get("id")?;

    let due_date = match row.get::<_, Option<String>>("due_date")? {
        Some(value) => Some(
            NaiveDate::parse_from_str(&value, DUE_DATE_FORMAT).map_err(|_| {
                RepoError::InvalidData(format!("invalid due date `{value}` in tasks.due_date"))
            })?,
        ),
        None => None,
    };

    let completed = match row.get::<_, i64>("completed")? {
        0 => false,
        1 => true,
        other => {
            return Err(RepoError::InvalidData(format!(
                "invalid completed value `{other}` in tasks.completed"
            )));
        }
    };

    let task = Task {
        id,
        title: row.get("title")?,
        description: row.get("description")?,
        due_date,
        completed,
    };
    task.validate()?;
    Ok(task)
}

fn format_due_date(date: NaiveDate) -> String {
    date.format(DUE_DATE_FORMAT).to_string()
}

fn bool_to_int(value: bool) -> i64 {
    if value {
        1
    } else {
        0
    }
}
