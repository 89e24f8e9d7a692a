//! VoiceTask command-line driver.
//!
//! # Responsibility
//! - Feed transcripts from arguments or stdin into the core pipeline.
//! - Offer manual task commands against the same SQLite snapshot the app uses.

use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use voicetask_core::db::open_db;
use voicetask_core::{
    init_logging, resolve_due_date, segment_transcript, CoreConfig, NewTaskRequest,
    SqliteTaskRepository, Task, TaskFilter, TaskService,
};

/// voicetask - turn spoken notes into dated tasks
#[derive(Parser, Debug)]
#[command(name = "voicetask")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Task database file
    #[arg(long, global = true, env = "VOICETASK_DB_PATH")]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the task phrases found in a transcript without storing them
    Segment {
        /// Transcript text (reads stdin when omitted)
        text: Option<String>,

        /// Reference date for due-date keywords (YYYY-MM-DD, default today)
        #[arg(long)]
        today: Option<NaiveDate>,
    },

    /// Store every task phrase found in a transcript
    Capture {
        /// Transcript text (reads stdin when omitted)
        text: Option<String>,

        #[arg(long)]
        today: Option<NaiveDate>,
    },

    /// Add one task
    Add {
        title: String,

        #[arg(short, long)]
        description: Option<String>,

        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<NaiveDate>,
    },

    /// List tasks in due-date order
    List {
        /// all | completed | incomplete
        #[arg(short, long, default_value = "all")]
        filter: TaskFilter,

        /// Case-insensitive search in title and description
        #[arg(short, long, default_value = "")]
        query: String,
    },

    /// Flip completion of a task
    Toggle { id: String },

    /// Delete a task
    Delete { id: String },

    /// Print core version
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = CoreConfig::from_env();
    if let Some(db) = cli.db {
        config.db_path = db;
    }

    if let Some(log_dir) = &config.log_dir {
        if let Err(err) = init_logging(&config.log_level, &log_dir.to_string_lossy()) {
            eprintln!("warning: file logging disabled: {err}");
        }
    }

    match cli.command {
        Commands::Segment { text, today } => {
            let transcript = read_transcript(text)?;
            let today = today.unwrap_or_else(local_today);
            for phrase in segment_transcript(&transcript) {
                match resolve_due_date(&phrase, today) {
                    Some(due) => println!("{phrase}  (due {due})"),
                    None => println!("{phrase}"),
                }
            }
        }
        Commands::Capture { text, today } => {
            let transcript = read_transcript(text)?;
            let today = today.unwrap_or_else(local_today);
            with_service(&config, |service| {
                let created = service.capture_transcript(&transcript, today)?;
                if created.is_empty() {
                    println!("No tasks detected.");
                }
                created.iter().for_each(print_task);
                Ok(())
            })?;
        }
        Commands::Add {
            title,
            description,
            due,
        } => {
            with_service(&config, |service| {
                let id = service.add_task(NewTaskRequest {
                    title,
                    description,
                    due_date: due,
                })?;
                println!("{id}");
                Ok(())
            })?;
        }
        Commands::List { filter, query } => {
            with_service(&config, |service| {
                service.view(filter, &query).iter().for_each(print_task);
                Ok(())
            })?;
        }
        Commands::Toggle { id } => {
            with_service(&config, |service| {
                if !service.toggle_completion(&id)? {
                    println!("No task with id {id}");
                }
                Ok(())
            })?;
        }
        Commands::Delete { id } => {
            with_service(&config, |service| {
                if !service.delete_task(&id)? {
                    println!("No task with id {id}");
                }
                Ok(())
            })?;
        }
        Commands::Version => {
            println!("voicetask_core version={}", voicetask_core::core_version());
        }
    }

    Ok(())
}

fn with_service(
    config: &CoreConfig,
    f: impl FnOnce(&TaskService<SqliteTaskRepository<'_>>) -> Result<()>,
) -> Result<()> {
    let conn = open_db(&config.db_path)
        .with_context(|| format!("Failed to open {}", config.db_path.display()))?;
    let service = TaskService::load(SqliteTaskRepository::new(&conn))
        .context("Failed to load task snapshot")?;
    f(&service)
}

fn read_transcript(text: Option<String>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read transcript from stdin")?;
    if buffer.trim().is_empty() {
        bail!("No transcript given; pass TEXT or pipe it on stdin");
    }
    Ok(buffer)
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

fn print_task(task: &Task) {
    let mark = if task.completed { "x" } else { " " };
    let due = task
        .due_date
        .map(|date| date.to_string())
        .unwrap_or_else(|| "-".to_string());
    println!("[{mark}] {due:<10}  {}  {}", task.title, task.id);
}
