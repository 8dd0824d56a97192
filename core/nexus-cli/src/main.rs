//! nexus: terminal client for the Nexus productivity dashboard.
//!
//! Every command loads the saved state, applies at most a handful of
//! transitions through [`nexus_core::NexusEngine`] (each one saved
//! immediately) and prints the result.
//!
//! ## Subcommands
//!
//! - `status`: Dashboard summary (do-next, today, deadlines, goals)
//! - `task`, `goals`, `habit`, `daily`, `capture`, `strategy`: Collection edits
//! - `project`, `job`, `gym`, `course`, `ec`: Feature views
//! - `timer`: Runs one 25-minute focus block in the foreground, with pause
//!   and task relinking from stdin
//! - `coach`: Scripted productivity coach
//! - `config`: Notification and name preferences

mod commands;
mod logging;
mod notify;

use clap::{Parser, Subcommand};
use nexus_core::{
    ApplicationStatus, DayType, NexusEngine, PrepStatus, Priority, StorageConfig, TaskCategory,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "nexus")]
#[command(about = "Personal productivity dashboard")]
#[command(version)]
struct Cli {
    /// Data directory (defaults to ~/.nexus)
    #[arg(long, global = true, value_name = "DIR")]
    root: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the dashboard summary
    Status,

    /// Manage tasks
    #[command(subcommand)]
    Task(TaskCommand),

    /// List goals and their progress
    Goals,

    /// Manage habits
    #[command(subcommand)]
    Habit(HabitCommand),

    /// Toggle today's completion of a daily prompt
    Daily {
        /// Daily id (omit to list)
        id: Option<String>,
    },

    /// Inbox: capture raw text and turn it into tasks
    #[command(subcommand)]
    Capture(CaptureCommand),

    /// Manage the strategy list
    #[command(subcommand)]
    Strategy(StrategyCommand),

    /// Projects and their subtasks
    #[command(subcommand)]
    Project(ProjectCommand),

    /// Job applications
    #[command(subcommand)]
    Job(JobCommand),

    /// Log a gym session
    Gym {
        /// push, pull, legs or cardio
        day_type: DayType,

        /// Session length in minutes
        #[arg(long)]
        minutes: Option<u32>,
    },

    /// Course homework, lectures and exam prep
    #[command(subcommand)]
    Course(CourseCommand),

    /// Extracurricular tasks
    #[command(subcommand)]
    Ec(EcCommand),

    /// Run one focus block in the foreground. While it runs, type `p` to
    /// pause or resume, `t <id>` to credit another task (`t` alone unlinks)
    /// and `q` to abandon the block.
    Timer {
        /// Task to credit with the pomodoro
        #[arg(long)]
        task: Option<String>,
    },

    /// Ask the coach something (omit the question for a greeting)
    Coach {
        question: Vec<String>,
    },

    /// Show or change preferences
    Config {
        /// Notify when a focus block finishes
        #[arg(long)]
        notifications: Option<bool>,

        /// Name used in greetings
        #[arg(long)]
        name: Option<String>,
    },
}

#[derive(Subcommand)]
enum TaskCommand {
    /// Add a task
    Add {
        title: Vec<String>,
        #[arg(long, default_value = "personal")]
        category: TaskCategory,
        #[arg(long, default_value = "medium")]
        priority: Priority,
        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<String>,
        #[arg(long)]
        course: Option<String>,
    },
    /// Mark a task done (or not done with --undo)
    Done {
        id: String,
        #[arg(long)]
        undo: bool,
    },
    /// Delete a task
    Rm { id: String },
    /// List open tasks in focus order
    List {
        /// Include completed tasks
        #[arg(long)]
        all: bool,
    },
    /// Search task titles
    Search { query: Vec<String> },
}

#[derive(Subcommand)]
enum HabitCommand {
    /// Add a habit
    Add {
        name: String,
        #[arg(long, default_value = "✅")]
        icon: String,
    },
    /// Toggle today's completion
    Toggle { id: String },
    /// Delete a habit
    Rm { id: String },
    /// List habits with the last seven days
    List,
}

#[derive(Subcommand)]
enum CaptureCommand {
    /// Add text to the inbox
    Add { text: Vec<String> },
    /// Turn an inbox entry into a task
    Process { id: String },
    /// Discard an inbox entry
    Rm { id: String },
    /// List the inbox
    List,
}

#[derive(Subcommand)]
enum StrategyCommand {
    Add { text: Vec<String> },
    /// Replace the text at a position (0-based)
    Edit { index: usize, text: Vec<String> },
    /// Delete by position (0-based)
    Rm { index: usize },
    List,
}

#[derive(Subcommand)]
enum ProjectCommand {
    /// Add a project
    Add {
        name: String,
        #[arg(long)]
        description: Option<String>,
    },
    /// Add a subtask
    Subtask { project: String, title: Vec<String> },
    /// Toggle a subtask
    Toggle { project: String, subtask: String },
    /// List projects
    List,
}

#[derive(Subcommand)]
enum JobCommand {
    /// Add an application
    Add {
        company: String,
        role: String,
        #[arg(long, default_value = "saved")]
        status: ApplicationStatus,
    },
    /// Move an application to a new stage
    Status { id: String, status: ApplicationStatus },
    /// List applications
    List,
}

#[derive(Subcommand)]
enum CourseCommand {
    /// Toggle a homework item
    Homework { course: String, homework: String },
    /// Toggle a lecture as studied
    Lecture { course: String, lecture: String },
    /// Set exam prep status
    Exam {
        course: String,
        exam: String,
        status: PrepStatus,
    },
    /// List courses with progress
    List,
}

#[derive(Subcommand)]
enum EcCommand {
    /// Add a task to an extracurricular
    Add { ec: String, title: Vec<String> },
    /// Toggle an extracurricular task
    Toggle { ec: String, task: String },
    /// List extracurriculars
    List,
}

fn main() {
    let cli = Cli::parse();

    let storage = match cli.root {
        Some(root) => Ok(StorageConfig::with_root(root)),
        None => StorageConfig::new(),
    };
    let log_dir = storage
        .as_ref()
        .ok()
        .filter(|storage| storage.ensure_dirs().is_ok())
        .map(StorageConfig::logs_dir);
    let _logging_guard = logging::init(log_dir.as_deref());

    let result = storage.map_err(String::from).and_then(|storage| {
        let mut engine =
            NexusEngine::with_storage(storage).with_notifier(notify::TerminalNotifier);
        commands::run(&mut engine, cli.command)
    });
    if let Err(e) = result {
        tracing::error!(error = %e, "nexus command failed");
        std::process::exit(1);
    }
}
