//! Command definitions and handlers for the CLI
//!
//! Each command's arguments are a clap-derived struct that converts into the
//! matching core parameter type, so `almanac-core` never depends on clap:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Planner
//! ```
//!
//! [`Cli`] runs a parsed command against the planner and prints the result
//! through the [`TerminalRenderer`].

use std::path::PathBuf;

use almanac_core::{
    display::{CreateResult, OperationStatus, Tasks},
    params::{AddTask, CreatePlan, Id, ListTasks, UpdateTask},
    Planner,
};
use anyhow::{Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use jiff::civil::Date;
use log::debug;

use crate::renderer::TerminalRenderer;

// ============================================================================
// Plan commands
// ============================================================================

/// Create a new plan for a term, replacing the current one
#[derive(Args)]
pub struct CreatePlanArgs {
    /// Term year, e.g. 2025-2026
    #[arg(help = "Term year as YYYY-YYYY; the term runs August to July")]
    pub term_year: String,
    /// Name of the committee chair
    #[arg(short, long)]
    pub chair: Option<String>,
    /// Seed the plan from the built-in committee handbook outline
    #[arg(short, long)]
    pub template: bool,
}

impl From<CreatePlanArgs> for CreatePlan {
    fn from(val: CreatePlanArgs) -> Self {
        CreatePlan {
            term_year: val.term_year,
            chair: val.chair,
            template: val.template,
        }
    }
}

/// Replace the current plan with a document from disk
#[derive(Args)]
pub struct ImportPlanArgs {
    /// File holding a full plan, or a plan outline without ids
    pub file: PathBuf,
}

/// Write the current plan to a file
#[derive(Args)]
pub struct ExportPlanArgs {
    /// Destination file; parent directories are created
    pub file: PathBuf,
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// Create a new plan
    #[command(alias = "c")]
    Create(CreatePlanArgs),
    /// Show the plan with all periods and tasks
    #[command(alias = "s")]
    Show,
    /// Import a plan document
    #[command(alias = "i")]
    Import(ImportPlanArgs),
    /// Export the plan document
    #[command(alias = "e")]
    Export(ExportPlanArgs),
}

// ============================================================================
// Task commands
// ============================================================================

/// Add a task; it is filed into the period matching its due month
#[derive(Args)]
pub struct AddTaskArgs {
    /// What needs doing
    pub title: String,
    /// Due date (YYYY-MM-DD)
    #[arg(long)]
    pub due: String,
    /// Start date (YYYY-MM-DD)
    #[arg(long)]
    pub start: Option<String>,
    #[arg(short, long, value_enum)]
    pub priority: Option<PriorityArg>,
    /// Who owns the task
    #[arg(short, long)]
    pub responsible: Option<String>,
    #[arg(short, long)]
    pub comments: Option<String>,
}

impl From<AddTaskArgs> for AddTask {
    fn from(val: AddTaskArgs) -> Self {
        AddTask {
            title: val.title,
            start_date: val.start,
            due_date: val.due,
            priority: val.priority.map(|p| p.to_string()),
            responsible: val.responsible,
            comments: val.comments,
        }
    }
}

/// Update a task's fields
///
/// A new due date re-sorts the task within its period; it does not move the
/// task to another period.
#[derive(Args)]
pub struct UpdateTaskArgs {
    #[arg(help = "ID of the task to update")]
    pub id: u64,
    #[arg(long)]
    pub title: Option<String>,
    /// New start date (YYYY-MM-DD)
    #[arg(long)]
    pub start: Option<String>,
    /// New due date (YYYY-MM-DD)
    #[arg(long)]
    pub due: Option<String>,
    #[arg(short, long, value_enum)]
    pub status: Option<StatusArg>,
    #[arg(short, long, value_enum)]
    pub priority: Option<PriorityArg>,
    #[arg(short, long)]
    pub responsible: Option<String>,
    #[arg(short, long)]
    pub comments: Option<String>,
}

impl From<UpdateTaskArgs> for UpdateTask {
    fn from(val: UpdateTaskArgs) -> Self {
        UpdateTask {
            id: val.id,
            title: val.title,
            start_date: val.start,
            due_date: val.due,
            status: val.status.map(|s| s.to_string()),
            priority: val.priority.map(|p| p.to_string()),
            responsible: val.responsible,
            comments: val.comments,
        }
    }
}

/// Show a single task, removed ones included
#[derive(Args)]
pub struct ShowTaskArgs {
    #[arg(help = "ID of the task to show")]
    pub id: u64,
}

impl From<ShowTaskArgs> for Id {
    fn from(val: ShowTaskArgs) -> Self {
        Id { id: val.id }
    }
}

/// Remove a task; it stays in the document and can be restored
#[derive(Args)]
pub struct RemoveTaskArgs {
    #[arg(help = "ID of the task to remove")]
    pub id: u64,
}

impl From<RemoveTaskArgs> for Id {
    fn from(val: RemoveTaskArgs) -> Self {
        Id { id: val.id }
    }
}

/// Restore a removed task as not started
#[derive(Args)]
pub struct RestoreTaskArgs {
    #[arg(help = "ID of the removed task to restore")]
    pub id: u64,
}

impl From<RestoreTaskArgs> for Id {
    fn from(val: RestoreTaskArgs) -> Self {
        Id { id: val.id }
    }
}

/// List tasks, optionally filtered
#[derive(Args)]
pub struct ListTasksArgs {
    #[arg(short, long, value_enum)]
    pub status: Option<StatusArg>,
    #[arg(short, long, value_enum)]
    pub priority: Option<PriorityArg>,
    /// Only tasks whose owner contains this text (case-insensitive)
    #[arg(short, long)]
    pub responsible: Option<String>,
    /// Include removed tasks
    #[arg(long)]
    pub include_removed: bool,
}

impl From<ListTasksArgs> for ListTasks {
    fn from(val: ListTasksArgs) -> Self {
        ListTasks {
            status: val.status.map(|s| s.to_string()),
            priority: val.priority.map(|p| p.to_string()),
            responsible: val.responsible,
            include_removed: val.include_removed,
        }
    }
}

#[derive(Subcommand)]
pub enum TaskCommands {
    /// Add a new task
    #[command(alias = "a")]
    Add(AddTaskArgs),
    /// Update a task's status or details
    #[command(alias = "u")]
    Update(UpdateTaskArgs),
    /// Remove a task (soft delete)
    #[command(alias = "rm")]
    Remove(RemoveTaskArgs),
    /// Restore a removed task
    Restore(RestoreTaskArgs),
    /// Show details of a task
    #[command(alias = "s")]
    Show(ShowTaskArgs),
    /// List tasks
    #[command(aliases = ["l", "ls"])]
    List(ListTasksArgs),
}

/// Command-line representation of task statuses
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum StatusArg {
    NotStarted,
    InProgress,
    Completed,
    Removed,
}

impl std::fmt::Display for StatusArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusArg::NotStarted => write!(f, "not-started"),
            StatusArg::InProgress => write!(f, "in-progress"),
            StatusArg::Completed => write!(f, "completed"),
            StatusArg::Removed => write!(f, "removed"),
        }
    }
}

/// Command-line representation of task priorities
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum PriorityArg {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for PriorityArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PriorityArg::High => write!(f, "high"),
            PriorityArg::Medium => write!(f, "medium"),
            PriorityArg::Low => write!(f, "low"),
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// Runs parsed commands against a planner.
pub struct Cli {
    planner: Planner,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(planner: Planner, renderer: TerminalRenderer) -> Self {
        Self { planner, renderer }
    }

    pub fn handle_plan_command(&self, command: PlanCommands) -> Result<()> {
        match command {
            PlanCommands::Create(args) => {
                let plan = self
                    .planner
                    .create_plan(&args.into())
                    .context("Failed to create plan")?;
                self.renderer.show(&CreateResult::new(plan))
            }
            PlanCommands::Show => {
                let plan = self.planner.show_plan().context("Failed to load plan")?;
                self.renderer.show(&plan)
            }
            PlanCommands::Import(args) => {
                let plan = self
                    .planner
                    .import_plan(&args.file)
                    .with_context(|| format!("Failed to import {}", args.file.display()))?;
                self.renderer.show(&OperationStatus::success(format!(
                    "Imported plan for term {} with {} task(s) from {}",
                    plan.term,
                    plan.tasks().count(),
                    args.file.display()
                )))
            }
            PlanCommands::Export(args) => {
                let plan = self
                    .planner
                    .export_plan(&args.file)
                    .with_context(|| format!("Failed to export to {}", args.file.display()))?;
                self.renderer.show(&OperationStatus::success(format!(
                    "Exported plan for term {} to {}",
                    plan.term,
                    args.file.display()
                )))
            }
        }
    }

    pub fn handle_task_command(&self, command: TaskCommands) -> Result<()> {
        match command {
            TaskCommands::Add(args) => {
                let task = self
                    .planner
                    .add_task(&args.into())
                    .context("Failed to add task")?;
                self.renderer.show(&CreateResult::new(task))
            }
            TaskCommands::Update(args) => {
                let result = self
                    .planner
                    .update_task(args.into())
                    .context("Failed to update task")?;
                self.renderer.show(&result)
            }
            TaskCommands::Remove(args) => {
                let id = Id::from(args);
                let result = self
                    .planner
                    .remove_task(&id)
                    .with_context(|| format!("Failed to remove task {}", id.id))?;
                self.renderer.show(&OperationStatus::removal(&result))
            }
            TaskCommands::Restore(args) => {
                let id = Id::from(args);
                let result = self
                    .planner
                    .restore_task(&id)
                    .with_context(|| format!("Failed to restore task {}", id.id))?;
                self.renderer.show(&result)
            }
            TaskCommands::Show(args) => {
                let id = Id::from(args);
                let task = self
                    .planner
                    .show_task(&id)
                    .with_context(|| format!("Failed to show task {}", id.id))?;
                self.renderer.show(&task)
            }
            TaskCommands::List(args) => {
                let tasks = self
                    .planner
                    .list_tasks(&args.into())
                    .context("Failed to list tasks")?;
                debug!("Listing {} task(s)", tasks.len());
                self.renderer.show(&Tasks(tasks))
            }
        }
    }

    pub fn dashboard(&self, today: Date) -> Result<()> {
        let summary = self
            .planner
            .dashboard(today)
            .context("Failed to build dashboard")?;
        self.renderer.show(&summary)
    }

    pub fn kanban(&self) -> Result<()> {
        let board = self.planner.kanban().context("Failed to build board")?;
        self.renderer.show(&board)
    }

    pub fn timeline(&self, today: Date) -> Result<()> {
        let timeline = self
            .planner
            .timeline(today)
            .context("Failed to build timeline")?;
        self.renderer.show(&timeline)
    }
}
