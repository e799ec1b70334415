use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{PlanCommands, TaskCommands};

/// Annual task planner for a volunteer committee
///
/// Almanac keeps one term's plan (August to July) as a JSON document: named
/// periods holding tasks sorted by due date. New tasks are filed into the
/// period their due month belongs to, and the plan can be viewed as a
/// dashboard, a kanban board or a timeline.
#[derive(Parser)]
#[command(version, about, name = "almanac")]
pub struct Args {
    /// Path to the plan document. Defaults to
    /// $XDG_DATA_HOME/almanac/plan.json
    #[arg(long, global = true)]
    pub plan_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Compare months from the start of the term (August first) when filing
    /// new tasks into periods, instead of by calendar month number
    #[arg(long, global = true)]
    pub term_relative: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Almanac CLI
///
/// - `plan`: create, show, import and export the whole plan
/// - `task`: add, update, remove, restore, show and list tasks
/// - `dashboard`, `kanban`, `timeline`: read-only views
///
/// With no command the dashboard is shown.
#[derive(Subcommand)]
pub enum Commands {
    /// Manage the plan
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Manage tasks within the plan
    #[command(alias = "t")]
    Task {
        #[command(subcommand)]
        command: TaskCommands,
    },
    /// Show progress, counts and overdue tasks
    #[command(alias = "d")]
    Dashboard,
    /// Show tasks grouped by status
    #[command(alias = "board")]
    Kanban,
    /// Show the term as a text Gantt chart
    #[command(alias = "gantt")]
    Timeline,
}
