//! Parameter structures for Almanac operations
//!
//! These structures are shared by every interface over the planner without
//! framework-specific derives. Interface layers (the CLI today) define their
//! own argument types and convert into these via `From`.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │    │    Planner      │
//! │  (clap derives) │───▶│ (validation)    │───▶│   operations    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Values arrive as strings and are validated here, so a malformed date or
//! status typed by a user is rejected before it reaches a plan. Documents
//! loaded from disk are not re-validated; the schedule code tolerates bad
//! dates there instead.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::{
    error::{AlmanacError, Result},
    models::{parse_iso_date, Priority, TaskStatus},
};

/// Generic parameters for operations requiring just an ID.
///
/// Used for show_task, remove_task, restore_task and reword_comment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the task to operate on
    pub id: u64,
}

/// Parameters for creating a new plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePlan {
    /// Term-year label, `YYYY-YYYY`
    pub term_year: String,
    /// Optional chairperson name
    pub chair: Option<String>,
    /// Seed the plan with the built-in handbook template
    #[serde(default)]
    pub template: bool,
}

/// Parameters for adding a task by hand.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddTask {
    /// What needs doing (required)
    pub title: String,
    /// First day of work, `YYYY-MM-DD`
    pub start_date: Option<String>,
    /// Deadline, `YYYY-MM-DD` (required)
    pub due_date: String,
    /// Priority (high, medium, low); medium when omitted
    pub priority: Option<String>,
    /// Owner of the task
    pub responsible: Option<String>,
    /// Free-text comments
    pub comments: Option<String>,
}

impl AddTask {
    /// Validate the user-supplied fields.
    ///
    /// Returns the normalized `(start_date, due_date, priority)` triple.
    ///
    /// # Errors
    ///
    /// * `AlmanacError::InvalidInput` - empty title, malformed date, due date
    ///   before start date, or unknown priority
    pub fn validate(&self) -> Result<(Option<Date>, Date, Priority)> {
        if self.title.trim().is_empty() {
            return Err(AlmanacError::invalid_input("title").with_reason("must not be empty"));
        }
        let due = require_date("due_date", &self.due_date)?;
        let start = self
            .start_date
            .as_deref()
            .map(|raw| require_date("start_date", raw))
            .transpose()?;
        check_order(start, Some(due))?;
        let priority = parse_priority(self.priority.as_deref())?.unwrap_or_default();
        Ok((start, due, priority))
    }
}

/// Parameters for updating a task's fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTask {
    /// The ID of the task to update
    pub id: u64,
    pub title: Option<String>,
    pub start_date: Option<String>,
    pub due_date: Option<String>,
    /// New status (not-started, in-progress, completed, removed)
    pub status: Option<String>,
    /// New priority (high, medium, low)
    pub priority: Option<String>,
    pub responsible: Option<String>,
    pub comments: Option<String>,
}

impl UpdateTask {
    /// Validate the fields that have a fixed format.
    ///
    /// # Errors
    ///
    /// * `AlmanacError::InvalidInput` - malformed date, unknown status or
    ///   priority, or an empty title
    pub fn validate(&self) -> Result<(Option<TaskStatus>, Option<Priority>)> {
        if let Some(title) = &self.title {
            if title.trim().is_empty() {
                return Err(AlmanacError::invalid_input("title").with_reason("must not be empty"));
            }
        }
        let start = self
            .start_date
            .as_deref()
            .map(|raw| require_date("start_date", raw))
            .transpose()?;
        let due = self
            .due_date
            .as_deref()
            .map(|raw| require_date("due_date", raw))
            .transpose()?;
        check_order(start, due)?;

        let status = self
            .status
            .as_deref()
            .map(|raw| {
                raw.parse::<TaskStatus>()
                    .map_err(|reason| AlmanacError::invalid_input("status").with_reason(reason))
            })
            .transpose()?;
        let priority = parse_priority(self.priority.as_deref())?;
        Ok((status, priority))
    }
}

/// Parameters for listing tasks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListTasks {
    /// Only tasks with this status
    pub status: Option<String>,
    /// Only tasks with this priority
    pub priority: Option<String>,
    /// Only tasks whose owner contains this text (case-insensitive)
    pub responsible: Option<String>,
    /// Include soft-deleted tasks
    #[serde(default)]
    pub include_removed: bool,
}

fn require_date(field: &str, raw: &str) -> Result<Date> {
    parse_iso_date(raw).ok_or_else(|| {
        AlmanacError::invalid_input(field).with_reason(format!("'{raw}' is not a YYYY-MM-DD date"))
    })
}

fn check_order(start: Option<Date>, due: Option<Date>) -> Result<()> {
    match (start, due) {
        (Some(start), Some(due)) if due < start => Err(AlmanacError::invalid_input("due_date")
            .with_reason(format!("{due} is before the start date {start}"))),
        _ => Ok(()),
    }
}

fn parse_priority(raw: Option<&str>) -> Result<Option<Priority>> {
    raw.map(|raw| {
        raw.parse::<Priority>()
            .map_err(|reason| AlmanacError::invalid_input("priority").with_reason(reason))
    })
    .transpose()
}
