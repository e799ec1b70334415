//! Status and priority enumerations for tasks.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of task statuses.
///
/// `Removed` is a soft delete: tasks are never physically dropped from a
/// plan, and a removed task can be restored to `NotStarted`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum TaskStatus {
    /// Work has not begun
    #[default]
    #[serde(rename = "Not-Started")]
    NotStarted,

    /// Someone is working on it
    #[serde(rename = "In-Progress")]
    InProgress,

    /// Finished
    Completed,

    /// Hidden from every view except explicit "show removed" listings
    Removed,
}

impl FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "notstarted" | "todo" => Ok(TaskStatus::NotStarted),
            "inprogress" => Ok(TaskStatus::InProgress),
            "completed" | "done" => Ok(TaskStatus::Completed),
            "removed" => Ok(TaskStatus::Removed),
            _ => Err(format!("Invalid task status: {s}")),
        }
    }
}

impl TaskStatus {
    /// All statuses in board order.
    pub const ALL: [TaskStatus; 4] = [
        TaskStatus::NotStarted,
        TaskStatus::InProgress,
        TaskStatus::Completed,
        TaskStatus::Removed,
    ];

    /// Document string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::NotStarted => "Not-Started",
            TaskStatus::InProgress => "In-Progress",
            TaskStatus::Completed => "Completed",
            TaskStatus::Removed => "Removed",
        }
    }

    /// Whether a task in this status may move to `next`.
    ///
    /// Any live status may move anywhere, including back from `Completed`.
    /// A removed task can only be restored to `NotStarted`.
    ///
    /// ```rust
    /// use almanac_core::models::TaskStatus;
    ///
    /// assert!(TaskStatus::Completed.can_transition_to(TaskStatus::InProgress));
    /// assert!(TaskStatus::Removed.can_transition_to(TaskStatus::NotStarted));
    /// assert!(!TaskStatus::Removed.can_transition_to(TaskStatus::Completed));
    /// ```
    pub fn can_transition_to(&self, next: TaskStatus) -> bool {
        match self {
            TaskStatus::Removed => matches!(next, TaskStatus::Removed | TaskStatus::NotStarted),
            _ => true,
        }
    }

    /// Whether the task shows up on the dashboard, board and timeline.
    pub fn is_live(&self) -> bool {
        *self != TaskStatus::Removed
    }

    /// Get status with consistent icon formatting for display.
    pub fn with_icon(&self) -> &'static str {
        match self {
            TaskStatus::Completed => "✓ Completed",
            TaskStatus::InProgress => "➤ In Progress",
            TaskStatus::NotStarted => "○ Not Started",
            TaskStatus::Removed => "✗ Removed",
        }
    }
}

/// Task priority.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Default,
)]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "high" | "h" => Ok(Priority::High),
            "medium" | "m" => Ok(Priority::Medium),
            "low" | "l" => Ok(Priority::Low),
            _ => Err(format!("Invalid priority: {s}")),
        }
    }
}

impl Priority {
    /// All priorities, highest first.
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    /// Document string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}
