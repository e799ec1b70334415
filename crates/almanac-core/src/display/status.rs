//! One-line confirmations for plan file transfers and task removal.
//!
//! Import, export and removal have no resource worth re-rendering, so the CLI
//! prints a `Success:` or `Error:` line instead of the plan or the task.

use std::fmt;

use super::UpdateResult;
use crate::models::Task;

/// Confirmation line printed after an Almanac operation.
///
/// A failure status is still a normal outcome, such as removing a task that
/// was already removed. Hard failures travel as `AlmanacError` instead.
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
        }
    }

    /// Describe the outcome of a soft delete. An empty change list means the
    /// task was already removed and the document was left alone.
    pub fn removal(result: &UpdateResult<Task>) -> Self {
        let task = &result.resource;
        if result.changes.is_empty() {
            Self::failure(format!("Task {} was already removed", task.id))
        } else {
            Self::success(format!("Removed task {}: {}", task.id, task.title))
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = if self.success { "Success:" } else { "Error:" };
        writeln!(f, "{label} {}", self.message)
    }
}
