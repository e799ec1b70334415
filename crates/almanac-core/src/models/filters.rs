//! Filter types for querying tasks.

use super::{Priority, Task, TaskStatus};
use crate::{
    error::{AlmanacError, Result},
    params::ListTasks,
};

/// Filter options for listing tasks.
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    /// Exact status match
    pub status: Option<TaskStatus>,

    /// Exact priority match
    pub priority: Option<Priority>,

    /// Case-insensitive partial match on the task owner
    pub responsible_contains: Option<String>,

    /// Show removed tasks as well. Asking for `status: Removed` implies it.
    pub include_removed: bool,
}

impl TaskFilter {
    /// Whether `task` passes every criterion.
    pub fn matches(&self, task: &Task) -> bool {
        if task.status == TaskStatus::Removed
            && !self.include_removed
            && self.status != Some(TaskStatus::Removed)
        {
            return false;
        }
        if self.status.is_some_and(|status| status != task.status) {
            return false;
        }
        if self.priority.is_some_and(|priority| priority != task.priority) {
            return false;
        }
        match &self.responsible_contains {
            Some(needle) => task
                .responsible
                .to_lowercase()
                .contains(&needle.to_lowercase()),
            None => true,
        }
    }
}

impl TryFrom<&ListTasks> for TaskFilter {
    type Error = AlmanacError;

    /// Convert ListTasks parameters to a TaskFilter.
    ///
    /// # Errors
    ///
    /// * `AlmanacError::InvalidInput` - unknown status or priority
    fn try_from(params: &ListTasks) -> Result<Self> {
        let status = params
            .status
            .as_deref()
            .map(|raw| {
                raw.parse::<TaskStatus>()
                    .map_err(|reason| AlmanacError::invalid_input("status").with_reason(reason))
            })
            .transpose()?;
        let priority = params
            .priority
            .as_deref()
            .map(|raw| {
                raw.parse::<Priority>()
                    .map_err(|reason| AlmanacError::invalid_input("priority").with_reason(reason))
            })
            .transpose()?;

        Ok(Self {
            status,
            priority,
            responsible_contains: params.responsible.clone(),
            include_removed: params.include_removed,
        })
    }
}
