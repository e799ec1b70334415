//! Request types for updating models.

use super::{Priority, Task, TaskStatus};
use crate::error::{AlmanacError, Result};

/// Validated field-level changes to a single task.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct UpdateTaskRequest {
    pub title: Option<String>,
    pub start_date: Option<String>,
    pub due_date: Option<String>,
    pub status: Option<TaskStatus>,
    pub priority: Option<Priority>,
    pub responsible: Option<String>,
    pub comments: Option<String>,
}

impl UpdateTaskRequest {
    /// A request that only changes status.
    pub fn status(status: TaskStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    /// Apply the request to `task`, returning the names of fields that
    /// actually changed.
    ///
    /// # Errors
    ///
    /// * `AlmanacError::InvalidTransition` - the status change breaks the
    ///   soft-delete rules
    pub fn apply(&self, task: &mut Task) -> Result<Vec<String>> {
        if let Some(next) = self.status {
            if !task.status.can_transition_to(next) {
                return Err(AlmanacError::InvalidTransition {
                    from: task.status,
                    to: next,
                });
            }
        }

        let mut changes = Vec::new();
        set_field(&mut task.title, self.title.as_ref(), "title", &mut changes);
        set_optional(&mut task.start_date, self.start_date.as_ref(), "start date", &mut changes);
        set_optional(&mut task.due_date, self.due_date.as_ref(), "due date", &mut changes);
        set_field(&mut task.status, self.status.as_ref(), "status", &mut changes);
        set_field(&mut task.priority, self.priority.as_ref(), "priority", &mut changes);
        set_field(&mut task.responsible, self.responsible.as_ref(), "responsible", &mut changes);
        set_field(&mut task.comments, self.comments.as_ref(), "comments", &mut changes);
        Ok(changes)
    }

    /// Whether this request sets a new due date, which re-sorts the task's
    /// period.
    pub fn changes_due_date(&self) -> bool {
        self.due_date.is_some()
    }

    /// Whether this request sets either date.
    pub fn changes_dates(&self) -> bool {
        self.start_date.is_some() || self.due_date.is_some()
    }
}

fn set_field<T: PartialEq + Clone>(
    slot: &mut T,
    value: Option<&T>,
    name: &str,
    changes: &mut Vec<String>,
) {
    if let Some(value) = value {
        if slot != value {
            *slot = value.clone();
            changes.push(format!("Updated {name}"));
        }
    }
}

fn set_optional(
    slot: &mut Option<String>,
    value: Option<&String>,
    name: &str,
    changes: &mut Vec<String>,
) {
    if let Some(value) = value {
        if slot.as_ref() != Some(value) {
            *slot = Some(value.clone());
            changes.push(format!("Updated {name}"));
        }
    }
}

impl TryFrom<crate::params::UpdateTask> for UpdateTaskRequest {
    type Error = AlmanacError;

    /// Convert an UpdateTask parameter into a validated UpdateTaskRequest.
    ///
    /// Dates are normalized to `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// * `AlmanacError::InvalidInput` - malformed date, status or priority
    fn try_from(params: crate::params::UpdateTask) -> Result<Self> {
        let (status, priority) = params.validate()?;
        let normalize = |raw: Option<String>| {
            raw.and_then(|raw| super::parse_iso_date(&raw).map(|date| date.to_string()))
        };

        Ok(Self {
            title: params.title.map(|title| title.trim().to_string()),
            start_date: normalize(params.start_date),
            due_date: normalize(params.due_date),
            status,
            priority,
            responsible: params.responsible,
            comments: params.comments,
        })
    }
}
