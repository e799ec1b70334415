//! Kanban bucketing by status.

use crate::models::{Task, TaskStatus};

/// Tasks split into the three board columns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KanbanBoard {
    pub not_started: Vec<Task>,
    pub in_progress: Vec<Task>,
    pub completed: Vec<Task>,
}

impl KanbanBoard {
    /// Bucket tasks by exact status match.
    ///
    /// Removed tasks belong to no column. Callers are expected to filter
    /// them out first (see [`crate::models::Plan::live_tasks`]); any that
    /// slip through are dropped here.
    pub fn from_tasks<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Self {
        let mut board = Self::default();
        for task in tasks {
            match task.status {
                TaskStatus::NotStarted => board.not_started.push(task.clone()),
                TaskStatus::InProgress => board.in_progress.push(task.clone()),
                TaskStatus::Completed => board.completed.push(task.clone()),
                TaskStatus::Removed => {}
            }
        }
        board
    }

    /// Columns in display order.
    pub fn columns(&self) -> [(TaskStatus, &[Task]); 3] {
        [
            (TaskStatus::NotStarted, self.not_started.as_slice()),
            (TaskStatus::InProgress, self.in_progress.as_slice()),
            (TaskStatus::Completed, self.completed.as_slice()),
        ]
    }

    /// Tasks on the board across all columns.
    pub fn len(&self) -> usize {
        self.not_started.len() + self.in_progress.len() + self.completed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
