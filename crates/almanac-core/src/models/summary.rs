//! Dashboard summary of a plan's progress.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::{Plan, Priority, Task, TaskStatus, TermYear};

/// Progress figures for the dashboard view. Removed tasks are not counted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanSummary {
    pub term: TermYear,
    pub chair: Option<String>,
    /// Day the summary was computed for
    pub as_of: Date,
    pub total_tasks: u32,
    pub not_started: u32,
    pub in_progress: u32,
    pub completed: u32,
    /// Removed tasks, reported separately
    pub removed: u32,
    pub high_priority: u32,
    pub medium_priority: u32,
    pub low_priority: u32,
    /// Live tasks due before `as_of` that are not completed, soonest first
    pub overdue: Vec<Task>,
}

impl PlanSummary {
    /// Summarize `plan` as of `today`.
    pub fn new(plan: &Plan, today: Date) -> Self {
        let count =
            |pred: &dyn Fn(&Task) -> bool| plan.live_tasks().filter(|t| pred(t)).count() as u32;

        let mut overdue: Vec<Task> = plan
            .live_tasks()
            .filter(|task| task.status != TaskStatus::Completed)
            .filter(|task| task.due().is_some_and(|due| due < today))
            .cloned()
            .collect();
        overdue.sort_by_cached_key(Task::due);

        Self {
            term: plan.term,
            chair: plan.chair.clone(),
            as_of: today,
            total_tasks: count(&|_| true),
            not_started: count(&|t| t.status == TaskStatus::NotStarted),
            in_progress: count(&|t| t.status == TaskStatus::InProgress),
            completed: count(&|t| t.status == TaskStatus::Completed),
            removed: plan.tasks().filter(|t| !t.status.is_live()).count() as u32,
            high_priority: count(&|t| t.priority == Priority::High),
            medium_priority: count(&|t| t.priority == Priority::Medium),
            low_priority: count(&|t| t.priority == Priority::Low),
            overdue,
        }
    }

    /// Share of live tasks completed, 0-100. An empty plan is 0% done.
    pub fn completion_percent(&self) -> f64 {
        if self.total_tasks == 0 {
            return 0.0;
        }
        f64::from(self.completed) / f64::from(self.total_tasks) * 100.0
    }
}
