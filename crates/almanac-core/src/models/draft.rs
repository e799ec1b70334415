//! Id-less plan outlines produced by the handbook template and by the
//! assistant's plan generator.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Period, Plan, Priority, Task, TaskStatus, TermYear};

/// A plan outline whose tasks have not been numbered yet.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PlanDraft {
    pub periods: Vec<PeriodDraft>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PeriodDraft {
    pub name: String,
    #[serde(default)]
    pub tasks: Vec<TaskDraft>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TaskDraft {
    #[serde(alias = "task")]
    pub title: String,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub responsible: String,
    #[serde(default)]
    pub comments: String,
    #[serde(default)]
    pub excerpts: Vec<String>,
}

impl PlanDraft {
    /// Number the draft's tasks 1, 2, 3... in period order and build a plan.
    ///
    /// Each period is sorted by due date afterwards, so ids follow the
    /// draft's order rather than the final display order.
    pub fn into_plan(self, term: TermYear, chair: Option<String>) -> Plan {
        let mut next_id = 1;
        let periods = self
            .periods
            .into_iter()
            .map(|period| {
                let tasks = period
                    .tasks
                    .into_iter()
                    .map(|draft| {
                        let task = draft.into_task(next_id);
                        next_id += 1;
                        task
                    })
                    .collect();
                let mut period = Period::new(period.name, tasks);
                period.sort_by_due_date();
                period
            })
            .collect();

        Plan {
            term,
            chair,
            periods,
            updated_at: Timestamp::now(),
        }
    }
}

impl TaskDraft {
    fn into_task(self, id: u64) -> Task {
        Task {
            id,
            title: self.title,
            start_date: self.start_date,
            due_date: self.due_date,
            status: TaskStatus::NotStarted,
            priority: self.priority,
            source: self.source,
            responsible: self.responsible,
            comments: self.comments,
            excerpts: self.excerpts,
            attachments: Vec::new(),
        }
    }
}
