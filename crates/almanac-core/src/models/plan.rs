//! Plan model definition and related functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Period, Task, TermYear};
use crate::error::{AlmanacError, Result};

/// The root aggregate: a term's periods and all their tasks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plan {
    /// Term-year label (`YYYY-YYYY`)
    pub term: TermYear,

    /// Committee chairperson
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chair: Option<String>,

    /// Periods in chronological order
    #[serde(default)]
    pub periods: Vec<Period>,

    /// Timestamp when the plan was last saved (UTC)
    #[serde(default = "Timestamp::now")]
    pub updated_at: Timestamp,
}

impl Plan {
    /// An empty plan for `term`.
    pub fn new(term: TermYear, chair: Option<String>) -> Self {
        Self {
            term,
            chair,
            periods: Vec::new(),
            updated_at: Timestamp::now(),
        }
    }

    /// Every task in period order, removed ones included.
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.periods.iter().flat_map(|period| period.tasks.iter())
    }

    /// Tasks that are not soft-deleted.
    pub fn live_tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks().filter(|task| task.status.is_live())
    }

    pub fn find_task(&self, id: u64) -> Option<&Task> {
        self.tasks().find(|task| task.id == id)
    }

    pub fn find_task_mut(&mut self, id: u64) -> Option<&mut Task> {
        self.periods
            .iter_mut()
            .flat_map(|period| period.tasks.iter_mut())
            .find(|task| task.id == id)
    }

    /// Name of the period holding task `id`.
    pub fn period_of(&self, id: u64) -> Option<&str> {
        self.periods
            .iter()
            .find(|period| period.tasks.iter().any(|task| task.id == id))
            .map(|period| period.name.as_str())
    }

    /// Next unused task id. Tasks are never physically deleted, so ids
    /// handed out this way are never reused.
    ///
    /// # Errors
    ///
    /// * `AlmanacError::InvalidInput` - the plan already holds the largest
    ///   possible id
    pub fn next_task_id(&self) -> Result<u64> {
        let max = self.tasks().map(|task| task.id).max().unwrap_or(0);
        max.checked_add(1).ok_or_else(|| {
            AlmanacError::invalid_input("id").with_reason(format!("no task id follows {max}"))
        })
    }
}
