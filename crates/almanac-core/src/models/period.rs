//! Period model: a named span of the term holding its tasks.

use serde::{Deserialize, Serialize};

use super::Task;

/// Name given to the bucket created when a plan has no periods at all.
pub const FALLBACK_PERIOD_NAME: &str = "General";

/// A named bucket of tasks covering a contiguous span of the term.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Period {
    pub name: String,

    /// Kept sorted ascending by due date after every insertion
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Period {
    pub fn new(name: impl Into<String>, tasks: Vec<Task>) -> Self {
        Self {
            name: name.into(),
            tasks,
        }
    }

    /// Stable sort by due date. Tasks without a usable due date go last.
    pub fn sort_by_due_date(&mut self) {
        self.tasks.sort_by_cached_key(|task| {
            let due = task.due();
            (due.is_none(), due)
        });
    }
}
