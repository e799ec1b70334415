//! Timeline layout: date ranges as horizontal percentages of the term.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::models::{Task, TaskStatus, TermYear};

/// Narrowest bar drawn for a dated task.
pub const MIN_BAR_WIDTH: f64 = 0.5;

/// Width of the marker drawn for a task that only has a due date.
pub const POINT_MARKER_WIDTH: f64 = 1.0;

const MONTH_LABELS: [&str; 12] = [
    "Aug", "Sep", "Oct", "Nov", "Dec", "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul",
];

/// Horizontal placement as percentages of the term span.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarPosition {
    pub left: f64,
    pub width: f64,
}

/// A task's bar together with what the view needs to label it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskBar {
    pub task_id: u64,
    pub title: String,
    pub status: TaskStatus,
    pub bar: BarPosition,
}

/// One of the twelve month columns behind the bars.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthColumn {
    pub label: &'static str,
    pub left: f64,
    pub width: f64,
}

/// Maps dates onto a term's fixed August-to-July span.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineLayout {
    term: TermYear,
    start: Date,
    total_days: i32,
}

impl TimelineLayout {
    pub fn new(term: TermYear) -> Self {
        let start = term.start();
        Self {
            term,
            start,
            total_days: days_between(start, term.end()) + 1,
        }
    }

    pub fn term(&self) -> TermYear {
        self.term
    }

    /// Days in the term, both ends included (365, or 366 across a leap day).
    pub fn total_days(&self) -> i32 {
        self.total_days
    }

    /// Bar for a single task.
    ///
    /// Never fails: a missing or malformed start date falls back to a
    /// due-date marker, and a task with no usable date at all gets a
    /// minimum-width bar at the left edge.
    pub fn bar(&self, task: &Task) -> BarPosition {
        match (task.start(), task.due()) {
            (Some(start), due) => {
                let end = match due {
                    Some(due) if due >= start => due,
                    Some(_) => start.tomorrow().unwrap_or(start),
                    None => return self.marker(start),
                };
                let duration = (days_between(start, end) + 1).max(1);
                self.position(days_between(self.start, start), duration)
            }
            (None, Some(due)) => self.marker(due),
            (None, None) => BarPosition {
                left: 0.0,
                width: MIN_BAR_WIDTH,
            },
        }
    }

    /// Bars for every task given, in order. Callers drop removed tasks
    /// first; this does no status filtering.
    pub fn bars<'a>(&self, tasks: impl IntoIterator<Item = &'a Task>) -> Vec<TaskBar> {
        tasks
            .into_iter()
            .map(|task| TaskBar {
                task_id: task.id,
                title: task.title.clone(),
                status: task.status,
                bar: self.bar(task),
            })
            .collect()
    }

    /// The twelve month columns, August first, sized by their real length.
    pub fn month_columns(&self) -> Vec<MonthColumn> {
        let mut month_start = self.start;
        MONTH_LABELS
            .iter()
            .map(|&label| {
                let next = month_start
                    .last_of_month()
                    .tomorrow()
                    .unwrap_or(month_start);
                let column = MonthColumn {
                    label,
                    left: self.percent(days_between(self.start, month_start)),
                    width: self.percent(days_between(month_start, next)),
                };
                month_start = next;
                column
            })
            .collect()
    }

    /// Left offset of `day`, or `None` when it falls outside the term.
    pub fn position_of(&self, day: Date) -> Option<f64> {
        if day < self.start || day > self.term.end() {
            return None;
        }
        Some(self.percent(days_between(self.start, day)))
    }

    fn marker(&self, day: Date) -> BarPosition {
        BarPosition {
            left: self.percent(days_between(self.start, day)).max(0.0),
            width: POINT_MARKER_WIDTH,
        }
    }

    fn position(&self, offset_days: i32, duration_days: i32) -> BarPosition {
        BarPosition {
            left: self.percent(offset_days).max(0.0),
            width: self.percent(duration_days).max(MIN_BAR_WIDTH),
        }
    }

    fn percent(&self, days: i32) -> f64 {
        f64::from(days) / f64::from(self.total_days) * 100.0
    }
}

/// Whole days from `from` to `to`; negative when `to` is earlier.
fn days_between(from: Date, to: Date) -> i32 {
    from.until(to).map_or(0, |span| span.get_days())
}
