//! Period assignment: which period a new task belongs to.
//!
//! Each period has a reference month, the month of its first task's due
//! date, or the term's opening month when the period is empty. How a new
//! task's due month is compared against those reference months depends on
//! the [`MonthOrdering`].

use std::str::FromStr;

use jiff::civil::Date;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::models::{Period, Plan, Task, TermYear, FALLBACK_PERIOD_NAME, TERM_START_MONTH};

/// How months are compared when choosing a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MonthOrdering {
    /// Raw calendar month numbers; the first period whose reference month is
    /// not after the task's month wins. A January task in an August term
    /// compares as earlier than every autumn period and falls through to the
    /// first period.
    #[default]
    Calendar,

    /// Months counted from the start of the term (August = 0, July = 11);
    /// the task goes to the last period whose reference month it has
    /// reached, i.e. the period whose span contains it.
    TermRelative,
}

impl MonthOrdering {
    fn key(self, month: i8) -> i8 {
        match self {
            MonthOrdering::Calendar => month,
            MonthOrdering::TermRelative => TermYear::relative_month(month),
        }
    }
}

impl FromStr for MonthOrdering {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "calendar" => Ok(MonthOrdering::Calendar),
            "term-relative" | "term_relative" | "termrelative" => Ok(MonthOrdering::TermRelative),
            _ => Err(format!("Invalid month ordering: {s}")),
        }
    }
}

/// Reference month of `period`: its first task's due month, or the term's
/// opening month when it has no tasks (or the first due date is unusable).
pub fn reference_month(period: &Period) -> i8 {
    period
        .tasks
        .first()
        .and_then(Task::due)
        .map_or(TERM_START_MONTH, |due| due.month())
}

/// Index of the period a task due on `due` belongs to, or `None` when no
/// period matches and the fallback rule applies.
///
/// A missing or malformed due date never matches.
pub fn select_period(
    periods: &[Period],
    due: Option<Date>,
    ordering: MonthOrdering,
) -> Option<usize> {
    let month = ordering.key(due?.month());
    let mut references = periods
        .iter()
        .enumerate()
        .map(|(index, period)| (index, ordering.key(reference_month(period))));

    match ordering {
        MonthOrdering::Calendar => references
            .find(|&(_, reference)| month >= reference)
            .map(|(index, _)| index),
        MonthOrdering::TermRelative => references
            .filter(|&(_, reference)| month >= reference)
            .last()
            .map(|(index, _)| index),
    }
}

/// Return a copy of `plan` with `task` placed in its period.
///
/// Exactly one period's task list grows by one element and is re-sorted by
/// due date; every other period is untouched. When no period matches, the
/// task goes to the first period, and a plan with no periods gets a single
/// "General" period holding just this task.
///
/// ```rust
/// use almanac_core::models::{Period, Plan, Task, TermYear};
/// use almanac_core::schedule::{assign_task, MonthOrdering};
///
/// let term: TermYear = "2025-2026".parse()?;
/// let plan = Plan::new(term, None);
///
/// let mut task = Task::new(1, "Kickoff meeting");
/// task.due_date = Some("2025-08-20".to_string());
///
/// let plan = assign_task(&plan, task, MonthOrdering::Calendar);
/// assert_eq!(plan.periods.len(), 1);
/// assert_eq!(plan.periods[0].name, "General");
/// # Ok::<(), almanac_core::AlmanacError>(())
/// ```
pub fn assign_task(plan: &Plan, task: Task, ordering: MonthOrdering) -> Plan {
    let mut next = plan.clone();
    insert_task(&mut next.periods, task, ordering);
    next
}

/// In-place form of [`assign_task`]; returns the destination index.
pub(crate) fn insert_task(periods: &mut Vec<Period>, task: Task, ordering: MonthOrdering) -> usize {
    let index = match select_period(periods, task.due(), ordering) {
        Some(index) => index,
        None if periods.is_empty() => {
            debug!("No periods in plan; creating '{FALLBACK_PERIOD_NAME}' for task {}", task.id);
            periods.push(Period::new(FALLBACK_PERIOD_NAME, Vec::new()));
            0
        }
        None => {
            debug!("Task {} matched no period; appending to the first", task.id);
            0
        }
    };

    let period = &mut periods[index];
    debug!("Assigning task {} to period '{}'", task.id, period.name);
    period.tasks.push(task);
    period.sort_by_due_date();
    index
}
