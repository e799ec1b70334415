//! Data models for plans, periods and tasks.
//!
//! A [`Plan`] owns an ordered list of [`Period`]s, and each period owns its
//! [`Task`]s sorted by due date. Nothing else holds a task: every change goes
//! through the plan.
//!
//! Display implementations for these models live in
//! [`crate::display::models`] so presentation stays out of the data types.
//!
//! # Examples
//!
//! ```rust
//! use almanac_core::models::{Period, Plan, Task, TaskStatus, TermYear};
//!
//! let term: TermYear = "2025-2026".parse()?;
//! let mut plan = Plan::new(term, Some("Dana".to_string()));
//!
//! let mut task = Task::new(plan.next_task_id()?, "Book venue");
//! task.due_date = Some("2025-09-01".to_string());
//! plan.periods.push(Period::new("Fall", vec![task]));
//!
//! assert_eq!(plan.next_task_id()?, 2);
//! assert_eq!(plan.find_task(1).map(|t| t.status), Some(TaskStatus::NotStarted));
//! # Ok::<(), almanac_core::AlmanacError>(())
//! ```

pub mod draft;
pub mod filters;
pub mod period;
pub mod plan;
pub mod requests;
pub mod status;
pub mod summary;
pub mod task;
pub mod term;


pub use draft::{PeriodDraft, PlanDraft, TaskDraft};
pub use filters::TaskFilter;
pub use period::{Period, FALLBACK_PERIOD_NAME};
pub use plan::Plan;
pub use requests::UpdateTaskRequest;
pub use status::{Priority, TaskStatus};
pub use summary::PlanSummary;
pub use task::{parse_iso_date, Attachment, Task, USER_ADDED_SOURCE};
pub use term::{TermYear, TERM_START_MONTH};
