//! Core library for the Almanac committee planner.
//!
//! A plan covers one August-to-July term, split into named periods that each
//! hold tasks sorted by due date. This crate provides:
//!
//! - [`models`]: plan, period and task types with their status rules
//! - [`schedule`]: period assignment for new tasks, timeline layout and
//!   kanban bucketing, all pure functions of a plan snapshot
//! - [`planner`]: the operations an interface calls, backed by a JSON plan
//!   document ([`store`])
//! - [`display`]: markdown rendering of everything above
//! - [`assistant`]: the seam for an optional text-generation client
//!
//! # Quick Start
//!
//! ```rust
//! use almanac_core::{
//!     models::{Period, Plan, Task},
//!     schedule::{assign_task, MonthOrdering, TimelineLayout},
//! };
//!
//! let term = "2025-2026".parse()?;
//! let mut plan = Plan::new(term, None);
//! let mut kickoff = Task::new(1, "Kickoff");
//! kickoff.due_date = Some("2025-08-10".to_string());
//! plan.periods.push(Period::new("Summer", vec![kickoff]));
//!
//! let mut drive = Task::new(2, "Membership drive");
//! drive.start_date = Some("2025-09-01".to_string());
//! drive.due_date = Some("2025-09-30".to_string());
//! let plan = assign_task(&plan, drive, MonthOrdering::Calendar);
//! assert_eq!(plan.periods[0].tasks.len(), 2);
//!
//! let layout = TimelineLayout::new(plan.term);
//! let bar = layout.bar(&plan.periods[0].tasks[1]);
//! assert!(bar.left > 0.0 && bar.width >= 0.5);
//! # Ok::<(), almanac_core::AlmanacError>(())
//! ```

pub mod assistant;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod planner;
pub mod schedule;
pub mod store;
pub mod template;

// Re-export commonly used types
pub use assistant::{Assistant, TextGenerator};
pub use display::{CreateResult, OperationStatus, Tasks, Timeline, UpdateResult};
pub use error::{AlmanacError, Result};
pub use models::{
    Period, Plan, PlanSummary, Priority, Task, TaskFilter, TaskStatus, TermYear,
    UpdateTaskRequest,
};
pub use params::{AddTask, CreatePlan, Id, ListTasks, UpdateTask};
pub use planner::{Planner, PlannerBuilder};
pub use schedule::{KanbanBoard, MonthOrdering, TimelineLayout};
pub use store::PlanStore;
