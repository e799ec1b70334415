//! High-level planner API over the plan document.
//!
//! The [`Planner`] loads the current plan snapshot, applies one operation
//! and saves the result. Operations run one at a time and never suspend; the
//! scheduling rules themselves live in [`crate::schedule`] and are pure.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Interfaces     │    │    Planner      │    │   PlanStore     │
//! │  (CLI)          │───▶│ (plan_ops,      │───▶│  (JSON file)    │
//! │                 │    │  task_ops, ...) │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!                               │
//!                               ▼
//!                        crate::schedule
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: configures document path and month ordering
//! - [`plan_ops`]: create, show, import and export whole plans
//! - [`task_ops`]: add, update, soft-delete, restore and list tasks
//! - [`views`]: dashboard, kanban board and timeline
//! - [`assistant_ops`]: plan generation, report narration, comment rewording
//!
//! # Example
//!
//! ```rust,no_run
//! use almanac_core::{params::{AddTask, CreatePlan}, PlannerBuilder};
//!
//! # fn example() -> almanac_core::Result<()> {
//! let planner = PlannerBuilder::new()
//!     .with_document_path(Some("plan.json"))
//!     .build()?;
//!
//! planner.create_plan(&CreatePlan {
//!     term_year: "2025-2026".to_string(),
//!     chair: Some("Dana".to_string()),
//!     template: true,
//! })?;
//!
//! let task = planner.add_task(&AddTask {
//!     title: "Book the hall".to_string(),
//!     due_date: "2025-10-01".to_string(),
//!     ..Default::default()
//! })?;
//! println!("{task}");
//! # Ok(())
//! # }
//! ```

pub mod assistant_ops;
pub mod builder;
pub mod plan_ops;
pub mod task_ops;
pub mod views;


pub use builder::PlannerBuilder;

use jiff::Timestamp;

use crate::{
    error::Result,
    models::Plan,
    schedule::MonthOrdering,
    store::PlanStore,
};

/// Main planner interface for managing a term's plan.
#[derive(Debug, Clone)]
pub struct Planner {
    pub(crate) store: PlanStore,
    pub(crate) ordering: MonthOrdering,
}

impl Planner {
    pub(crate) fn new(store: PlanStore, ordering: MonthOrdering) -> Self {
        Self { store, ordering }
    }

    /// Path of the plan document.
    pub fn document_path(&self) -> &std::path::Path {
        self.store.path()
    }

    /// Month comparison used for period assignment.
    pub fn month_ordering(&self) -> MonthOrdering {
        self.ordering
    }

    /// Stamp and persist `plan`.
    pub(crate) fn commit(&self, mut plan: Plan) -> Result<Plan> {
        plan.updated_at = Timestamp::now();
        self.store.save(&plan)?;
        Ok(plan)
    }
}
