//! Scheduling logic over a plan snapshot.
//!
//! - [`assignment`]: places a new task into the right period and keeps the
//!   period sorted by due date
//! - [`layout`]: turns start/due dates into `left%`/`width%` bars on a
//!   twelve-month timeline
//! - [`kanban`]: splits live tasks into the three board columns
//!
//! Everything here is a pure function of its inputs: no I/O, no shared
//! state, and no errors. Bad dates degrade to fallback placements instead of
//! failing, so one broken record cannot blank a whole view.

pub mod assignment;
pub mod kanban;
pub mod layout;


pub use assignment::{assign_task, reference_month, select_period, MonthOrdering};
pub(crate) use assignment::insert_task;
pub use kanban::KanbanBoard;
pub use layout::{
    BarPosition, MonthColumn, TaskBar, TimelineLayout, MIN_BAR_WIDTH, POINT_MARKER_WIDTH,
};
