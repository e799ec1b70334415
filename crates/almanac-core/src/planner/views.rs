//! Read-only views over the current plan: dashboard, board and timeline.

use jiff::civil::Date;

use super::Planner;
use crate::{
    display::Timeline,
    error::Result,
    models::PlanSummary,
    schedule::{KanbanBoard, TimelineLayout},
};

impl Planner {
    /// Progress summary as of `today`.
    pub fn dashboard(&self, today: Date) -> Result<PlanSummary> {
        let plan = self.store.require()?;
        Ok(PlanSummary::new(&plan, today))
    }

    /// Live tasks bucketed by status.
    pub fn kanban(&self) -> Result<KanbanBoard> {
        let plan = self.store.require()?;
        Ok(KanbanBoard::from_tasks(plan.live_tasks()))
    }

    /// Gantt layout of live tasks, with a marker for `today` when it falls
    /// inside the term.
    pub fn timeline(&self, today: Date) -> Result<Timeline> {
        let plan = self.store.require()?;
        let layout = TimelineLayout::new(plan.term);
        Ok(Timeline {
            term: plan.term,
            columns: layout.month_columns(),
            bars: layout.bars(plan.live_tasks()),
            today: layout.position_of(today),
        })
    }
}
