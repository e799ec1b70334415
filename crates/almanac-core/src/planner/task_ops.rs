//! Task operations for the Planner.

use log::debug;

use super::Planner;
use crate::{
    display::UpdateResult,
    error::{AlmanacError, Result},
    models::{Task, TaskFilter, TaskStatus, UpdateTaskRequest, USER_ADDED_SOURCE},
    params::{AddTask, Id, ListTasks, UpdateTask},
    schedule::insert_task,
};

impl Planner {
    /// Adds a task by hand.
    ///
    /// The task gets the next unused id and the "User Added" source tag, then
    /// goes to the period chosen by the planner's month ordering.
    ///
    /// # Errors
    ///
    /// * `AlmanacError::InvalidInput` - blank title, malformed dates, due
    ///   before start, unknown priority
    /// * `AlmanacError::PlanNotFound` - no plan has been created yet
    /// * `AlmanacError::InvalidInput` - no task id is left to hand out
    pub fn add_task(&self, params: &AddTask) -> Result<Task> {
        let (start, due, priority) = params.validate()?;
        let mut plan = self.store.require()?;

        let mut task = Task::new(plan.next_task_id()?, params.title.trim());
        task.start_date = start.map(|date| date.to_string());
        task.due_date = Some(due.to_string());
        task.priority = priority;
        task.source = USER_ADDED_SOURCE.to_string();
        task.responsible = params.responsible.clone().unwrap_or_default();
        task.comments = params.comments.clone().unwrap_or_default();

        let id = task.id;
        let index = insert_task(&mut plan.periods, task, self.ordering);
        debug!("Added task {id} to period {index}");

        let plan = self.commit(plan)?;
        plan.find_task(id)
            .cloned()
            .ok_or(AlmanacError::TaskNotFound { id })
    }

    /// Updates a task's fields in place.
    ///
    /// A changed due date re-sorts the task's period; the task stays in the
    /// period it was assigned to.
    ///
    /// # Errors
    ///
    /// * `AlmanacError::InvalidInput` - malformed field values, or dates that
    ///   would leave the task due before it starts
    /// * `AlmanacError::InvalidTransition` - the status change is not allowed
    /// * `AlmanacError::TaskNotFound` - no task with that id
    pub fn update_task(&self, params: UpdateTask) -> Result<UpdateResult<Task>> {
        let id = params.id;
        let request = UpdateTaskRequest::try_from(params)?;
        self.apply_update(id, &request)
    }

    /// Soft-deletes a task.
    pub fn remove_task(&self, params: &Id) -> Result<UpdateResult<Task>> {
        self.apply_update(params.id, &UpdateTaskRequest::status(TaskStatus::Removed))
    }

    /// Brings a removed task back as not started.
    ///
    /// # Errors
    ///
    /// * `AlmanacError::InvalidInput` - the task is not removed
    pub fn restore_task(&self, params: &Id) -> Result<UpdateResult<Task>> {
        let task = self.show_task(params)?;
        if task.status != TaskStatus::Removed {
            return Err(AlmanacError::invalid_input("status")
                .with_reason(format!("task {} is not removed", task.id)));
        }
        self.apply_update(params.id, &UpdateTaskRequest::status(TaskStatus::NotStarted))
    }

    /// A single task, removed ones included.
    pub fn show_task(&self, params: &Id) -> Result<Task> {
        let plan = self.store.require()?;
        plan.find_task(params.id)
            .cloned()
            .ok_or(AlmanacError::TaskNotFound { id: params.id })
    }

    /// Tasks matching `params`, in period order.
    pub fn list_tasks(&self, params: &ListTasks) -> Result<Vec<Task>> {
        let filter = TaskFilter::try_from(params)?;
        let plan = self.store.require()?;
        Ok(plan.tasks().filter(|task| filter.matches(task)).cloned().collect())
    }

    pub(super) fn apply_update(
        &self,
        id: u64,
        request: &UpdateTaskRequest,
    ) -> Result<UpdateResult<Task>> {
        let mut plan = self.store.require()?;

        let task = plan
            .find_task_mut(id)
            .ok_or(AlmanacError::TaskNotFound { id })?;
        let changes = request.apply(task)?;
        if request.changes_dates() {
            check_date_order(task)?;
        }
        let updated = task.clone();

        if changes.is_empty() {
            return Ok(UpdateResult::with_changes(updated, changes));
        }
        if request.changes_due_date() {
            if let Some(period) = plan
                .periods
                .iter_mut()
                .find(|period| period.tasks.iter().any(|task| task.id == id))
            {
                period.sort_by_due_date();
            }
        }

        debug!("Updated task {id}: {}", changes.join(", "));
        self.commit(plan)?;
        Ok(UpdateResult::with_changes(updated, changes))
    }
}

/// A task's due date may not come before its start date once an update has
/// been merged in.
fn check_date_order(task: &Task) -> Result<()> {
    match (task.start(), task.due()) {
        (Some(start), Some(due)) if due < start => Err(AlmanacError::invalid_input("due_date")
            .with_reason(format!(
                "task {} would be due {due}, before its start date {start}",
                task.id
            ))),
        _ => Ok(()),
    }
}
