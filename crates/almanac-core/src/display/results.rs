//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::models::{Plan, Task};

/// Wrapper type for displaying the result of create operations.
///
/// # Examples
///
/// ```rust
/// use almanac_core::{display::CreateResult, models::Task};
///
/// let result = CreateResult::new(Task::new(14, "Print flyers"));
/// assert!(result.to_string().starts_with("Added task with ID: 14"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Plan> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Created plan for term {} with {} task(s)",
            self.resource.term,
            self.resource.tasks().count()
        )?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for CreateResult<Task> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Added task with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of update operations, with the
/// list of fields that changed.
#[derive(Debug)]
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    /// Create an UpdateResult with a list of changes made.
    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl fmt::Display for UpdateResult<Task> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated task with ID: {}", self.resource.id)?;
        writeln!(f)?;

        if self.changes.is_empty() {
            writeln!(f, "No changes made.")?;
        } else {
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_result_lists_changes() {
        let task = Task::new(3, "Book venue");
        let result = UpdateResult::with_changes(task, vec!["Updated status".to_string()]);
        let output = result.to_string();
        assert!(output.contains("Updated task with ID: 3"));
        assert!(output.contains("- Updated status"));
    }

    #[test]
    fn test_update_result_without_changes() {
        let result = UpdateResult::with_changes(Task::new(3, "Book venue"), vec![]);
        assert!(result.to_string().contains("No changes made."));
    }
}
