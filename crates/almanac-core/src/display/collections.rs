//! Collection wrapper types for displaying groups of tasks.

use std::{fmt, ops::Index};

use crate::{models::Task, schedule::KanbanBoard};

/// Newtype wrapper for displaying a task listing.
///
/// # Examples
///
/// ```rust
/// use almanac_core::{display::Tasks, models::Task};
///
/// let tasks = Tasks(vec![Task::new(1, "Book venue")]);
/// assert!(tasks.to_string().contains("Book venue"));
/// assert_eq!(Tasks(vec![]).to_string(), "No tasks found.\n");
/// ```
pub struct Tasks(pub Vec<Task>);

impl Tasks {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of tasks in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the tasks.
    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.0.iter()
    }
}

impl Index<usize> for Tasks {
    type Output = Task;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a Tasks {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Tasks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No tasks found.");
        }
        for task in &self.0 {
            task.fmt_line(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for KanbanBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Board")?;
        for (status, tasks) in self.columns() {
            writeln!(f)?;
            writeln!(f, "## {} ({})", status.with_icon(), tasks.len())?;
            writeln!(f)?;
            if tasks.is_empty() {
                writeln!(f, "Nothing here.")?;
            }
            for task in tasks {
                write!(f, "- {}. {}", task.id, task.title)?;
                if !task.responsible.is_empty() {
                    write!(f, " [{}]", task.responsible)?;
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
