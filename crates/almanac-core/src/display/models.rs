//! Display implementations for domain models.
//!
//! All output is markdown so the CLI can render it richly or print it as is.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{Period, Plan, PlanSummary, Priority, Task, TaskStatus};

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {} Plan", self.term)?;
        writeln!(f)?;

        if let Some(chair) = &self.chair {
            writeln!(f, "- Chair: {chair}")?;
        }
        writeln!(f, "- Term: {} to {}", self.term.start(), self.term.end())?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        if self.periods.is_empty() {
            writeln!(f, "\nNo periods in this plan.")?;
            return Ok(());
        }

        for period in &self.periods {
            writeln!(f)?;
            write!(f, "{period}")?;
        }

        let removed = self.tasks().filter(|task| !task.status.is_live()).count();
        if removed > 0 {
            writeln!(f)?;
            writeln!(f, "{removed} removed task(s) hidden.")?;
        }
        Ok(())
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}", self.name)?;
        writeln!(f)?;

        let mut shown = 0;
        for task in self.tasks.iter().filter(|task| task.status.is_live()) {
            task.fmt_line(f)?;
            shown += 1;
        }
        if shown == 0 {
            writeln!(f, "No tasks in this period.")?;
        }
        Ok(())
    }
}

impl Task {
    /// One-line list entry used inside plans and boards.
    pub(crate) fn fmt_line(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "- {}. {} ({}", self.id, self.title, self.status.with_icon())?;
        if let Some(due) = &self.due_date {
            write!(f, ", due {due}")?;
        }
        if self.priority == Priority::High {
            write!(f, ", High")?;
        }
        writeln!(f, ")")
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### {}. {} ({})",
            self.id,
            self.title,
            self.status.with_icon()
        )?;
        writeln!(f)?;

        writeln!(f, "- Priority: {}", self.priority)?;
        if let Some(start) = &self.start_date {
            writeln!(f, "- Start: {start}")?;
        }
        if let Some(due) = &self.due_date {
            writeln!(f, "- Due: {due}")?;
        }
        if !self.responsible.is_empty() {
            writeln!(f, "- Responsible: {}", self.responsible)?;
        }
        if !self.source.is_empty() {
            writeln!(f, "- Source: {}", self.source)?;
        }
        writeln!(f)?;

        if !self.comments.is_empty() {
            writeln!(f, "#### Comments")?;
            writeln!(f)?;
            writeln!(f, "{}", self.comments)?;
            writeln!(f)?;
        }

        if !self.excerpts.is_empty() {
            writeln!(f, "#### Excerpts")?;
            writeln!(f)?;
            for excerpt in &self.excerpts {
                writeln!(f, "> {excerpt}")?;
            }
            writeln!(f)?;
        }

        if !self.attachments.is_empty() {
            writeln!(f, "#### Attachments")?;
            writeln!(f)?;
            for attachment in &self.attachments {
                writeln!(f, "- {} ({})", attachment.filename, attachment.content_type)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl fmt::Display for PlanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Dashboard: {}", self.term)?;
        writeln!(f)?;

        if let Some(chair) = &self.chair {
            writeln!(f, "- **Chair**: {chair}")?;
        }
        writeln!(f, "- **As of**: {}", self.as_of)?;
        writeln!(
            f,
            "- **Progress**: {}/{} completed ({:.0}%)",
            self.completed,
            self.total_tasks,
            self.completion_percent()
        )?;
        writeln!(
            f,
            "- **Status**: {} not started, {} in progress, {} completed",
            self.not_started, self.in_progress, self.completed
        )?;
        writeln!(
            f,
            "- **Priority**: {} high, {} medium, {} low",
            self.high_priority, self.medium_priority, self.low_priority
        )?;
        if self.removed > 0 {
            writeln!(f, "- **Removed**: {}", self.removed)?;
        }

        writeln!(f)?;
        if self.overdue.is_empty() {
            writeln!(f, "Nothing overdue.")?;
        } else {
            writeln!(f, "## Overdue ({})", self.overdue.len())?;
            writeln!(f)?;
            for task in &self.overdue {
                task.fmt_line(f)?;
            }
        }
        Ok(())
    }
}
