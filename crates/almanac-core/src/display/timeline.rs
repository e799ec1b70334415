//! Text Gantt chart for the timeline view.

use std::fmt;

use crate::{
    models::TermYear,
    schedule::{MonthColumn, TaskBar},
};

/// Character cells across the chart; four per month.
const CHART_WIDTH: usize = 48;

/// A laid-out timeline ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct Timeline {
    pub term: TermYear,
    pub columns: Vec<MonthColumn>,
    pub bars: Vec<TaskBar>,
    /// Left offset of today's marker, when today is inside the term
    pub today: Option<f64>,
}

/// Cell index for a percentage offset.
fn cell(percent: f64) -> usize {
    let cell = (percent / 100.0 * CHART_WIDTH as f64).floor();
    (cell.max(0.0) as usize).min(CHART_WIDTH - 1)
}

impl Timeline {
    /// The chart row for one bar: spaces with the bar drawn as `█`.
    fn row(bar: &TaskBar) -> String {
        let start = cell(bar.bar.left);
        let cells = ((bar.bar.width / 100.0 * CHART_WIDTH as f64).round() as usize).max(1);
        let end = (start + cells).min(CHART_WIDTH);
        (0..CHART_WIDTH)
            .map(|i| if (start..end).contains(&i) { '█' } else { ' ' })
            .collect()
    }
}

impl fmt::Display for Timeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Timeline: {}", self.term)?;
        writeln!(f)?;
        if self.bars.is_empty() {
            return writeln!(f, "No tasks to chart.");
        }

        let width = CHART_WIDTH / self.columns.len().max(1);
        writeln!(f, "```")?;
        write!(f, "{:>5} |", "")?;
        for column in &self.columns {
            write!(f, "{:<width$}", column.label)?;
        }
        writeln!(f, "|")?;

        for bar in &self.bars {
            writeln!(f, "{:>5} |{}| {}", bar.task_id, Self::row(bar), bar.title)?;
        }

        if let Some(today) = self.today {
            let marker: String = (0..CHART_WIDTH)
                .map(|i| if i == cell(today) { '^' } else { ' ' })
                .collect();
            writeln!(f, "{:>5} |{marker}| today", "")?;
        }
        writeln!(f, "```")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::{Task, TaskStatus},
        schedule::TimelineLayout,
    };

    fn timeline(tasks: &[Task], today: Option<f64>) -> Timeline {
        let term: TermYear = "2025-2026".parse().unwrap();
        let layout = TimelineLayout::new(term);
        Timeline {
            term,
            columns: layout.month_columns(),
            bars: layout.bars(tasks),
            today,
        }
    }

    #[test]
    fn test_row_draws_whole_term_bar() {
        let mut task = Task::new(1, "All year");
        task.start_date = Some("2025-08-01".to_string());
        task.due_date = Some("2026-07-31".to_string());

        let output = timeline(&[task], None).to_string();
        let full = "█".repeat(CHART_WIDTH);
        assert!(output.contains(&format!("    1 |{full}| All year")));
    }

    #[test]
    fn test_short_task_still_gets_a_cell() {
        let mut task = Task::new(2, "One day");
        task.start_date = Some("2025-08-01".to_string());
        task.due_date = Some("2025-08-01".to_string());
        task.status = TaskStatus::InProgress;

        let output = timeline(&[task], Some(0.0)).to_string();
        let row = format!("█{}", " ".repeat(CHART_WIDTH - 1));
        assert!(output.contains(&format!("    2 |{row}| One day")));
        assert!(output.contains("| today"));
    }

    #[test]
    fn test_header_starts_in_august() {
        let output = timeline(&[Task::new(1, "Undated")], None).to_string();
        assert!(output.contains("|Aug Sep Oct Nov Dec Jan Feb Mar Apr May Jun Jul |"));
    }

    #[test]
    fn test_empty_timeline() {
        let output = timeline(&[], None).to_string();
        assert!(output.contains("No tasks to chart."));
    }
}
