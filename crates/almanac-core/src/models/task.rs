//! Task model definition and related functionality.

use jiff::civil::Date;
use log::warn;
use serde::{Deserialize, Serialize};

use super::{Priority, TaskStatus};

/// Source tag given to tasks added by hand rather than generated.
pub const USER_ADDED_SOURCE: &str = "User Added";

/// A file stored inline with a task.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Attachment {
    pub filename: String,
    /// MIME type as reported when the file was attached
    #[serde(rename = "type")]
    pub content_type: String,
    /// File content encoded as text (typically a base64 data URL)
    pub data: String,
}

/// A unit of committee work.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    /// Unique identifier within the plan, never reused
    pub id: u64,

    /// What needs doing
    pub title: String,

    /// First day of work (`YYYY-MM-DD`); older documents may omit it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,

    /// Deadline (`YYYY-MM-DD`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,

    #[serde(default)]
    pub status: TaskStatus,

    #[serde(default)]
    pub priority: Priority,

    /// Where the task came from (handbook section, "User Added", ...)
    #[serde(default)]
    pub source: String,

    /// Who owns the task
    #[serde(default)]
    pub responsible: String,

    #[serde(default)]
    pub comments: String,

    /// Read-only reference quotes
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub excerpts: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
}

impl Task {
    /// A not-started, medium-priority task with no dates.
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            start_date: None,
            due_date: None,
            status: TaskStatus::default(),
            priority: Priority::default(),
            source: String::new(),
            responsible: String::new(),
            comments: String::new(),
            excerpts: Vec::new(),
            attachments: Vec::new(),
        }
    }

    /// Parsed start date; `None` when absent or malformed.
    pub fn start(&self) -> Option<Date> {
        parse_date(self.id, "start_date", self.start_date.as_deref())
    }

    /// Parsed due date; `None` when absent or malformed.
    pub fn due(&self) -> Option<Date> {
        parse_date(self.id, "due_date", self.due_date.as_deref())
    }
}

/// Parses a `YYYY-MM-DD` string, tolerating surrounding whitespace.
pub fn parse_iso_date(raw: &str) -> Option<Date> {
    raw.trim().parse::<Date>().ok()
}

fn parse_date(id: u64, field: &str, raw: Option<&str>) -> Option<Date> {
    let raw = raw?;
    if raw.trim().is_empty() {
        return None;
    }
    let parsed = parse_iso_date(raw);
    if parsed.is_none() {
        warn!("Task {id} has malformed {field} '{raw}'");
    }
    parsed
}
