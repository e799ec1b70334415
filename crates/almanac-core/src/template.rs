//! Built-in handbook plan used to seed a new term.

use jiff::civil::date;

use crate::models::{PeriodDraft, PlanDraft, Priority, TaskDraft, TermYear};

const HANDBOOK: &str = "Committee Handbook";

/// (title, start month, start day, due month, due day, priority, responsible)
type Row = (&'static str, i8, i8, i8, i8, Priority, &'static str);

const PERIODS: &[(&str, &[Row])] = &[
    (
        "Summer Kickoff",
        &[
            ("Confirm committee roster", 8, 1, 8, 15, Priority::High, "Chair"),
            ("Review last year's budget", 8, 5, 8, 25, Priority::High, "Treasurer"),
            ("Set meeting calendar", 8, 10, 8, 31, Priority::Medium, "Secretary"),
        ],
    ),
    (
        "Fall Programs",
        &[
            ("Launch membership drive", 9, 1, 9, 30, Priority::High, "Membership"),
            ("Plan fall fundraiser", 9, 15, 10, 31, Priority::Medium, "Events"),
            ("Submit mid-term report", 11, 1, 11, 15, Priority::Low, "Secretary"),
        ],
    ),
    (
        "Winter Prep",
        &[
            ("Organize holiday drive", 11, 15, 12, 15, Priority::Medium, "Events"),
            ("Audit first-half spending", 12, 1, 1, 15, Priority::High, "Treasurer"),
        ],
    ),
    (
        "Spring Events",
        &[
            ("Nominate next year's officers", 2, 1, 3, 15, Priority::High, "Chair"),
            ("Run spring gala", 3, 1, 4, 30, Priority::Medium, "Events"),
        ],
    ),
    (
        "Year-End Wrap-up",
        &[
            ("Hold officer elections", 5, 1, 5, 31, Priority::High, "Chair"),
            ("Close out accounts", 6, 1, 6, 30, Priority::High, "Treasurer"),
            ("Archive records and hand over", 7, 1, 7, 31, Priority::Low, "Secretary"),
        ],
    ),
];

/// The handbook plan with every date placed inside `term`.
pub fn handbook_draft(term: TermYear) -> PlanDraft {
    let year_of = |month: i8| {
        if month >= crate::models::TERM_START_MONTH {
            term.first_year()
        } else {
            term.first_year() + 1
        }
    };
    let day = |month: i8, day: i8| date(year_of(month), month, day).to_string();

    let periods = PERIODS
        .iter()
        .map(|(name, rows)| PeriodDraft {
            name: (*name).to_string(),
            tasks: rows
                .iter()
                .map(
                    |&(title, start_month, start_day, due_month, due_day, priority, owner)| {
                        TaskDraft {
                            title: title.to_string(),
                            start_date: Some(day(start_month, start_day)),
                            due_date: Some(day(due_month, due_day)),
                            priority,
                            source: HANDBOOK.to_string(),
                            responsible: owner.to_string(),
                            ..Default::default()
                        }
                    },
                )
                .collect(),
        })
        .collect();

    PlanDraft { periods }
}
