//! The planning term: one August-to-July committee year.

use std::fmt;
use std::str::FromStr;

use jiff::civil::{date, Date};
use serde::{Deserialize, Serialize};

use crate::error::{AlmanacError, Result};

/// Calendar month the term opens in.
pub const TERM_START_MONTH: i8 = 8;

/// A term-year label such as `2025-2026`.
///
/// The term runs from August 1 of the first year through July 31 of the
/// second. Serialized as its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TermYear {
    first: i16,
}

impl TermYear {
    /// Term starting in August of `first`.
    pub fn new(first: i16) -> Result<Self> {
        if !(1..9999).contains(&first) {
            return Err(AlmanacError::InvalidTermYear {
                label: first.to_string(),
                reason: "year out of range".to_string(),
            });
        }
        Ok(Self { first })
    }

    /// The term that contains `day`.
    pub fn containing(day: Date) -> Self {
        let first = if day.month() >= TERM_START_MONTH {
            day.year()
        } else {
            day.year() - 1
        };
        Self { first }
    }

    /// Year the term opens in.
    pub fn first_year(&self) -> i16 {
        self.first
    }

    /// August 1 of the first year.
    pub fn start(&self) -> Date {
        date(self.first, TERM_START_MONTH, 1)
    }

    /// July 31 of the second year.
    pub fn end(&self) -> Date {
        date(self.first + 1, 7, 31)
    }

    /// Months elapsed since the term opened, 0 (August) through 11 (July).
    pub fn relative_month(month: i8) -> i8 {
        (month - TERM_START_MONTH).rem_euclid(12)
    }
}

impl FromStr for TermYear {
    type Err = AlmanacError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = |reason: &str| AlmanacError::InvalidTermYear {
            label: s.to_string(),
            reason: reason.to_string(),
        };

        let (first, second) = s
            .trim()
            .split_once('-')
            .ok_or_else(|| invalid("expected YYYY-YYYY"))?;
        if first.len() != 4 || second.len() != 4 {
            return Err(invalid("expected YYYY-YYYY"));
        }
        let first: i16 = first.parse().map_err(|_| invalid("first year is not a number"))?;
        let second: i16 = second
            .parse()
            .map_err(|_| invalid("second year is not a number"))?;
        if second != first + 1 {
            return Err(invalid("second year must follow the first"));
        }
        Self::new(first).map_err(|_| invalid("year out of range"))
    }
}

impl TryFrom<String> for TermYear {
    type Error = AlmanacError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<TermYear> for String {
    fn from(term: TermYear) -> Self {
        term.to_string()
    }
}

impl fmt::Display for TermYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:04}", self.first, self.first + 1)
    }
}
