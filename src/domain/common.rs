//! Shared traits and date-window primitives for ledger snapshots.

use std::fmt;

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Exposes a stable identifier for entities read from the ledger store.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Provides read-only access to an entity's display name.
pub trait NamedEntity {
    fn name(&self) -> &str;
}

/// Converts an entity into a user-facing display label.
pub trait Displayable {
    fn display_label(&self) -> String;
}

/// Half-open calendar window `[start, end)` used for reporting and queries.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DateWindowError> {
        if end <= start {
            return Err(DateWindowError::InvalidRange);
        }
        Ok(Self { start, end })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date < self.end
    }

    /// Midnight at the start of the window.
    pub fn start_instant(&self) -> NaiveDateTime {
        self.start.and_time(NaiveTime::MIN)
    }

    /// Midnight at the (exclusive) end of the window.
    pub fn end_instant(&self) -> NaiveDateTime {
        self.end.and_time(NaiveTime::MIN)
    }

    /// True when an instant interval `[from, to)` intersects this window.
    pub fn overlaps_instants(&self, from: NaiveDateTime, to: NaiveDateTime) -> bool {
        from < self.end_instant() && to > self.start_instant()
    }

    /// Number of calendar days spanned by the window.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// Iterates every calendar day in the window, in order.
    pub fn iter_days(&self) -> impl Iterator<Item = NaiveDate> {
        let start = self.start;
        let count = self.days().max(0) as usize;
        (0..count).map(move |offset| start + Duration::days(offset as i64))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Errors that can occur when constructing [`DateWindow`] values.
pub enum DateWindowError {
    InvalidRange,
}

impl fmt::Display for DateWindowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateWindowError::InvalidRange => f.write_str("date window end must be after start"),
        }
    }
}

impl std::error::Error for DateWindowError {}
