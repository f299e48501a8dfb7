use std::fmt;

use almanac_core::constants::{DATE_TIME_FORMAT, TIME_FORMAT};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Half-open wall-clock range `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventSpan {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl EventSpan {
    #[must_use]
    pub const fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Span of `start_time..end_time` on `date`.
    #[must_use]
    pub fn on(date: NaiveDate, start_time: NaiveTime, end_time: NaiveTime) -> Self {
        Self {
            start: NaiveDateTime::new(date, start_time),
            end: NaiveDateTime::new(date, end_time),
        }
    }

    /// Two spans overlap iff `a.start < b.end && b.start < a.end`.
    /// Touching endpoints do not overlap.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl fmt::Display for EventSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start.date() == self.end.date() {
            write!(
                f,
                "{}-{}",
                self.start.format(DATE_TIME_FORMAT),
                self.end.format(TIME_FORMAT)
            )
        } else {
            write!(
                f,
                "{}..{}",
                self.start.format(DATE_TIME_FORMAT),
                self.end.format(DATE_TIME_FORMAT)
            )
        }
    }
}
