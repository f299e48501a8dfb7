use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

use crate::calendar::core::{Event, format_date, format_time, serde_date, serde_time};

/// One line of the overlap confirmation prompt.
///
/// Renders as `회의 A (2025-11-15 10:00-11:00)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConflictSummary {
    pub title: String,
    #[serde(with = "serde_date")]
    pub date: NaiveDate,
    #[serde(with = "serde_time")]
    pub start_time: NaiveTime,
    #[serde(with = "serde_time")]
    pub end_time: NaiveTime,
}

impl From<&Event> for ConflictSummary {
    fn from(event: &Event) -> Self {
        Self {
            title: event.title.clone(),
            date: event.date,
            start_time: event.start_time,
            end_time: event.end_time,
        }
    }
}

impl fmt::Display for ConflictSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} {}-{})",
            self.title,
            format_date(self.date),
            format_time(self.start_time),
            format_time(self.end_time)
        )
    }
}
