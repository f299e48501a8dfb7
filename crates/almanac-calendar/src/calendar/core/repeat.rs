use almanac_core::types::RepeatType;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::event::SeriesId;
use super::serde_opt_date;
use crate::error::{CalendarError, CalendarResult};

/// Recurrence rule attached to an event.
///
/// `interval` is signed because it arrives unchecked from forms and API
/// payloads; [`RepeatInfo::step`] is the validated view.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepeatInfo {
    #[serde(rename = "type")]
    pub kind: RepeatType,
    #[serde(default)]
    pub interval: i32,
    #[serde(
        default,
        with = "serde_opt_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_date: Option<NaiveDate>,
    /// Series this event belongs to. Shared by every instance of one expansion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<SeriesId>,
}

impl RepeatInfo {
    #[must_use]
    pub const fn none() -> Self {
        Self {
            kind: RepeatType::None,
            interval: 0,
            end_date: None,
            id: None,
        }
    }

    #[must_use]
    pub const fn new(kind: RepeatType, interval: i32) -> Self {
        Self {
            kind,
            interval,
            end_date: None,
            id: None,
        }
    }

    #[must_use]
    pub const fn until(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    #[must_use]
    pub fn in_series(mut self, id: impl Into<String>) -> Self {
        self.id = Some(SeriesId::new(id));
        self
    }

    /// ## Summary
    /// Returns the interval as a step count usable by the recurrence engine.
    ///
    /// ## Errors
    /// Returns `CalendarError::InvalidArgument` if the interval is zero,
    /// negative, or larger than `u16::MAX`.
    pub fn step(&self) -> CalendarResult<u16> {
        if self.interval <= 0 {
            return Err(CalendarError::InvalidArgument(format!(
                "repeat interval must be positive, got {}",
                self.interval
            )));
        }
        u16::try_from(self.interval).map_err(|err| {
            CalendarError::InvalidArgument(format!(
                "repeat interval {} is too large: {err}",
                self.interval
            ))
        })
    }

    /// The earlier of the rule's own end date and `hard_cutoff`.
    #[must_use]
    pub fn bound(&self, hard_cutoff: NaiveDate) -> NaiveDate {
        self.end_date
            .map_or(hard_cutoff, |end_date| end_date.min(hard_cutoff))
    }
}
