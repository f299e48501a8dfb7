use std::fmt;

use almanac_core::types::Category;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::repeat::RepeatInfo;
use super::span::EventSpan;
use super::{serde_date, serde_time};

/// Storage-assigned event identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EventId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Identifier shared by every instance of one recurring series.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeriesId(String);

impl SeriesId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SeriesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SeriesId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// A single calendar event, or the anchor of a recurring series.
///
/// `date`, `start_time` and `end_time` are local wall-clock values with no
/// offset. `start_time < end_time` is expected but not enforced here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EventId>,
    pub title: String,
    #[serde(with = "serde_date")]
    pub date: NaiveDate,
    #[serde(with = "serde_time")]
    pub start_time: NaiveTime,
    #[serde(with = "serde_time")]
    pub end_time: NaiveTime,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub repeat: RepeatInfo,
    /// Minutes before `start_time` to remind; `0` disables the reminder.
    #[serde(default)]
    pub notification_time: u32,
}

impl Event {
    /// Creates a non-recurring event with empty text fields.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> Self {
        Self {
            id: None,
            title: title.into(),
            date,
            start_time,
            end_time,
            description: String::new(),
            location: String::new(),
            category: Category::default(),
            repeat: RepeatInfo::none(),
            notification_time: 0,
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(EventId::new(id));
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_repeat(mut self, repeat: RepeatInfo) -> Self {
        self.repeat = repeat;
        self
    }

    /// Returns a copy of this event moved to `date`; every other field is kept.
    #[must_use]
    pub fn with_date(&self, date: NaiveDate) -> Self {
        Self {
            date,
            ..self.clone()
        }
    }

    /// The half-open `[date+start, date+end)` range this event occupies.
    #[must_use]
    pub fn span(&self) -> EventSpan {
        EventSpan::on(self.date, self.start_time, self.end_time)
    }

    #[must_use]
    pub const fn is_recurring(&self) -> bool {
        self.repeat.kind.is_recurring()
    }

    #[must_use]
    pub fn series_id(&self) -> Option<&SeriesId> {
        self.repeat.id.as_ref()
    }

    /// `true` when both events carry the same explicit id.
    #[must_use]
    pub fn same_id(&self, other: &Self) -> bool {
        matches!((&self.id, &other.id), (Some(a), Some(b)) if a == b)
    }
}
