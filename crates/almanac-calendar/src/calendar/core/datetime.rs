//! Wire parsing for calendar dates (`YYYY-MM-DD`) and times of day (`HH:MM`).

use almanac_core::constants::{DATE_FORMAT, MAX_CALENDAR_YEAR, TIME_FORMAT};
use chrono::{Datelike, NaiveDate, NaiveTime};

use crate::error::{CalendarError, CalendarResult};

fn rejected(field: &'static str, value: &str, reason: &str) -> CalendarError {
    tracing::debug!(field, value, reason, "Rejected wire value");
    CalendarError::ParseError {
        field,
        value: value.to_string(),
    }
}

/// ## Summary
/// Parses a zero-padded `YYYY-MM-DD` calendar date.
///
/// The value must be exactly what [`format_date`] would print: no surrounding
/// whitespace, no unpadded fields, a four-digit year.
///
/// ## Errors
/// Returns `CalendarError::ParseError` if the value is not a valid date in
/// that exact form.
pub fn parse_date(value: &str) -> CalendarResult<NaiveDate> {
    let date = NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|err| rejected("date", value, &err.to_string()))?;
    if !(0..=MAX_CALENDAR_YEAR).contains(&date.year()) {
        return Err(rejected("date", value, "year outside 0000-9999"));
    }
    if format_date(date) != value {
        return Err(rejected("date", value, "not in YYYY-MM-DD form"));
    }
    Ok(date)
}

/// ## Summary
/// Parses a zero-padded `HH:MM` time of day.
///
/// ## Errors
/// Returns `CalendarError::ParseError` if the value is not a valid time in
/// exactly that form.
pub fn parse_time(value: &str) -> CalendarResult<NaiveTime> {
    let time = NaiveTime::parse_from_str(value, TIME_FORMAT)
        .map_err(|err| rejected("time", value, &err.to_string()))?;
    if format_time(time) != value {
        return Err(rejected("time", value, "not in HH:MM form"));
    }
    Ok(time)
}

#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[must_use]
pub fn format_time(time: NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

pub mod serde_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_date(*date))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_date(&raw).map_err(serde::de::Error::custom)
    }
}

pub mod serde_opt_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    #[expect(
        clippy::ref_option,
        reason = "serde `with` modules receive the field by reference"
    )]
    pub fn serialize<S: Serializer>(
        date: &Option<NaiveDate>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match date {
            Some(date) => serializer.serialize_some(&super::format_date(*date)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDate>, D::Error> {
        // The form submits an empty string when no end date is picked.
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) if !raw.trim().is_empty() => super::parse_date(&raw)
                .map(Some)
                .map_err(serde::de::Error::custom),
            _ => Ok(None),
        }
    }
}

pub mod serde_time {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_time(*time))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_time(&raw).map_err(serde::de::Error::custom)
    }
}
