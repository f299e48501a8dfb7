#![allow(clippy::expect_used, dead_code)]
//! Test helpers for integration tests.

use almanac_test::calendar::Event;
use almanac_core::config::RecurrenceConfig;
use chrono::{NaiveDate, NaiveTime};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

pub fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).expect("valid test time")
}

/// A work meeting on `day` between `start` and `end` (`HH:MM`).
pub fn meeting(title: &str, day: NaiveDate, start: (u32, u32), end: (u32, u32)) -> Event {
    Event::new(title, day, time(start.0, start.1), time(end.0, end.1))
}

pub fn titles(events: &[Event]) -> Vec<&str> {
    events.iter().map(|event| event.title.as_str()).collect()
}

/// Default horizon with no absolute cap.
pub fn recurrence_config() -> RecurrenceConfig {
    RecurrenceConfig::default()
}
